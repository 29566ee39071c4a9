use crate::Role;

/// 组织范围 ID，缺省即不写入 claims。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeIds {
    pub university_id: Option<i64>,
    pub branch_id: Option<i64>,
    pub faculty_id: Option<i64>,
}

impl ScopeIds {
    /// 仅限定到大学。
    pub fn university(university_id: i64) -> Self {
        Self {
            university_id: Some(university_id),
            ..Self::default()
        }
    }
}

/// 被模拟的登录用户。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
    pub scope: ScopeIds,
}

impl UserIdentity {
    pub fn new(user_id: i64, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
            scope: ScopeIds::default(),
        }
    }

    pub fn with_scope(mut self, scope: ScopeIds) -> Self {
        self.scope = scope;
        self
    }
}
