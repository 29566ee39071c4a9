use crate::AuthError;
use domain::{Audience, Role, ScopeIds, UserIdentity};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// 一次签发所用的 claims；只能经 [`ClaimBuilder`] 构造，构造后不可修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    sub: String,
    email: String,
    role: Role,
    iat: u64,
    exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    jti: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    university_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branch_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    faculty_id: Option<i64>,
}

impl ClaimSet {
    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn issued_at(&self) -> u64 {
        self.iat
    }

    pub fn expires_at(&self) -> u64 {
        self.exp
    }

    pub fn token_id(&self) -> Option<&str> {
        self.jti.as_deref()
    }

    pub fn scope(&self) -> ScopeIds {
        ScopeIds {
            university_id: self.university_id,
            branch_id: self.branch_id,
            faculty_id: self.faculty_id,
        }
    }

    /// 由 jti 是否存在推断受众。
    pub fn audience(&self) -> Audience {
        if self.jti.is_some() {
            Audience::Refresh
        } else {
            Audience::Access
        }
    }

    /// 校验时间窗口与 jti 规则（解码后的外部数据也走这里）。
    pub(crate) fn check_invariants(&self, expected: Audience) -> Result<(), AuthError> {
        if self.exp <= self.iat {
            return Err(AuthError::TokenInvalid);
        }
        if self.audience() != expected {
            return Err(AuthError::AudienceMismatch {
                expected,
                actual: self.audience(),
            });
        }
        Ok(())
    }
}

/// 按受众与有效期构造 claims。
#[derive(Debug, Clone, Copy)]
pub struct ClaimBuilder {
    audience: Audience,
    validity: Duration,
}

impl ClaimBuilder {
    /// 有效期必须由调用方显式给出，不提供默认值。
    pub fn new(audience: Audience, validity: Duration) -> Self {
        Self { audience, validity }
    }

    /// 读取一次当前时间并构造 claims。
    pub fn build(&self, user: &UserIdentity) -> Result<ClaimSet, AuthError> {
        self.build_at(user, now_epoch_seconds())
    }

    /// 以给定签发时刻构造 claims，iat 与 exp 共用同一时刻。
    pub fn build_at(&self, user: &UserIdentity, issued_at: u64) -> Result<ClaimSet, AuthError> {
        let seconds = self.validity.as_secs();
        if seconds == 0 {
            return Err(AuthError::InvalidValidity(self.validity));
        }
        let exp = issued_at
            .checked_add(seconds)
            .ok_or(AuthError::InvalidValidity(self.validity))?;
        let jti = self
            .audience
            .carries_token_id()
            .then(|| Uuid::new_v4().to_string());

        Ok(ClaimSet {
            sub: user.user_id.to_string(),
            email: user.email.clone(),
            role: user.role,
            iat: issued_at,
            exp,
            jti,
            university_id: user.scope.university_id,
            branch_id: user.scope.branch_id,
            faculty_id: user.scope.faculty_id,
        })
    }
}

/// 当前时间戳（秒）。
fn now_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
