//! 领域模型：角色、受众与组织范围，供签发与命令行共享。

pub mod identity;

pub use identity::{ScopeIds, UserIdentity};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 领域层错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("unknown role: {0} (expected superadmin, curator or operator)")]
    UnknownRole(String),
    #[error("unknown audience: {0} (expected access or refresh)")]
    UnknownAudience(String),
}

/// 被测服务识别的用户角色（封闭枚举）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Curator,
    Operator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Superadmin, Role::Curator, Role::Operator];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Curator => "curator",
            Role::Operator => "operator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| DomainError::UnknownRole(value.to_string()))
    }
}

/// token 受众：access 用于 API 调用，refresh 仅用于续期。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    Access,
    Refresh,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Access => "access",
            Audience::Refresh => "refresh",
        }
    }

    /// refresh 类 token 必须携带 jti，access 类不得携带。
    pub fn carries_token_id(&self) -> bool {
        matches!(self, Audience::Refresh)
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "access" => Ok(Audience::Access),
            "refresh" => Ok(Audience::Refresh),
            other => Err(DomainError::UnknownAudience(other.to_string())),
        }
    }
}
