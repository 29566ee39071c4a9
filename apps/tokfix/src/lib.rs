//! tokfix：联调用测试 token 与导入表格生成器。

pub mod cli;
pub mod commands;
pub mod render;

use tokfix_auth::AuthError;
use tokfix_config::ConfigError;
use tokfix_import::ImportError;

/// 命令行层错误。
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("token signer self-check failed: {0}")]
    SelfCheck(#[source] AuthError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),
}

impl CliError {
    /// 可操作的修复提示。
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            CliError::SelfCheck(_) => Some(
                "the HS256 signing stack could not sign and verify a self-check token; \
                 rebuild with `cargo build -p tokfix` and check the pinned jsonwebtoken version",
            ),
            CliError::Config(ConfigError::Missing(_)) => Some(
                "pass --ttl-seconds (or --access-ttl-seconds/--refresh-ttl-seconds) \
                 or export TOKFIX_ACCESS_TTL_SECONDS / TOKFIX_REFRESH_TTL_SECONDS",
            ),
            _ => None,
        }
    }
}
