//! 生成器运行配置加载。

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8082";
const DEFAULT_API_PROBE_PATH: &str = "/chats/all";
const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_IMPORT_OUTPUT: &str = "/tmp/test_import.xlsx";

pub const ACCESS_TTL_KEY: &str = "TOKFIX_ACCESS_TTL_SECONDS";
pub const REFRESH_TTL_KEY: &str = "TOKFIX_REFRESH_TTL_SECONDS";

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 生成器运行配置。
///
/// 有效期保留原始字符串，仅在签发 token 时解析，导入表格命令不受其影响。
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub access_ttl_seconds: Option<String>,
    pub refresh_ttl_seconds: Option<String>,
    pub api_base_url: String,
    pub api_probe_path: String,
    pub auth_base_url: String,
    pub import_output: PathBuf,
}

impl FixtureConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_ttl_seconds = read_optional(ACCESS_TTL_KEY);
        let refresh_ttl_seconds = read_optional(REFRESH_TTL_KEY);
        let api_base_url = read_with_default("TOKFIX_API_BASE_URL", DEFAULT_API_BASE_URL);
        let api_probe_path = read_with_default("TOKFIX_API_PROBE_PATH", DEFAULT_API_PROBE_PATH);
        let auth_base_url = read_with_default("TOKFIX_AUTH_BASE_URL", DEFAULT_AUTH_BASE_URL);
        let import_output =
            PathBuf::from(read_with_default("TOKFIX_IMPORT_OUTPUT", DEFAULT_IMPORT_OUTPUT));

        Ok(Self {
            access_ttl_seconds,
            refresh_ttl_seconds,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_probe_path,
            auth_base_url: auth_base_url.trim_end_matches('/').to_string(),
            import_output,
        })
    }

    /// access 有效期：命令行参数优先，其次环境变量，均缺失即报错。
    pub fn access_validity(&self, flag: Option<u64>) -> Result<Duration, ConfigError> {
        resolve_validity(flag, self.access_ttl_seconds.as_deref(), ACCESS_TTL_KEY)
    }

    /// refresh 有效期，规则同 access。
    pub fn refresh_validity(&self, flag: Option<u64>) -> Result<Duration, ConfigError> {
        resolve_validity(flag, self.refresh_ttl_seconds.as_deref(), REFRESH_TTL_KEY)
    }

    /// 被测 API 的完整探测地址。
    pub fn api_probe_url(&self) -> String {
        let path = self.api_probe_path.trim_start_matches('/');
        format!("{}/{}", self.api_base_url, path)
    }
}

fn resolve_validity(
    flag: Option<u64>,
    configured: Option<&str>,
    key: &str,
) -> Result<Duration, ConfigError> {
    let seconds = match (flag, configured) {
        (Some(seconds), _) => seconds,
        (None, Some(raw)) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(key.to_string(), raw.to_string()))?,
        (None, None) => return Err(ConfigError::Missing(format!("--ttl-seconds or {key}"))),
    };
    if seconds == 0 {
        return Err(ConfigError::Invalid(key.to_string(), seconds.to_string()));
    }
    Ok(Duration::from_secs(seconds))
}

fn read_with_default(key: &str, default: &str) -> String {
    read_optional(key).unwrap_or_else(|| default.to_string())
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
