//! 命令行定义。

use clap::{Args, Parser, Subcommand};
use domain::{Audience, Role, ScopeIds, UserIdentity};
use std::path::PathBuf;

/// 为联调/手工测试生成已签名的 JWT 与导入表格样例
#[derive(Parser, Debug)]
#[command(name = "tokfix")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    TOKFIX_ACCESS_TTL_SECONDS    Access token validity when --ttl-seconds is omitted
    TOKFIX_REFRESH_TTL_SECONDS   Refresh token validity when --ttl-seconds is omitted
    TOKFIX_API_BASE_URL          API base URL for usage hints (default: http://localhost:8082)
    TOKFIX_API_PROBE_PATH        API path for usage hints (default: /chats/all)
    TOKFIX_AUTH_BASE_URL         Auth service base URL (default: http://localhost:8080)
    TOKFIX_IMPORT_OUTPUT         Import workbook path (default: /tmp/test_import.xlsx)
    RUST_LOG                     Log filter (default: info)
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Issue a single access or refresh token
    Token(TokenArgs),
    /// Issue an access + refresh pair for the same user
    Pair(PairArgs),
    /// Write the bulk-import fixture workbook (header + one row)
    ImportRow(ImportRowArgs),
}

/// 被模拟用户的身份参数。
#[derive(Args, Debug, Clone)]
pub struct IdentityArgs {
    /// Role claim: superadmin, curator or operator
    #[arg(short, long)]
    pub role: Role,
    /// User id, written to `sub` as a string
    #[arg(short, long, default_value_t = 1)]
    pub user_id: i64,
    /// Email claim (default: <role>@example.com)
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(long)]
    pub university_id: Option<i64>,
    #[arg(long)]
    pub branch_id: Option<i64>,
    #[arg(long)]
    pub faculty_id: Option<i64>,
}

impl IdentityArgs {
    pub fn to_identity(&self) -> UserIdentity {
        let email = self
            .email
            .clone()
            .unwrap_or_else(|| format!("{}@example.com", self.role));
        UserIdentity::new(self.user_id, email, self.role).with_scope(ScopeIds {
            university_id: self.university_id,
            branch_id: self.branch_id,
            faculty_id: self.faculty_id,
        })
    }
}

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[command(flatten)]
    pub identity: IdentityArgs,
    /// Token audience: access or refresh
    #[arg(short, long, default_value = "access")]
    pub audience: Audience,
    /// Validity in seconds (falls back to TOKFIX_<AUDIENCE>_TTL_SECONDS)
    #[arg(short, long)]
    pub ttl_seconds: Option<u64>,
}

#[derive(Args, Debug)]
pub struct PairArgs {
    #[command(flatten)]
    pub identity: IdentityArgs,
    /// Access validity in seconds (falls back to TOKFIX_ACCESS_TTL_SECONDS)
    #[arg(long)]
    pub access_ttl_seconds: Option<u64>,
    /// Refresh validity in seconds (falls back to TOKFIX_REFRESH_TTL_SECONDS)
    #[arg(long)]
    pub refresh_ttl_seconds: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ImportRowArgs {
    /// Output .xlsx path (default: TOKFIX_IMPORT_OUTPUT); "-" writes tab-separated text to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Read the written workbook back and check header, data row and column count
    #[arg(long)]
    pub verify: bool,
}
