//! 终端输出：token、解码后的 claims 摘要与可直接复制的 curl 命令。

use chrono::DateTime;
use domain::Audience;
use std::fmt::{self, Write};
use tokfix_auth::{ClaimSet, IssuedToken, TokenPair};
use tokfix_config::FixtureConfig;

// 被测环境种子用户的口令
const SEED_PASSWORD: &str = "password";

/// 单个 token 的完整输出。
pub fn render_token(
    issued: &IssuedToken,
    decoded: &ClaimSet,
    config: &FixtureConfig,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "=== Test Token Generated ===")?;
    write_summary(&mut out, &issued.claims)?;
    writeln!(out)?;
    write_token_block(&mut out, issued, decoded)?;
    writeln!(out, "=== Usage ===")?;
    match issued.audience {
        Audience::Access => write_access_usage(&mut out, &issued.token, config)?,
        Audience::Refresh => write_refresh_usage(&mut out, &issued.claims, config)?,
    }
    Ok(out)
}

/// access/refresh 成对输出。
pub fn render_pair(
    pair: &TokenPair,
    decoded: [&ClaimSet; 2],
    config: &FixtureConfig,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "=== JWT Token Pair ===")?;
    write_summary(&mut out, &pair.access.claims)?;
    writeln!(out)?;
    write_token_block(&mut out, &pair.access, decoded[0])?;
    write_token_block(&mut out, &pair.refresh, decoded[1])?;
    writeln!(out, "=== Usage ===")?;
    write_access_usage(&mut out, &pair.access.token, config)?;
    writeln!(out)?;
    write_refresh_usage(&mut out, &pair.refresh.claims, config)?;
    Ok(out)
}

/// epoch 秒格式化为 UTC 时间。
pub fn format_epoch(seconds: u64) -> String {
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{seconds} (out of range)"))
}

fn write_summary(out: &mut String, claims: &ClaimSet) -> fmt::Result {
    let scope = claims.scope();
    writeln!(out, "Role: {}", claims.role())?;
    writeln!(out, "User ID: {}", claims.subject())?;
    writeln!(out, "Email: {}", claims.email())?;
    if let Some(id) = scope.university_id {
        writeln!(out, "University ID: {id}")?;
    }
    if let Some(id) = scope.branch_id {
        writeln!(out, "Branch ID: {id}")?;
    }
    if let Some(id) = scope.faculty_id {
        writeln!(out, "Faculty ID: {id}")?;
    }
    Ok(())
}

fn write_token_block(out: &mut String, issued: &IssuedToken, decoded: &ClaimSet) -> fmt::Result {
    let claims = serde_json::to_string_pretty(decoded).map_err(|_| fmt::Error)?;
    writeln!(
        out,
        "{label} TOKEN (issued: {issued_at}, expires: {expires_at}):\n{token}\n\n\
         Decoded claims:\n{claims}\n",
        label = issued.audience.as_str().to_uppercase(),
        issued_at = format_epoch(issued.claims.issued_at()),
        expires_at = format_epoch(issued.claims.expires_at()),
        token = issued.token,
    )
}

fn write_access_usage(out: &mut String, token: &str, config: &FixtureConfig) -> fmt::Result {
    writeln!(
        out,
        "# Call the API with the access token:\n\
         curl -H 'Authorization: Bearer {token}' {url}",
        url = config.api_probe_url(),
    )
}

fn write_refresh_usage(out: &mut String, claims: &ClaimSet, config: &FixtureConfig) -> fmt::Result {
    let login_body = serde_json::json!({ "email": claims.email(), "password": SEED_PASSWORD });
    let refresh_body = serde_json::json!({ "refresh_token": "<refresh_token>" });
    let auth = &config.auth_base_url;
    writeln!(
        out,
        "# NOTE: a generated refresh token is not stored by the auth service and will be rejected.\n\
         # Log in to obtain a live token pair:\n\
         curl -X POST -H 'Content-Type: application/json' \\\n\
         \x20 -d '{login_body}' \\\n\
         \x20 {auth}/login\n\
         # Then exchange the returned refresh_token:\n\
         # curl -X POST -H 'Content-Type: application/json' \\\n\
         #   -d '{refresh_body}' \\\n\
         #   {auth}/refresh"
    )
}
