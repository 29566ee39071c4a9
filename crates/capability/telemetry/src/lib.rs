//! 日志初始化与调用 ID 生成。

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt};

/// 初始化 tracing（默认 info），输出到 stderr，保持 stdout 可直接复制。
/// stderr 非终端时不输出颜色控制符。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

/// 生成本次调用的追踪 ID。
pub fn new_invocation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
