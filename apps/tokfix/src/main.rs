//! tokfix 命令行入口。

use clap::Parser;
use std::process::ExitCode;
use tokfix::cli::Cli;
use tokfix::commands;
use tokfix_config::FixtureConfig;
use tokfix_telemetry::{init_tracing, new_invocation_id};

fn main() -> ExitCode {
    // 加载本地 .env（如存在）
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let span = tracing::info_span!("tokfix", invocation_id = %new_invocation_id());
    let _guard = span.enter();

    let result = FixtureConfig::from_env()
        .map_err(tokfix::CliError::from)
        .and_then(|config| commands::run(cli.command, &config, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "tokfix failed");
            eprintln!("Error: {err}");
            if let Some(hint) = err.remediation() {
                eprintln!("Hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}
