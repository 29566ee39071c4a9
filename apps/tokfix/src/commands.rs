//! 子命令处理。

use crate::CliError;
use crate::cli::{Commands, ImportRowArgs, PairArgs, TokenArgs};
use crate::render::{render_pair, render_token};
use domain::Audience;
use std::io::Write;
use std::path::Path;
use tokfix_auth::FixtureIssuer;
use tokfix_config::FixtureConfig;
use tokfix_import::ImportSheet;

/// 使用固定密钥的签发器执行子命令，结果写入 `out`。
pub fn run<W: Write>(
    command: Commands,
    config: &FixtureConfig,
    out: &mut W,
) -> Result<(), CliError> {
    run_with_issuer(command, &FixtureIssuer::new(), config, out)
}

/// 使用指定签发器执行子命令；签发前先做自检，导入表格命令不需要签发器。
pub fn run_with_issuer<W: Write>(
    command: Commands,
    issuer: &FixtureIssuer,
    config: &FixtureConfig,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Commands::Token(args) => {
            issuer.self_check().map_err(CliError::SelfCheck)?;
            token(issuer, args, config, out)
        }
        Commands::Pair(args) => {
            issuer.self_check().map_err(CliError::SelfCheck)?;
            pair(issuer, args, config, out)
        }
        Commands::ImportRow(args) => import_row(args, config, out),
    }
}

fn token<W: Write>(
    issuer: &FixtureIssuer,
    args: TokenArgs,
    config: &FixtureConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let validity = match args.audience {
        Audience::Access => config.access_validity(args.ttl_seconds)?,
        Audience::Refresh => config.refresh_validity(args.ttl_seconds)?,
    };
    let user = args.identity.to_identity();
    let issued = issuer.issue(&user, args.audience, validity)?;
    let decoded = issuer.signer(args.audience).decode(&issued.token)?;
    tracing::info!(audience = %args.audience, role = %user.role, "token generated");
    out.write_all(render_token(&issued, &decoded, config)?.as_bytes())?;
    Ok(())
}

fn pair<W: Write>(
    issuer: &FixtureIssuer,
    args: PairArgs,
    config: &FixtureConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let access_validity = config.access_validity(args.access_ttl_seconds)?;
    let refresh_validity = config.refresh_validity(args.refresh_ttl_seconds)?;
    let user = args.identity.to_identity();
    let pair = issuer.issue_pair(&user, access_validity, refresh_validity)?;
    let access = issuer.signer(Audience::Access).decode(&pair.access.token)?;
    let refresh = issuer.signer(Audience::Refresh).decode(&pair.refresh.token)?;
    tracing::info!(role = %user.role, "token pair generated");
    out.write_all(render_pair(&pair, [&access, &refresh], config)?.as_bytes())?;
    Ok(())
}

fn import_row<W: Write>(
    args: ImportRowArgs,
    config: &FixtureConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let sheet = ImportSheet::sample();
    let path = args.output.unwrap_or_else(|| config.import_output.clone());
    if path == Path::new("-") {
        sheet.write_tsv(&mut *out)?;
        return Ok(());
    }

    sheet.write_xlsx(&path)?;
    tracing::info!(path = %path.display(), "import workbook written");
    writeln!(out, "Import workbook written: {}", path.display())?;

    if args.verify {
        let report = ImportSheet::read_xlsx(&path)?.verify()?;
        writeln!(
            out,
            "Verified: {} header columns, {} data row(s)",
            report.header_columns, report.data_rows
        )?;
    }
    Ok(())
}
