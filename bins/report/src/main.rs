//! Neraca report runner.
//!
//! Generates a Profit & Loss, Balance Sheet or Trial Balance from the ledger
//! database and prints it as JSON on stdout. Logs go to stderr.

mod cli;
mod render;
mod telemetry;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use neraca_core::reports::ReportGenerator;
use neraca_db::{ReportRepository, connect};
use neraca_shared::{AppConfig, AppError, AppResult};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            eprintln!("{}: {err}", err.error_code());
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> AppResult<String> {
    // Reject bad filters before touching config or the database
    let filter = cli.filter()?;

    let config = AppConfig::load()?;
    telemetry::init(&config.logging).map_err(|e| AppError::Internal(format!("{e:#}")))?;

    let db = connect(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(report = %cli.report, "connected to database");

    let generator = ReportGenerator::new(ReportRepository::new(db));
    render::render(&generator, cli.report, &filter, cli.pretty).await
}
