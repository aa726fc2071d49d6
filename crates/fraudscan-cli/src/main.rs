use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod logging;
mod render;
mod repl;

use cli::{Cli, Commands, HistoryAction};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.global.verbose, cli.global.log_stderr)?;

    let config = bootstrap::load_config(&cli.global)?;
    let usecase = Arc::new(bootstrap::build_usecase(&config, cli.global.ephemeral)?);

    match cli.command {
        None => repl::run(usecase).await,
        Some(Commands::Scan { url, json }) => commands::scan::run(&usecase, &url, json).await,
        Some(Commands::History { action }) => {
            commands::history::run(&usecase, action.unwrap_or(HistoryAction::List)).await
        }
    }
}
