// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use cli::{Args, is_config_command};
use tba_wrapper::config::Config;
use tba_wrapper::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("{} {} starting", tba_wrapper::NAME, tba_wrapper::VERSION);
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list {
        commands::handle_list_command();
        return Ok(());
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    let Some(operation) = args.operation.as_deref() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load().await?;
    commands::handle_request_command(&args, &config, operation).await
}
