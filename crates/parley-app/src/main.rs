use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod controller;
pub mod error;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();

    let cli = Cli::parse();

    let profiles = profile::profiles_dir();
    profile::init_user_config(&profiles)?;
    let config = profile::load_user_profile(&profiles, &cli.profile)?.with_env_overrides();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let state = Arc::new(AppState::new(config));
            let controller = AppController::new(state);

            // Shutdown future (Ctrl+C)
            let shutdown = async {
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("failed to listen for ctrl+c: {e}");
                    std::future::pending::<()>().await;
                }
            };

            tracing::info!("Serving host requests on stdin/stdout");
            controller
                .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), shutdown)
                .await
        }
        Command::Dictionary { action } => commands::run_dictionary(&config, action),
        Command::Profile { action } => commands::run_profile(&profiles, action),
    }
}
