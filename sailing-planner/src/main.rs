use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use sailing_planner::cli::{CliError, run_file, run_once};
use sailing_planner::config::{AppConfig, InputSource};
use sailing_planner::data::load_catalog;
use sailing_planner::web::{AppState, serve};

/// Logs go to stderr; stdout carries only the result document.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().map_err(CliError::from)?;
    let catalog = load_catalog(&config.data_file).map_err(CliError::from)?;

    match &config.input {
        InputSource::Stdin => {
            let document = run_once(&catalog, &config, std::io::stdin().lock())?;
            println!("{document}");
        }
        InputSource::File(path) => {
            let document = run_file(&catalog, &config, path)?;
            println!("{document}");
        }
        InputSource::Api => {
            let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
            info!(addr = %config.listen_addr, "sailing planner listening");
            info!("  GET  /health         - Health check");
            info!("  POST /routes/search  - Find the best route");

            serve(listener, AppState::new(catalog, config.search)).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
