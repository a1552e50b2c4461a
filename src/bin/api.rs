//! Forecast API server binary.
//!
//! Resolves configuration from flags and the environment, wires the system
//! clock and entropy source into the application state, and serves until
//! terminated.

use std::net::IpAddr;

use clap::Parser;
use forecast::api::{self, ApiError, AppState, Config, Environment};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(forecast::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "forecast-api")]
#[command(author, version, about = "Weather forecast API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Deployment environment (defaults to FORECAST_ENVIRONMENT, then production)
    #[arg(long, value_enum)]
    environment: Option<Environment>,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let config = match cli.environment {
        Some(environment) => Config::default().with_environment(environment),
        None => Config::new()?,
    }
    .with_host(cli.host)
    .with_port(cli.port);

    api::run(config, AppState::system()).await?;

    Ok(())
}
