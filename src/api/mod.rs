mod error;
mod handlers;
pub mod routes;
mod state;


use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use clap::ValueEnum;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ApiError, ApiResult};
pub use handlers::ForecastResponse;
pub use state::AppState;

/// Environment variable selecting the deployment environment.
pub const ENVIRONMENT_VAR: &str = "FORECAST_ENVIRONMENT";

/// Deployment environment.
///
/// Only decides whether the documentation routes are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("development") {
            Ok(Environment::Development)
        } else if value.eq_ignore_ascii_case("staging") {
            Ok(Environment::Staging)
        } else if value.eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Err(ApiError::UnknownEnvironment {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            environment: Environment::default(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `FORECAST_ENVIRONMENT`, if set and non-empty.
    pub fn new() -> ApiResult<Self> {
        let mut config = Self::default();
        match env::var(ENVIRONMENT_VAR) {
            Ok(value) if !value.trim().is_empty() => config.environment = value.parse()?,
            _ => {}
        }
        Ok(config)
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server until the process is terminated.
pub async fn run(config: Config, state: AppState) -> ApiResult<()> {
    init_tracing();

    let docs = config.environment.is_development();
    let app = routes::create_router(state, docs).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!(environment = %config.environment, "API server listening on http://{}", addr);
    if docs {
        info!("API docs available at http://{}/docs", addr);
    }

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
