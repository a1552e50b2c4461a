//! API server error types.

use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while configuring or running the API server.
///
/// The forecast handler itself cannot fail; everything here is
/// infrastructure.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind listener on {addr}")]
    #[diagnostic(
        code(forecast::api::bind),
        help("Is another process already listening on this port? Try a different --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(forecast::api::serve))]
    Serve(#[source] std::io::Error),

    #[error("Unknown environment '{value}'")]
    #[diagnostic(
        code(forecast::api::unknown_environment),
        help("Expected one of: development, staging, production")
    )]
    UnknownEnvironment { value: String },
}

/// Result type for API server operations.
pub type ApiResult<T> = Result<T, ApiError>;
