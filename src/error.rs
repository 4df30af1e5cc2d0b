//! Error types for the Trip Plan API server.
//!
//! Only startup and the accept loop can fail. Unmatched routes are answered
//! with a 404 and never surface here.

use std::net::SocketAddr;
use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while configuring, binding or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The `PORT` environment variable is not a valid port number.
    #[error("invalid port {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error after it started listening.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
