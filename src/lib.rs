//! # Trip Plan API
//!
//! HTTP API server for Trip Plan. It exposes a liveness probe and the
//! versioned API root:
//!
//! - `GET /health`  → `{"status":"ok"}`
//! - `GET /api/v1/` → `{"message":"Trip Plan API"}`
//!
//! Every other path is answered with a 404. The router is built by
//! [`server::app_router`] and served by [`server::serve`].

pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use server::{app_router, serve};

/// Crate version, as published in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
