//! Trip Plan API server binary.
//!
//! # Environment Variables
//!
//! - `PORT`     — HTTP port (default: 8080)
//! - `RUST_LOG` — Tracing filter (default: "info,trip_plan_api=debug,tower_http=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```
//!
//! Exits with status 1 if the port cannot be bound.

use std::process::ExitCode;

use anyhow::Context;
use trip_plan_api::{serve, telemetry, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if tracing::enabled!(tracing::Level::ERROR) {
                tracing::error!("trip-plan-api exited with error: {e:#}");
            } else {
                // The filter drops errors (e.g. RUST_LOG=off); stderr still gets the cause.
                eprintln!("trip-plan-api exited with error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("reading configuration")?;
    tracing::info!(version = trip_plan_api::VERSION, "starting trip-plan-api on {}", config.addr);
    serve(config).await.context("serving HTTP")?;
    Ok(())
}
