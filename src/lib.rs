//! A landing page with two waitlist signup forms and the endpoint recording their emails.

pub mod app;
pub mod client;
pub mod config;
pub mod domain;
mod error;
pub mod landing;
pub mod signup;
pub mod store;
pub mod templ_manager;
pub mod web;

pub use app::{App, AppState};
pub use client::SubscribeClient;
pub use error::{Error, Result};
pub use web::serve;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Human readable logging for development, defaults to `debug` unless `RUST_LOG` says otherwise.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .compact()
        .init();
}

/// Logging for release builds, defaults to `info` unless `RUST_LOG` says otherwise.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
