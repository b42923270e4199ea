//! Pointer Map - host pointer positions in a fixed logical resolution.
//!
//! The application renders at a fixed logical size onto a canvas whose pixel
//! size follows the browser window. This crate samples the host pointer once
//! per tick and maps it into logical screen space.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;

pub use config::MapperConfig;
pub use error::{MapperError, MapperResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointer_map=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Pointer Map v{}", env!("CARGO_PKG_VERSION"));
}
