//! Mapper configuration
//!
//! Loaded from a JSON file. Every field has a default, so an empty object is
//! a valid configuration that reproduces the stock 632x400 setup.

use crate::error::{MapperError, MapperResult};
use crate::input::types::{LogicalScreen, ViewportSize};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Logical width the application renders at
pub const DEFAULT_SCREEN_WIDTH: i32 = 632;
/// Logical height the application renders at
pub const DEFAULT_SCREEN_HEIGHT: i32 = 400;
/// Number of mapping passes between two diagnostic lines
pub const DEFAULT_DIAGNOSTIC_INTERVAL: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapperConfig {
    /// Fixed resolution the rest of the application consumes pointer input in
    pub logical_screen: LogicalScreen,

    /// Size reported by the canvas viewport when the canvas element is missing
    pub fallback_viewport: ViewportSize,

    /// Emit a diagnostic line every N mapping passes (0 disables)
    pub diagnostic_interval: u32,

    /// Sampling interval for the background poller
    pub poll_interval_ms: u64,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            logical_screen: LogicalScreen::default(),
            fallback_viewport: ViewportSize::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT),
            diagnostic_interval: DEFAULT_DIAGNOSTIC_INTERVAL,
            poll_interval_ms: 16,
        }
    }
}

impl MapperConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Reject configurations the mapper cannot clamp against
    pub fn validate(&self) -> MapperResult<()> {
        let screen = self.logical_screen;
        if screen.width <= 0 || screen.height <= 0 {
            return Err(MapperError::Configuration(format!(
                "logical screen must be positive, got {}x{}",
                screen.width, screen.height
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(MapperError::Configuration(
                "poll interval must be at least 1ms".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> MapperResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MapperConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::info!(
            path = %path.display(),
            screen = %config.logical_screen,
            "mapper config loaded"
        );
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> MapperResult<()> {
        let data = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, data)?;
        tracing::info!(path = %path.display(), "mapper config saved");
        Ok(())
    }
}
