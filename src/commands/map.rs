//! One-shot mapping command

use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use crate::input::mapper::map_position;
use crate::input::types::{MappingReport, ViewportSize};

/// Parse a `WIDTHxHEIGHT` viewport argument
pub fn parse_viewport(value: &str) -> MapperResult<ViewportSize> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| MapperError::InvalidArgument(format!("expected WIDTHxHEIGHT, got {:?}", value)))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| MapperError::InvalidArgument(format!("bad viewport dimension {:?}: {}", part, e)))
    };

    Ok(ViewportSize::new(parse(width)?, parse(height)?))
}

/// Map a single window-relative position
pub fn map_point(x: i32, y: i32, viewport: ViewportSize, config: &MapperConfig) -> MappingReport {
    let screen = config.logical_screen;
    let (mapped_x, mapped_y) = map_position(x, y, viewport, screen);

    if !viewport.is_available() {
        tracing::warn!(%viewport, "viewport unavailable, mapping unscaled");
    }

    MappingReport {
        raw_x: x,
        raw_y: y,
        viewport,
        screen,
        x: mapped_x,
        y: mapped_y,
    }
}
