//! Replay of recorded pointer samples
//!
//! Feeds a recording of host pointer samples through the mapper tick by tick,
//! exactly as the live input layer would, and collects the mapped positions
//! plus button transitions for inspection or export.

use crate::config::MapperConfig;
use crate::error::MapperResult;
use crate::input::diagnostics::DiagnosticSink;
use crate::input::host::{CanvasViewport, InputHost};
use crate::input::mapper::{PointerMapper, Tick};
use crate::input::types::{ButtonMask, DisplayMode, PointerState, ViewportSize};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded host pointer sample
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    /// Pointer position; desktop coordinates when windowed, display when fullscreen
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub buttons: ButtonMask,
    #[serde(default)]
    pub window_x: i32,
    #[serde(default)]
    pub window_y: i32,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default)]
    pub hidden: bool,
    /// Canvas client size; absent when the canvas element was missing
    #[serde(default)]
    pub viewport_width: Option<i32>,
    #[serde(default)]
    pub viewport_height: Option<i32>,
    /// Pointer move requested by the application before this sample
    #[serde(default)]
    pub warp_to: Option<(i32, i32)>,
}

impl PointerSample {
    fn canvas_size(&self) -> Option<ViewportSize> {
        match (self.viewport_width, self.viewport_height) {
            (Some(width), Some(height)) => Some(ViewportSize::new(width, height)),
            _ => None,
        }
    }
}

/// Mapped output for one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedSample {
    pub index: usize,
    pub raw_x: i32,
    pub raw_y: i32,
    pub x: i32,
    pub y: i32,
    pub buttons: ButtonMask,
    pub warped: bool,
}

/// A press or release observed between two ticks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonEvent {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub button: String,
    pub event_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayOutput {
    pub samples: Vec<MappedSample>,
    pub button_events: Vec<ButtonEvent>,
}

/// Input host backed by one recorded sample at a time
#[derive(Debug, Default)]
pub struct ReplayHost {
    current: PointerSample,
    warps: Vec<(i32, i32)>,
}

impl ReplayHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, sample: PointerSample) {
        self.current = sample;
    }

    /// Warps the mapper asked for, in order
    pub fn warps(&self) -> &[(i32, i32)] {
        &self.warps
    }
}

impl InputHost for ReplayHost {
    fn display_mode(&self) -> DisplayMode {
        if self.current.fullscreen {
            DisplayMode::Fullscreen
        } else {
            DisplayMode::Windowed
        }
    }

    fn is_window_hidden(&self) -> bool {
        self.current.hidden
    }

    fn mouse_state(&mut self) -> (i32, i32, ButtonMask) {
        (self.current.x, self.current.y, self.current.buttons)
    }

    fn global_mouse_state(&mut self) -> (i32, i32, ButtonMask) {
        (self.current.x, self.current.y, self.current.buttons)
    }

    fn window_position(&self) -> (i32, i32) {
        (self.current.window_x, self.current.window_y)
    }

    fn warp_mouse_in_window(&mut self, x: i32, y: i32) {
        self.warps.push((x, y));
    }
}

const TRACKED_BUTTONS: [(u32, &str); 3] = [
    (ButtonMask::LEFT, "left"),
    (ButtonMask::MIDDLE, "middle"),
    (ButtonMask::RIGHT, "right"),
];

/// Run every sample through a fresh mapper.
///
/// A sample carrying `warp_to` queues the request first, so that tick is
/// consumed by the warp and the sample's own position is not mapped.
pub fn replay<S: DiagnosticSink>(
    samples: &[PointerSample],
    config: &MapperConfig,
    sink: S,
) -> ReplayOutput {
    let mut mapper = PointerMapper::new(config, sink);
    let mut state = PointerState::default();
    let mut host = ReplayHost::new();
    let mut canvas = CanvasViewport::new(config.fallback_viewport);
    let mut output = ReplayOutput {
        samples: Vec::with_capacity(samples.len()),
        button_events: Vec::new(),
    };
    let mut last_buttons = ButtonMask::default();

    for (index, sample) in samples.iter().enumerate() {
        if let Some((x, y)) = sample.warp_to {
            state.request_warp(x, y);
        }

        canvas.set_client_size(sample.canvas_size());
        host.load(sample.clone());

        let tick = mapper.update(&mut state, &mut host, &canvas);
        let warped = !matches!(tick, Tick::Mapped(_));

        if !warped {
            for (bit, name) in TRACKED_BUTTONS {
                let was_down = last_buttons.0 & bit != 0;
                let is_down = state.buttons.0 & bit != 0;
                if was_down != is_down {
                    output.button_events.push(ButtonEvent {
                        index,
                        x: state.x,
                        y: state.y,
                        button: name.to_string(),
                        event_type: if is_down { "down".to_string() } else { "up".to_string() },
                    });
                }
            }
            last_buttons = state.buttons;
        }

        output.samples.push(MappedSample {
            index,
            raw_x: state.raw_x,
            raw_y: state.raw_y,
            x: state.x,
            y: state.y,
            buttons: state.buttons,
            warped,
        });
    }

    output
}

pub fn load_samples(path: &Path) -> MapperResult<Vec<PointerSample>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<PointerSample> = serde_json::from_str(&content)?;
    Ok(samples)
}

pub fn write_output(path: &Path, output: &ReplayOutput) -> MapperResult<()> {
    let data = serde_json::to_vec_pretty(output)?;
    std::fs::write(path, data)?;
    Ok(())
}
