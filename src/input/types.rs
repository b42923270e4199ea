use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the application owns the whole display or sits in a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    Fullscreen,
    #[default]
    Windowed,
}

/// Pressed pointer buttons, one bit per button (`1 << (button - 1)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonMask(pub u32);

impl ButtonMask {
    pub const LEFT: u32 = 1 << 0;
    pub const MIDDLE: u32 = 1 << 1;
    pub const RIGHT: u32 = 1 << 2;
    pub const X1: u32 = 1 << 3;
    pub const X2: u32 = 1 << 4;

    pub fn left(self) -> bool {
        self.0 & Self::LEFT != 0
    }

    pub fn middle(self) -> bool {
        self.0 & Self::MIDDLE != 0
    }

    pub fn right(self) -> bool {
        self.0 & Self::RIGHT != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// The fixed resolution pointer input is delivered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalScreen {
    pub width: i32,
    pub height: i32,
}

impl LogicalScreen {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for LogicalScreen {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SCREEN_WIDTH, crate::config::DEFAULT_SCREEN_HEIGHT)
    }
}

impl fmt::Display for LogicalScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Rendering surface size as reported by the host at query time.
///
/// Either dimension may be zero or negative, which means the host could not
/// report a usable size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl ViewportSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_available(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for ViewportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A queued request to move the hardware pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarpRequest {
    pub pending: bool,
    pub x: i32,
    pub y: i32,
}

/// Pointer state shared with the rest of the application.
///
/// Written once per sample by the mapper only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerState {
    /// Position in display (fullscreen) or desktop (windowed) coordinates
    pub abs_x: i32,
    pub abs_y: i32,
    /// Position relative to the window's top-left corner
    pub raw_x: i32,
    pub raw_y: i32,
    /// Position in logical screen space, always within bounds
    pub x: i32,
    pub y: i32,
    pub buttons: ButtonMask,
    pub warp: WarpRequest,
}

impl PointerState {
    /// Queue a pointer move; honoured on the next tick
    pub fn request_warp(&mut self, x: i32, y: i32) {
        self.warp = WarpRequest {
            pending: true,
            x,
            y,
        };
    }

    pub fn has_pending_warp(&self) -> bool {
        self.warp.pending
    }
}

/// Everything one mapping pass saw and produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingReport {
    pub raw_x: i32,
    pub raw_y: i32,
    pub viewport: ViewportSize,
    pub screen: LogicalScreen,
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for MappingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pointer: raw({},{}) viewport({}) screen({}) final({},{})",
            self.raw_x, self.raw_y, self.viewport, self.screen, self.x, self.y
        )
    }
}
