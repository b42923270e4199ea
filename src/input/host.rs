//! Host environment seams
//!
//! The windowing layer and the embedding runtime are not part of this crate.
//! The mapper talks to them through these two traits.

use crate::input::types::{ButtonMask, DisplayMode, ViewportSize};

/// Live size of the rendering surface. Re-queried on every sample.
pub trait Viewport {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn size(&self) -> ViewportSize {
        ViewportSize::new(self.width(), self.height())
    }
}

/// Pointer and window queries provided by the windowing layer
pub trait InputHost {
    fn display_mode(&self) -> DisplayMode;

    fn is_window_hidden(&self) -> bool;

    /// Pointer position relative to the window (the display in fullscreen)
    fn mouse_state(&mut self) -> (i32, i32, ButtonMask);

    /// Pointer position in desktop coordinates
    fn global_mouse_state(&mut self) -> (i32, i32, ButtonMask);

    /// On-screen origin of the window's top-left corner
    fn window_position(&self) -> (i32, i32);

    fn warp_mouse_in_window(&mut self, x: i32, y: i32);
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }
}

impl<H: InputHost + ?Sized> InputHost for &mut H {
    fn display_mode(&self) -> DisplayMode {
        (**self).display_mode()
    }

    fn is_window_hidden(&self) -> bool {
        (**self).is_window_hidden()
    }

    fn mouse_state(&mut self) -> (i32, i32, ButtonMask) {
        (**self).mouse_state()
    }

    fn global_mouse_state(&mut self) -> (i32, i32, ButtonMask) {
        (**self).global_mouse_state()
    }

    fn window_position(&self) -> (i32, i32) {
        (**self).window_position()
    }

    fn warp_mouse_in_window(&mut self, x: i32, y: i32) {
        (**self).warp_mouse_in_window(x, y)
    }
}

/// A viewport whose size never changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub ViewportSize);

impl Viewport for FixedViewport {
    fn width(&self) -> i32 {
        self.0.width
    }

    fn height(&self) -> i32 {
        self.0.height
    }
}

/// The page canvas element.
///
/// When the element is missing the configured fallback size is reported. A
/// present canvas reports its client size as-is, even when that is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasViewport {
    client_size: Option<ViewportSize>,
    fallback: ViewportSize,
}

impl CanvasViewport {
    pub fn new(fallback: ViewportSize) -> Self {
        Self {
            client_size: None,
            fallback,
        }
    }

    /// Called by the embedding runtime when the canvas is attached or resized
    pub fn set_client_size(&mut self, client_size: Option<ViewportSize>) {
        self.client_size = client_size;
    }

    pub fn has_canvas(&self) -> bool {
        self.client_size.is_some()
    }
}

impl Viewport for CanvasViewport {
    fn width(&self) -> i32 {
        self.client_size.unwrap_or(self.fallback).width
    }

    fn height(&self) -> i32 {
        self.client_size.unwrap_or(self.fallback).height
    }
}
