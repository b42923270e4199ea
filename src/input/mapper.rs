//! Pointer coordinate mapping
//!
//! Translates the host pointer position into the fixed logical screen the
//! application renders at. The viewport is scaled down (or up) with integer
//! arithmetic and the result is always clamped into the logical bounds.

use crate::config::MapperConfig;
use crate::input::diagnostics::{DiagnosticSink, StdoutSink, TickCounter};
use crate::input::host::{InputHost, Viewport};
use crate::input::types::{DisplayMode, LogicalScreen, MappingReport, PointerState, ViewportSize};

/// What a single call to [`PointerMapper::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A pending warp was sent to the host; the mapped position is unchanged
    Warped { x: i32, y: i32 },
    /// A pending warp was dropped because the window is hidden
    WarpSkipped,
    /// The pointer was sampled and mapped
    Mapped(MappingReport),
}

pub struct PointerMapper<S = StdoutSink> {
    screen: LogicalScreen,
    counter: TickCounter,
    sink: S,
}

impl PointerMapper<StdoutSink> {
    pub fn from_config(config: &MapperConfig) -> Self {
        Self::new(config, StdoutSink)
    }
}

impl<S: DiagnosticSink> PointerMapper<S> {
    pub fn new(config: &MapperConfig, sink: S) -> Self {
        Self {
            screen: config.logical_screen,
            counter: TickCounter::new(config.diagnostic_interval),
            sink,
        }
    }

    pub fn screen(&self) -> LogicalScreen {
        self.screen
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Sample the pointer once and update `state`.
    ///
    /// A pending warp request takes the whole tick: it is honoured (or dropped
    /// when the window is hidden), cleared, and nothing else is sampled.
    pub fn update<H, V>(&mut self, state: &mut PointerState, host: &mut H, viewport: &V) -> Tick
    where
        H: InputHost + ?Sized,
        V: Viewport + ?Sized,
    {
        if state.warp.pending {
            state.warp.pending = false;
            if host.is_window_hidden() {
                tracing::debug!(x = state.warp.x, y = state.warp.y, "warp dropped, window hidden");
                return Tick::WarpSkipped;
            }
            host.warp_mouse_in_window(state.warp.x, state.warp.y);
            return Tick::Warped {
                x: state.warp.x,
                y: state.warp.y,
            };
        }

        let (raw_x, raw_y) = match host.display_mode() {
            DisplayMode::Fullscreen => {
                let (x, y, buttons) = host.mouse_state();
                state.buttons = buttons;
                state.abs_x = x;
                state.abs_y = y;
                (x, y)
            }
            DisplayMode::Windowed => {
                let (x, y, buttons) = host.global_mouse_state();
                state.buttons = buttons;
                state.abs_x = x;
                state.abs_y = y;
                let (window_x, window_y) = host.window_position();
                (x.saturating_sub(window_x), y.saturating_sub(window_y))
            }
        };

        state.raw_x = raw_x;
        state.raw_y = raw_y;

        let viewport = ViewportSize::new(viewport.width(), viewport.height());
        let (x, y) = map_position(raw_x, raw_y, viewport, self.screen);
        state.x = x;
        state.y = y;

        let report = MappingReport {
            raw_x,
            raw_y,
            viewport,
            screen: self.screen,
            x,
            y,
        };

        if self.counter.tick() {
            self.sink.report(&report);
        }

        Tick::Mapped(report)
    }
}

/// Scale a window-relative position into logical space and clamp it.
///
/// An unavailable viewport (either side non-positive) passes the raw position
/// through unscaled before clamping.
pub fn map_position(
    raw_x: i32,
    raw_y: i32,
    viewport: ViewportSize,
    screen: LogicalScreen,
) -> (i32, i32) {
    let (x, y) = if viewport.is_available() {
        (
            scale_to_logical(raw_x, screen.width, viewport.width),
            scale_to_logical(raw_y, screen.height, viewport.height),
        )
    } else {
        (raw_x, raw_y)
    };

    clamp_to_screen(x, y, screen)
}

/// `raw * logical / viewport`, truncating toward zero.
///
/// `viewport` must be positive.
pub fn scale_to_logical(raw: i32, logical: i32, viewport: i32) -> i32 {
    debug_assert!(viewport > 0);
    let scaled = i64::from(raw) * i64::from(logical) / i64::from(viewport);
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Clamp into `[0, width - 1] x [0, height - 1]`
pub fn clamp_to_screen(x: i32, y: i32, screen: LogicalScreen) -> (i32, i32) {
    (
        x.clamp(0, (screen.width - 1).max(0)),
        y.clamp(0, (screen.height - 1).max(0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::diagnostics::CollectingSink;
    use crate::input::host::{CanvasViewport, FixedViewport};
    use crate::input::types::ButtonMask;

    struct FakeHost {
        mode: DisplayMode,
        hidden: bool,
        local: (i32, i32),
        global: (i32, i32),
        window: (i32, i32),
        buttons: ButtonMask,
        warps: Vec<(i32, i32)>,
        queries: usize,
    }

    impl FakeHost {
        fn fullscreen(x: i32, y: i32) -> Self {
            Self {
                mode: DisplayMode::Fullscreen,
                hidden: false,
                local: (x, y),
                global: (x, y),
                window: (0, 0),
                buttons: ButtonMask::default(),
                warps: Vec::new(),
                queries: 0,
            }
        }

        fn windowed(global: (i32, i32), window: (i32, i32)) -> Self {
            Self {
                mode: DisplayMode::Windowed,
                global,
                window,
                ..Self::fullscreen(0, 0)
            }
        }
    }

    impl InputHost for FakeHost {
        fn display_mode(&self) -> DisplayMode {
            self.mode
        }

        fn is_window_hidden(&self) -> bool {
            self.hidden
        }

        fn mouse_state(&mut self) -> (i32, i32, ButtonMask) {
            self.queries += 1;
            (self.local.0, self.local.1, self.buttons)
        }

        fn global_mouse_state(&mut self) -> (i32, i32, ButtonMask) {
            self.queries += 1;
            (self.global.0, self.global.1, self.buttons)
        }

        fn window_position(&self) -> (i32, i32) {
            self.window
        }

        fn warp_mouse_in_window(&mut self, x: i32, y: i32) {
            self.warps.push((x, y));
        }
    }

    fn config(width: i32, height: i32) -> MapperConfig {
        MapperConfig {
            logical_screen: LogicalScreen::new(width, height),
            ..MapperConfig::default()
        }
    }

    fn viewport(width: i32, height: i32) -> FixedViewport {
        FixedViewport(ViewportSize::new(width, height))
    }

    #[test]
    fn test_scales_into_logical_space() {
        let mut mapper = PointerMapper::new(&config(320, 200), ());
        let mut state = PointerState::default();
        let mut host = FakeHost::fullscreen(100, 50);

        mapper.update(&mut state, &mut host, &viewport(640, 400));

        assert_eq!((state.x, state.y), (50, 25));
        assert_eq!((state.raw_x, state.raw_y), (100, 50));
        assert_eq!((state.abs_x, state.abs_y), (100, 50));
    }

    #[test]
    fn test_clamps_past_bottom_right() {
        let mut mapper = PointerMapper::new(&config(320, 200), ());
        let mut state = PointerState::default();
        let mut host = FakeHost::fullscreen(1000, 1000);

        let tick = mapper.update(&mut state, &mut host, &viewport(640, 400));

        assert_eq!((state.x, state.y), (319, 199));
        match tick {
            Tick::Mapped(report) => assert_eq!((report.x, report.y), (319, 199)),
            other => panic!("expected a mapped tick, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_viewport_falls_back_to_raw() {
        let mut mapper = PointerMapper::new(&config(320, 200), ());
        let mut state = PointerState::default();

        let mut host = FakeHost::fullscreen(100, 50);
        mapper.update(&mut state, &mut host, &viewport(0, 0));
        assert_eq!((state.x, state.y), (100, 50));

        // Unscaled values are still clamped
        let mut host = FakeHost::fullscreen(500, -20);
        mapper.update(&mut state, &mut host, &viewport(0, 0));
        assert_eq!((state.x, state.y), (319, 0));
    }

    #[test]
    fn test_one_unavailable_side_disables_scaling() {
        assert_eq!(
            map_position(100, 50, ViewportSize::new(640, -1), LogicalScreen::new(320, 200)),
            (100, 50)
        );
        assert_eq!(
            map_position(100, 50, ViewportSize::new(0, 400), LogicalScreen::new(320, 200)),
            (100, 50)
        );
    }

    #[test]
    fn test_windowed_subtracts_window_origin() {
        let mut mapper = PointerMapper::new(&config(632, 400), ());
        let mut state = PointerState::default();
        let mut host = FakeHost::windowed((300, 250), (100, 50));
        host.buttons = ButtonMask(ButtonMask::LEFT);

        mapper.update(&mut state, &mut host, &viewport(1264, 800));

        assert_eq!((state.abs_x, state.abs_y), (300, 250));
        assert_eq!((state.raw_x, state.raw_y), (200, 200));
        assert_eq!((state.x, state.y), (100, 100));
        assert!(state.buttons.left());
    }

    #[test]
    fn test_pointer_left_of_window_clamps_to_zero() {
        let mut mapper = PointerMapper::new(&config(632, 400), ());
        let mut state = PointerState::default();
        let mut host = FakeHost::windowed((40, 30), (100, 50));

        mapper.update(&mut state, &mut host, &viewport(632, 400));

        assert_eq!((state.raw_x, state.raw_y), (-60, -20));
        assert_eq!((state.x, state.y), (0, 0));
    }

    #[test]
    fn test_missing_canvas_uses_stock_size() {
        let cfg = MapperConfig::default();
        let mut mapper = PointerMapper::new(&cfg, ());
        let mut state = PointerState::default();
        let mut host = FakeHost::fullscreen(316, 200);

        let canvas = CanvasViewport::new(cfg.fallback_viewport);
        mapper.update(&mut state, &mut host, &canvas);

        assert_eq!((state.x, state.y), (316, 200));
    }

    #[test]
    fn test_pending_warp_takes_the_tick() {
        let mut mapper = PointerMapper::new(&config(320, 200), ());
        let mut state = PointerState {
            x: 7,
            y: 9,
            ..PointerState::default()
        };
        state.request_warp(30, 40);
        let mut host = FakeHost::fullscreen(100, 50);

        let tick = mapper.update(&mut state, &mut host, &viewport(640, 400));

        assert_eq!(tick, Tick::Warped { x: 30, y: 40 });
        assert_eq!(host.warps, vec![(30, 40)]);
        assert_eq!(host.queries, 0, "warp tick must not sample the pointer");
        assert_eq!((state.x, state.y), (7, 9));
        assert!(!state.has_pending_warp());

        // Honoured exactly once; the next tick maps again
        mapper.update(&mut state, &mut host, &viewport(640, 400));
        assert_eq!(host.warps.len(), 1);
        assert_eq!((state.x, state.y), (50, 25));
    }

    #[test]
    fn test_hidden_window_drops_warp() {
        let mut mapper = PointerMapper::new(&config(320, 200), ());
        let mut state = PointerState::default();
        state.request_warp(30, 40);
        let mut host = FakeHost::fullscreen(100, 50);
        host.hidden = true;

        let tick = mapper.update(&mut state, &mut host, &viewport(640, 400));

        assert_eq!(tick, Tick::WarpSkipped);
        assert!(host.warps.is_empty());
        assert!(!state.has_pending_warp());
        assert_eq!((state.x, state.y), (0, 0));
    }

    #[test]
    fn test_diagnostics_every_sixtieth_pass() {
        let mut mapper = PointerMapper::new(&config(320, 200), CollectingSink::default());
        let mut state = PointerState::default();
        let mut host = FakeHost::fullscreen(100, 50);

        for _ in 0..59 {
            mapper.update(&mut state, &mut host, &viewport(640, 400));
        }
        assert!(mapper.sink().reports.is_empty());

        mapper.update(&mut state, &mut host, &viewport(640, 400));
        assert_eq!(mapper.sink().reports.len(), 1);

        for _ in 0..119 {
            mapper.update(&mut state, &mut host, &viewport(640, 400));
        }
        let reports = mapper.into_sink().reports;
        assert_eq!(reports.len(), 2);
        assert_eq!(
            reports[0],
            MappingReport {
                raw_x: 100,
                raw_y: 50,
                viewport: ViewportSize::new(640, 400),
                screen: LogicalScreen::new(320, 200),
                x: 50,
                y: 25,
            }
        );
    }

    #[test]
    fn test_warp_ticks_do_not_count_toward_diagnostics() {
        let mut mapper = PointerMapper::new(&config(320, 200), CollectingSink::default());
        let mut state = PointerState::default();
        let mut host = FakeHost::fullscreen(100, 50);

        for i in 0..60 {
            if i % 2 == 0 {
                state.request_warp(1, 1);
                mapper.update(&mut state, &mut host, &viewport(640, 400));
            }
            mapper.update(&mut state, &mut host, &viewport(640, 400));
        }

        assert_eq!(mapper.sink().reports.len(), 1);
    }

    #[test]
    fn test_mapped_always_within_bounds() {
        let screen = LogicalScreen::new(320, 200);
        let raws = [i32::MIN, -1_000_000, -1, 0, 1, 99, 639, 640, 1_000_000, i32::MAX];
        let viewports = [1, 2, 199, 320, 640, 4096, i32::MAX];

        for &raw in &raws {
            for &w in &viewports {
                for &h in &viewports {
                    let (x, y) = map_position(raw, raw, ViewportSize::new(w, h), screen);
                    assert!((0..320).contains(&x), "x={} for raw={} viewport={}x{}", x, raw, w, h);
                    assert!((0..200).contains(&y), "y={} for raw={} viewport={}x{}", y, raw, w, h);
                }
            }
        }
    }

    #[test]
    fn test_scale_truncates_toward_zero() {
        assert_eq!(scale_to_logical(3, 320, 640), 1);
        assert_eq!(scale_to_logical(-3, 320, 640), -1);
        assert_eq!(scale_to_logical(i32::MAX, 632, 1), i32::MAX);
    }
}
