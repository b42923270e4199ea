//! Pointer input mapping
//!
//! Samples the host pointer once per tick and maps it into the fixed logical
//! screen. Host queries are injected through [`host::InputHost`] and
//! [`host::Viewport`]; periodic diagnostics go to a [`diagnostics::DiagnosticSink`].

pub mod diagnostics;
pub mod host;
pub mod mapper;
pub mod poller;
pub mod types;

pub use diagnostics::{DiagnosticSink, StdoutSink, TickCounter, TracingSink};
pub use host::{CanvasViewport, FixedViewport, InputHost, Viewport};
pub use mapper::{map_position, PointerMapper, Tick};
pub use poller::{start_pointer_polling, SharedPointer};
pub use types::{ButtonMask, DisplayMode, LogicalScreen, MappingReport, PointerState, ViewportSize};
