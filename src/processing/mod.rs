//! Offline processing of recorded pointer input
//!
//! Replays recorded host samples through the mapper so a recording can be
//! inspected or exported in logical screen coordinates.

pub mod replay;

pub use replay::{replay, ButtonEvent, MappedSample, PointerSample, ReplayHost, ReplayOutput};
