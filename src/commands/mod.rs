//! Command handlers
//!
//! Each handler backs one subcommand of the `pointer-map` binary.

pub mod map;
pub mod replay;
