//! Planet HUD Time Engine - one time source, many planetary clocks
//!
//! This crate implements the time derivation engine:
//! - Mission elapsed time (MET) at x1, x10 and x100
//! - Real-world time of day for a fixed set of world cities
//! - Projection of the reference Earth seconds onto every planet
//! - 24-hour display formatting, including retrograde bodies

pub mod clock;
pub mod engine;
pub mod format;

pub use clock::*;
pub use engine::*;
pub use format::*;
