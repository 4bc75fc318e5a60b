//! Planet HUD Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the HUD:
//! - Time bases (mission-elapsed scales and real-world time)
//! - Fixed city and planet registries, validated once at startup
//! - Logical and device geometry for the resolution-independent layout
//! - Element identifiers and the shared error type

pub mod error;
pub mod geometry;
pub mod id;
pub mod mode;
pub mod registry;

pub use error::*;
pub use geometry::*;
pub use id::*;
pub use mode::*;
pub use registry::*;

/// Seconds in one Earth day; also Earth's rotation period
pub const SECONDS_PER_DAY: f64 = 86_400.0;
