//! Planet HUD Layout - resolution-independent placement of HUD elements
//!
//! Every element is authored once in a fixed 1920x1080 logical space.
//! The layout transform maps it onto whatever surface the host provides:
//!
//! - One uniform scale, `min(W/1920, H/1080)`, so nothing overflows
//! - Interactive controls never shrink below 2/3 of their logical size
//! - The background always covers the full surface, at the back
//!
//! Widgets here carry display state only. Drawing, fonts and input
//! plumbing belong to the host.

pub mod element;
pub mod list;
pub mod scene;
pub mod transform;
pub mod widget;

pub use element::*;
pub use list::*;
pub use scene::*;
pub use transform::*;
pub use widget::*;
