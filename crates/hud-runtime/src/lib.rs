//! Planet HUD Runtime - event dispatch, tick loop and frame snapshots
//!
//! `Hud` owns the time engine and the scene and is driven by two inputs:
//! periodic ticks and host events. `HudService` runs it on a tokio task.

pub mod event;
pub mod hud;
pub mod service;

pub use event::*;
pub use hud::*;
pub use service::*;
