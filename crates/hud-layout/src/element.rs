//! The "has a logical box" capability every HUD element exposes

use hud_core::{DeviceBox, LogicalBox};

/// How the layout treats an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    /// Menus, status readout, toggle button: never shrink below 2/3 of logical size
    Interactive,
    /// Clocks: scale strictly
    Decorative,
    /// Fills the whole surface, always painted first
    Background,
}

/// Anything the layout transform can place
///
/// The transform depends on this capability only, never on concrete widgets.
pub trait Scalable {
    /// Authored box in 1920x1080 logical space
    fn logical_box(&self) -> LogicalBox;

    fn category(&self) -> ElementCategory;

    /// Box computed by the last layout pass
    fn device_box(&self) -> DeviceBox;

    fn set_device_box(&mut self, device: DeviceBox);

    fn base_w(&self) -> i32 {
        self.logical_box().w
    }

    fn base_h(&self) -> i32 {
        self.logical_box().h
    }
}

/// Logical box plus its current device placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Bounds {
    pub logical: LogicalBox,
    pub device: DeviceBox,
}

impl Bounds {
    /// Device box starts equal to the logical box (layout at 1:1)
    pub fn new(logical: LogicalBox) -> Self {
        Self {
            logical,
            device: DeviceBox::new(logical.x, logical.y, logical.w, logical.h),
        }
    }
}
