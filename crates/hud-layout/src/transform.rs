//! Layout Transform - maps logical 1920x1080 boxes onto any surface size

use tracing::debug;

use hud_core::{DeviceBox, LogicalBox, SurfaceSize};

use crate::{ElementCategory, Scalable};

/// Layout transform configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Authoring canvas
    pub logical: SurfaceSize,
    /// Interactive floor as a fraction of logical size: numerator
    pub floor_num: i32,
    /// Interactive floor as a fraction of logical size: denominator
    pub floor_den: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            logical: SurfaceSize::LOGICAL,
            floor_num: 2,
            floor_den: 3,
        }
    }
}

/// Outcome of one layout pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutReport {
    pub scale: f64,
    /// Did the background have to move to the back?
    pub background_reordered: bool,
}

/// Uniform, aspect-preserving layout
#[derive(Clone, Debug, Default)]
pub struct LayoutTransform {
    config: LayoutConfig,
}

impl LayoutTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Uniform scale; zero if either surface dimension is zero
    pub fn scale(&self, surface: SurfaceSize) -> f64 {
        let sx = surface.width as f64 / self.config.logical.width as f64;
        let sy = surface.height as f64 / self.config.logical.height as f64;
        sx.min(sy)
    }

    /// Map one logical box, truncating toward zero, then apply the floor
    pub fn map_box(&self, logical: LogicalBox, category: ElementCategory, scale: f64) -> DeviceBox {
        let scaled = |v: i32| (v as f64 * scale) as i32;
        let mut device = DeviceBox::new(
            scaled(logical.x),
            scaled(logical.y),
            scaled(logical.w),
            scaled(logical.h),
        );

        if category == ElementCategory::Interactive {
            device.w = device.w.max(self.floor(logical.w));
            device.h = device.h.max(self.floor(logical.h));
        }
        device
    }

    fn floor(&self, logical: i32) -> i32 {
        logical * self.config.floor_num / self.config.floor_den
    }

    /// Place every element for the given surface
    ///
    /// Backgrounds get the full surface last and are moved to the end of
    /// `elements`, which is the back of the z-order (index 0 is frontmost).
    /// Calling this again with the same inputs changes nothing.
    pub fn apply<T: Scalable>(&self, surface: SurfaceSize, elements: &mut Vec<T>) -> LayoutReport {
        let scale = self.scale(surface);

        for element in elements.iter_mut() {
            if element.category() == ElementCategory::Background {
                continue;
            }
            let device = self.map_box(element.logical_box(), element.category(), scale);
            element.set_device_box(device);
        }

        let full = surface.full_box();
        for element in elements.iter_mut() {
            if element.category() == ElementCategory::Background {
                element.set_device_box(full);
            }
        }

        let background_reordered = send_backgrounds_to_back(elements);

        debug!(
            width = surface.width,
            height = surface.height,
            scale,
            elements = elements.len(),
            "layout applied"
        );

        LayoutReport {
            scale,
            background_reordered,
        }
    }
}

/// Stable move of backgrounds to the end; returns whether anything moved
fn send_backgrounds_to_back<T: Scalable>(elements: &mut Vec<T>) -> bool {
    let is_back = |e: &T| e.category() == ElementCategory::Background;
    let first_back = elements.iter().position(is_back);
    let already_sorted = match first_back {
        None => true,
        Some(i) => elements[i..].iter().all(is_back),
    };
    if already_sorted {
        return false;
    }

    elements.sort_by_key(|e| is_back(e));
    true
}
