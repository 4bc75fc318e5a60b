//! Geometry primitives for the HUD layout
//!
//! All elements are authored in a fixed logical space (1920x1080).
//! Device boxes are what the rendering surface actually draws.

/// Logical canvas width
pub const LOGICAL_WIDTH: u32 = 1920;
/// Logical canvas height
pub const LOGICAL_HEIGHT: u32 = 1080;

/// Authored position and size in logical space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct LogicalBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl LogicalBox {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Position and size on the rendering surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DeviceBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl DeviceBox {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges are outside
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.w && p.y < self.y + self.h
    }

    /// Translate a surface point into this box's local coordinates
    #[inline]
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.x, p.y - self.y)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// A point in device space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Actual size of the rendering surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// The logical canvas itself
    pub const LOGICAL: SurfaceSize = SurfaceSize::new(LOGICAL_WIDTH, LOGICAL_HEIGHT);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Box covering the whole surface
    pub fn full_box(&self) -> DeviceBox {
        DeviceBox::new(0, 0, clamp_i32(self.width), clamp_i32(self.height))
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::LOGICAL
    }
}

fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
