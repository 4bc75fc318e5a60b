//! Messages between the HUD runtime and its host
//!
//! Hosts deliver `HudEvent`s; the runtime answers with `HudSignal`s.
//! Every state change flows through these, so selection completion is an
//! explicit message rather than a captured callback.

use hud_core::{Point, SurfaceSize, TimeBase};
use hud_layout::LayoutReport;
use hud_time::{Projection, StatusLines};

/// Input from the host
#[derive(Clone, Debug, PartialEq)]
pub enum HudEvent {
    /// A time base was picked
    ModeSelected(TimeBase),
    /// A mode menu row was picked; rows outside the menu are ignored
    ModeIndexSelected(usize),
    /// A city was picked; indices outside the registry are ignored
    CitySelected(usize),
    /// The mode/city toggle button was pressed
    TogglePressed,
    /// Pointer press in device coordinates
    PointerPressed(Point),
    /// Pointer motion in device coordinates
    PointerMoved(Point),
    /// Pointer left the surface
    PointerExited,
    /// Wheel rotation at a device point; positive scrolls down
    Wheel { at: Point, rotation: i32 },
    /// Scroll the open city menu without a pointer
    ScrollCities(i32),
    /// The rendering surface changed size
    Resized(SurfaceSize),
}

/// A collapsible selection surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    ModeMenu,
    CityMenu,
}

/// Output to the host
#[derive(Clone, Debug, PartialEq)]
pub enum HudSignal {
    /// Show a selection surface
    Expand(Surface),
    /// Hide a selection surface
    Collapse(Surface),
    /// New toggle button caption
    Caption(String),
    /// New status readout
    Status(StatusLines),
    /// Fresh planetary clock values
    Clocks(Projection),
    /// Elements were re-placed
    Layout(LayoutReport),
}
