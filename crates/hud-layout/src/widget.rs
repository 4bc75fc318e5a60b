//! HUD widgets: display state only, painting belongs to the host

use hud_core::{DeviceBox, ElementId, LogicalBox, TimeBase};

use crate::{Bounds, ElementCategory, ItemList, Scalable, CITY_ITEM_HEIGHT, MODE_ITEM_HEIGHT};

/// Caption shown before the first engine update
pub const DEFAULT_BUTTON_CAPTION: &str = "CITY / MODE SWITCH";

/// One planet's clock readout
#[derive(Clone, Debug, PartialEq)]
pub struct ClockLabel {
    pub name: String,
    /// Raw clock value last pushed
    pub value: f64,
    /// Formatted `HH:MM:SS.ss`
    pub text: String,
    bounds: Bounds,
}

impl ClockLabel {
    pub fn new(name: &str, logical: LogicalBox) -> Self {
        Self {
            name: name.to_string(),
            value: 0.0,
            text: String::new(),
            bounds: Bounds::new(logical),
        }
    }

    pub fn set_reading(&mut self, value: f64, text: String) {
        self.value = value;
        self.text = text;
    }
}

/// Mode and city readout
#[derive(Clone, Debug, PartialEq)]
pub struct StatusLabel {
    pub lines: [String; 2],
    bounds: Bounds,
}

impl StatusLabel {
    pub fn new(logical: LogicalBox) -> Self {
        Self {
            lines: Default::default(),
            bounds: Bounds::new(logical),
        }
    }
}

/// Collapsible list of time bases
#[derive(Clone, Debug, PartialEq)]
pub struct ModeMenu {
    pub list: ItemList,
    pub visible: bool,
    bounds: Bounds,
}

impl ModeMenu {
    pub fn new(logical: LogicalBox) -> Self {
        Self {
            list: ItemList::new(TimeBase::ALL.iter().map(|b| b.menu_label()), MODE_ITEM_HEIGHT),
            visible: false,
            bounds: Bounds::new(logical),
        }
    }

    /// Time base under a y coordinate local to the menu
    pub fn base_at(&self, local_y: i32) -> Option<TimeBase> {
        self.list.item_at(local_y).and_then(TimeBase::from_index)
    }
}

/// Collapsible, scrollable list of cities
#[derive(Clone, Debug, PartialEq)]
pub struct CityMenu {
    pub list: ItemList,
    pub visible: bool,
    bounds: Bounds,
}

impl CityMenu {
    pub fn new<I, S>(cities: I, logical: LogicalBox) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            list: ItemList::new(cities, CITY_ITEM_HEIGHT),
            visible: false,
            bounds: Bounds::new(logical),
        }
    }

    pub fn scroll(&mut self, rotation: i32) {
        self.list.scroll(rotation, self.bounds.device.h);
    }

    pub fn visible_items(&self) -> &[String] {
        &self.list.items()[self.list.visible_range(self.bounds.device.h)]
    }
}

/// Opens the mode menu; caption tracks the active mode or city
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleButton {
    pub caption: String,
    pub hover: bool,
    bounds: Bounds,
}

impl ToggleButton {
    pub fn new(logical: LogicalBox) -> Self {
        Self {
            caption: DEFAULT_BUTTON_CAPTION.to_string(),
            hover: false,
            bounds: Bounds::new(logical),
        }
    }
}

/// Full-surface backdrop
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    bounds: Bounds,
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            bounds: Bounds::new(LogicalBox::new(
                0,
                0,
                hud_core::LOGICAL_WIDTH as i32,
                hud_core::LOGICAL_HEIGHT as i32,
            )),
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

/// Concrete element kinds
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    Clock(ClockLabel),
    Status(StatusLabel),
    ModeMenu(ModeMenu),
    CityMenu(CityMenu),
    Button(ToggleButton),
    Backdrop(Backdrop),
}

/// An element of the scene
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub id: ElementId,
    pub kind: WidgetKind,
}

impl Widget {
    pub fn new(id: ElementId, kind: WidgetKind) -> Self {
        Self { id, kind }
    }

    fn bounds(&self) -> &Bounds {
        match &self.kind {
            WidgetKind::Clock(w) => &w.bounds,
            WidgetKind::Status(w) => &w.bounds,
            WidgetKind::ModeMenu(w) => &w.bounds,
            WidgetKind::CityMenu(w) => &w.bounds,
            WidgetKind::Button(w) => &w.bounds,
            WidgetKind::Backdrop(w) => &w.bounds,
        }
    }

    fn bounds_mut(&mut self) -> &mut Bounds {
        match &mut self.kind {
            WidgetKind::Clock(w) => &mut w.bounds,
            WidgetKind::Status(w) => &mut w.bounds,
            WidgetKind::ModeMenu(w) => &mut w.bounds,
            WidgetKind::CityMenu(w) => &mut w.bounds,
            WidgetKind::Button(w) => &mut w.bounds,
            WidgetKind::Backdrop(w) => &mut w.bounds,
        }
    }

    /// Collapsed menus are neither drawn nor hit
    pub fn is_visible(&self) -> bool {
        match &self.kind {
            WidgetKind::ModeMenu(m) => m.visible,
            WidgetKind::CityMenu(m) => m.visible,
            _ => true,
        }
    }
}

impl Scalable for Widget {
    fn logical_box(&self) -> LogicalBox {
        self.bounds().logical
    }

    fn category(&self) -> ElementCategory {
        match self.kind {
            WidgetKind::Clock(_) => ElementCategory::Decorative,
            WidgetKind::Backdrop(_) => ElementCategory::Background,
            WidgetKind::Status(_)
            | WidgetKind::ModeMenu(_)
            | WidgetKind::CityMenu(_)
            | WidgetKind::Button(_) => ElementCategory::Interactive,
        }
    }

    fn device_box(&self) -> DeviceBox {
        self.bounds().device
    }

    fn set_device_box(&mut self, device: DeviceBox) {
        self.bounds_mut().device = device;
        if let WidgetKind::CityMenu(menu) = &mut self.kind {
            menu.list.clamp_offset(device.h);
        }
    }
}
