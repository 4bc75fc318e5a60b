//! HUD Scene - the element set in z-order
//!
//! Index 0 is frontmost. Painting walks the list back to front;
//! pointer hit-testing walks it front to back.

use hud_core::{DeviceBox, ElementId, LogicalBox, Point, SurfaceSize};

use crate::{
    Backdrop, CityMenu, ClockLabel, LayoutReport, LayoutTransform, ModeMenu, Scalable,
    StatusLabel, ToggleButton, Widget, WidgetKind,
};

/// Standard size of a planet clock panel
pub const CLOCK_SIZE: (i32, i32) = (200, 80);

/// Authored clock positions, by planet name
pub const CLOCK_POSITIONS: &[(&str, i32, i32)] = &[
    ("Mercury", 160, 400),
    ("Venus", 300, 335),
    ("Earth", 420, 700),
    ("Moon", 490, 310),
    ("Mars", 580, 380),
    ("Jupiter", 900, 330),
    ("Saturn", 1230, 360),
    ("Uranus", 1500, 360),
    ("Neptune", 1700, 360),
];

pub const MODE_MENU_BOX: LogicalBox = LogicalBox::new(20, 140, 300, 320);
pub const CITY_MENU_BOX: LogicalBox = LogicalBox::new(300, 140, 260, 420);
pub const BUTTON_BOX: LogicalBox = LogicalBox::new(20, 20, 260, 48);
pub const STATUS_BOX: LogicalBox = LogicalBox::new(20, 80, 260, 60);

/// Ordered set of HUD elements
#[derive(Clone, Debug, Default)]
pub struct Scene {
    widgets: Vec<Widget>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard HUD: menus above controls above clocks, background last
    ///
    /// Planets without an authored position are stacked in a column on the right.
    pub fn standard<'a, P, C>(planets: P, cities: C) -> Self
    where
        P: IntoIterator<Item = &'a str>,
        C: IntoIterator<Item = &'a str>,
    {
        let mut scene = Scene::new();
        scene.push(WidgetKind::ModeMenu(ModeMenu::new(MODE_MENU_BOX)));
        scene.push(WidgetKind::CityMenu(CityMenu::new(cities, CITY_MENU_BOX)));
        scene.push(WidgetKind::Button(ToggleButton::new(BUTTON_BOX)));
        scene.push(WidgetKind::Status(StatusLabel::new(STATUS_BOX)));

        let (w, h) = CLOCK_SIZE;
        let mut spill = 0;
        for name in planets {
            let logical = match CLOCK_POSITIONS.iter().find(|(n, _, _)| *n == name) {
                Some((_, x, y)) => LogicalBox::new(*x, *y, w, h),
                None => {
                    let b = LogicalBox::new(1700, 20 + spill * (h + 10), w, h);
                    spill += 1;
                    b
                }
            };
            scene.push(WidgetKind::Clock(ClockLabel::new(name, logical)));
        }

        scene.push(WidgetKind::Backdrop(Backdrop::new()));
        scene
    }

    /// Append an element at the back of the z-order
    pub fn push(&mut self, kind: WidgetKind) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        self.widgets.push(Widget::new(id, kind));
        id
    }

    /// Run the layout transform for a new surface size
    pub fn layout(&mut self, transform: &LayoutTransform, surface: SurfaceSize) -> LayoutReport {
        transform.apply(surface, &mut self.widgets)
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Mutable access to the elements; order stays owned by the scene
    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }

    /// Visible elements, back to front
    pub fn paint_order(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter().rev().filter(|w| w.is_visible())
    }

    /// Placed boxes, back to front
    pub fn device_boxes(&self) -> Vec<(ElementId, DeviceBox)> {
        self.paint_order().map(|w| (w.id, w.device_box())).collect()
    }

    /// Frontmost visible element under a device point
    pub fn hit_test(&self, p: Point) -> Option<&Widget> {
        self.widgets
            .iter()
            .find(|w| w.is_visible() && w.device_box().contains(p))
    }

    pub fn clock_mut(&mut self, name: &str) -> Option<&mut ClockLabel> {
        self.widgets.iter_mut().find_map(|w| match &mut w.kind {
            WidgetKind::Clock(c) if c.name == name => Some(c),
            _ => None,
        })
    }

    pub fn clocks(&self) -> impl Iterator<Item = &ClockLabel> {
        self.widgets.iter().filter_map(|w| match &w.kind {
            WidgetKind::Clock(c) => Some(c),
            _ => None,
        })
    }

    pub fn mode_menu(&self) -> Option<&ModeMenu> {
        self.widgets.iter().find_map(|w| match &w.kind {
            WidgetKind::ModeMenu(m) => Some(m),
            _ => None,
        })
    }

    pub fn mode_menu_mut(&mut self) -> Option<&mut ModeMenu> {
        self.widgets.iter_mut().find_map(|w| match &mut w.kind {
            WidgetKind::ModeMenu(m) => Some(m),
            _ => None,
        })
    }

    pub fn city_menu(&self) -> Option<&CityMenu> {
        self.widgets.iter().find_map(|w| match &w.kind {
            WidgetKind::CityMenu(m) => Some(m),
            _ => None,
        })
    }

    pub fn city_menu_mut(&mut self) -> Option<&mut CityMenu> {
        self.widgets.iter_mut().find_map(|w| match &mut w.kind {
            WidgetKind::CityMenu(m) => Some(m),
            _ => None,
        })
    }

    pub fn button(&self) -> Option<&ToggleButton> {
        self.widgets.iter().find_map(|w| match &w.kind {
            WidgetKind::Button(b) => Some(b),
            _ => None,
        })
    }

    pub fn button_mut(&mut self) -> Option<&mut ToggleButton> {
        self.widgets.iter_mut().find_map(|w| match &mut w.kind {
            WidgetKind::Button(b) => Some(b),
            _ => None,
        })
    }

    pub fn status(&self) -> Option<&StatusLabel> {
        self.widgets.iter().find_map(|w| match &w.kind {
            WidgetKind::Status(s) => Some(s),
            _ => None,
        })
    }

    pub fn status_mut(&mut self) -> Option<&mut StatusLabel> {
        self.widgets.iter_mut().find_map(|w| match &mut w.kind {
            WidgetKind::Status(s) => Some(s),
            _ => None,
        })
    }
}
