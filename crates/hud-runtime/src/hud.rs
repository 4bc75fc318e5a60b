//! HUD runtime - engine, scene and event dispatch behind one writer

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use hud_core::{
    CityRegistry, DeviceBox, ElementId, HudResult, PlanetRegistry, Point, SurfaceSize, TimeBase,
};
use hud_layout::{LayoutReport, LayoutTransform, Scalable, Scene, Widget, WidgetKind};
use hud_time::{format_clock, CitySurface, Projection, StatusLines, TimeEngine, TimeEngineConfig};

use crate::{HudEvent, HudSignal, Surface};

/// HUD runtime configuration
#[derive(Clone, Debug)]
pub struct HudConfig {
    /// Tick interval
    pub tick_interval: Duration,
    /// Surface size before the host reports one
    pub surface: SurfaceSize,
    /// Maximum queued host events
    pub event_buffer: usize,
    /// Time engine startup state
    pub engine: TimeEngineConfig,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            tick_interval: Duration::from_millis(100),
            surface: SurfaceSize::new(1280, 720),
            event_buffer: 64,
            engine: TimeEngineConfig::default(),
        }
    }
}

impl HudConfig {
    /// 20 Hz updates for hosts that redraw cheaply
    pub fn fast_tick() -> Self {
        HudConfig {
            tick_interval: Duration::from_millis(50),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HudStats {
    pub ticks: u64,
    pub events: u64,
    pub ignored_events: u64,
    pub layouts: u64,
    pub last_tick_duration: Duration,
}

/// One clock as displayed
#[derive(Clone, Debug, PartialEq)]
pub struct ClockReading {
    pub name: String,
    pub value: f64,
    pub text: String,
}

/// What an element shows
#[derive(Clone, Debug, PartialEq)]
pub enum ElementView {
    Clock { name: String, text: String },
    Status { lines: [String; 2] },
    ModeMenu { items: Vec<String>, hover: Option<usize> },
    /// Only the rows currently scrolled into view
    CityMenu {
        items: Vec<String>,
        first: usize,
        hover: Option<usize>,
    },
    Button { caption: String, hover: bool },
    Backdrop,
}

/// An element placed on the surface
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedElement {
    pub id: ElementId,
    pub device: DeviceBox,
    pub view: ElementView,
}

/// Snapshot of everything a host needs to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct HudFrame {
    pub time_base: TimeBase,
    pub earth_seconds: f64,
    pub clocks: Vec<ClockReading>,
    pub status: StatusLines,
    pub caption: String,
    pub mode_menu_open: bool,
    pub city_menu_open: bool,
    pub surface: SurfaceSize,
    /// Visible elements, back to front
    pub elements: Vec<PlacedElement>,
}

impl HudFrame {
    pub fn clock(&self, name: &str) -> Option<&ClockReading> {
        self.clocks.iter().find(|c| c.name == name)
    }
}

impl Default for HudFrame {
    fn default() -> Self {
        HudFrame {
            time_base: TimeBase::default(),
            earth_seconds: 0.0,
            clocks: Vec::new(),
            status: StatusLines {
                mode: String::new(),
                secondary: String::new(),
            },
            caption: String::new(),
            mode_menu_open: false,
            city_menu_open: false,
            surface: SurfaceSize::default(),
            elements: Vec::new(),
        }
    }
}

/// What a pointer press resolved to
enum PressTarget {
    Mode(Option<TimeBase>),
    City(Option<usize>),
    Toggle,
    Outside,
}

/// HUD runtime - the single writer of engine and scene state
pub struct Hud {
    engine: TimeEngine,
    scene: Scene,
    transform: LayoutTransform,
    surface: SurfaceSize,
    earth_seconds: f64,
    config: HudConfig,
    stats: HudStats,
}

impl Hud {
    /// Create a HUD over the standard cities and solar system
    pub fn new(config: HudConfig, now: DateTime<Utc>) -> HudResult<Self> {
        Self::with_registries(CityRegistry::world()?, PlanetRegistry::solar_system()?, config, now)
    }

    pub fn with_registries(
        cities: CityRegistry,
        planets: PlanetRegistry,
        config: HudConfig,
        now: DateTime<Utc>,
    ) -> HudResult<Self> {
        let scene = Scene::standard(planets.iter().map(|p| p.name()), cities.names());
        let engine = TimeEngine::with_config(cities, planets, config.engine.clone(), now)?;

        let mut hud = Hud {
            engine,
            scene,
            transform: LayoutTransform::new(),
            surface: config.surface,
            earth_seconds: 0.0,
            config,
            stats: HudStats::default(),
        };
        hud.relayout();
        hud.refresh(now);
        hud.sync_labels();
        if !hud.engine.time_base().is_simulation() {
            hud.set_open(Surface::CityMenu, true);
        }
        Ok(hud)
    }

    /// Periodic update: derive, push to clocks, snapshot
    pub fn tick(&mut self, now: DateTime<Utc>) -> HudFrame {
        let start = Instant::now();
        self.stats.ticks += 1;

        self.refresh(now);

        self.stats.last_tick_duration = start.elapsed();
        trace!(ticks = self.stats.ticks, earth = self.earth_seconds, "tick");
        self.frame()
    }

    /// Apply one host event and report what changed
    pub fn handle(&mut self, event: HudEvent, now: DateTime<Utc>) -> Vec<HudSignal> {
        self.stats.events += 1;
        match event {
            HudEvent::ModeSelected(base) => self.select_mode(base, now),
            HudEvent::ModeIndexSelected(index) => match TimeBase::from_index(index) {
                Some(base) => self.select_mode(base, now),
                None => {
                    self.stats.ignored_events += 1;
                    debug!(index, "mode index out of range, ignored");
                    Vec::new()
                }
            },
            HudEvent::CitySelected(index) => self.select_city(index, now),
            HudEvent::TogglePressed => self.toggle_pressed(),
            HudEvent::PointerPressed(p) => self.pointer_pressed(p, now),
            HudEvent::PointerMoved(p) => {
                self.pointer_moved(p);
                Vec::new()
            }
            HudEvent::PointerExited => {
                self.clear_hover();
                Vec::new()
            }
            HudEvent::Wheel { at, rotation } => {
                self.wheel(Some(at), rotation);
                Vec::new()
            }
            HudEvent::ScrollCities(rotation) => {
                self.wheel(None, rotation);
                Vec::new()
            }
            HudEvent::Resized(surface) => self.resize(surface),
        }
    }

    fn select_mode(&mut self, base: TimeBase, now: DateTime<Utc>) -> Vec<HudSignal> {
        let city_surface = self.engine.set_time_base(base, now);

        let mut signals = Vec::with_capacity(6);
        signals.push(match city_surface {
            CitySurface::Open => self.set_open(Surface::CityMenu, true),
            CitySurface::Close => self.set_open(Surface::CityMenu, false),
        });
        signals.extend(self.refresh_signals(now));
        signals.push(self.set_open(Surface::ModeMenu, false));
        signals
    }

    fn select_city(&mut self, index: usize, now: DateTime<Utc>) -> Vec<HudSignal> {
        if !self.engine.select_city(index) {
            self.stats.ignored_events += 1;
            return Vec::new();
        }

        let mut signals = self.refresh_signals(now);
        signals.push(self.set_open(Surface::CityMenu, false));
        signals
    }

    fn toggle_pressed(&mut self) -> Vec<HudSignal> {
        vec![
            self.set_open(Surface::CityMenu, false),
            self.set_open(Surface::ModeMenu, true),
        ]
    }

    fn pointer_pressed(&mut self, p: Point, now: DateTime<Utc>) -> Vec<HudSignal> {
        let target = match self.scene.hit_test(p) {
            Some(widget) => press_target(widget, p),
            None => PressTarget::Outside,
        };

        match target {
            PressTarget::Mode(Some(base)) => self.select_mode(base, now),
            PressTarget::City(Some(index)) => self.select_city(index, now),
            PressTarget::Mode(None) | PressTarget::City(None) => Vec::new(),
            PressTarget::Toggle => self.toggle_pressed(),
            PressTarget::Outside => self.close_menus_outside(p),
        }
    }

    /// Background press: collapse every open menu that does not contain the point
    fn close_menus_outside(&mut self, p: Point) -> Vec<HudSignal> {
        let mut signals = Vec::new();
        for surface in [Surface::ModeMenu, Surface::CityMenu] {
            if let Some(device) = self.open_menu_box(surface) {
                if !device.contains(p) {
                    signals.push(self.set_open(surface, false));
                }
            }
        }
        signals
    }

    fn open_menu_box(&self, surface: Surface) -> Option<DeviceBox> {
        self.scene.widgets().iter().find_map(|w| match (&w.kind, surface) {
            (WidgetKind::ModeMenu(m), Surface::ModeMenu) if m.visible => Some(w.device_box()),
            (WidgetKind::CityMenu(m), Surface::CityMenu) if m.visible => Some(w.device_box()),
            _ => None,
        })
    }

    fn pointer_moved(&mut self, p: Point) {
        for widget in self.scene.widgets_mut() {
            let device = widget.device_box();
            let local = device.to_local(p);
            let inside = device.contains(p);
            match &mut widget.kind {
                WidgetKind::Button(b) => b.hover = inside,
                WidgetKind::ModeMenu(m) if m.visible && inside => m.list.set_hover(local.y),
                WidgetKind::ModeMenu(m) => m.list.clear_hover(),
                WidgetKind::CityMenu(m) if m.visible && inside => m.list.set_hover(local.y),
                WidgetKind::CityMenu(m) => m.list.clear_hover(),
                _ => {}
            }
        }
    }

    fn clear_hover(&mut self) {
        for widget in self.scene.widgets_mut() {
            match &mut widget.kind {
                WidgetKind::Button(b) => b.hover = false,
                WidgetKind::ModeMenu(m) => m.list.clear_hover(),
                WidgetKind::CityMenu(m) => m.list.clear_hover(),
                _ => {}
            }
        }
    }

    fn wheel(&mut self, at: Option<Point>, rotation: i32) {
        let Some(device) = self.open_menu_box(Surface::CityMenu) else {
            return;
        };
        if at.map_or(true, |p| device.contains(p)) {
            if let Some(menu) = self.scene.city_menu_mut() {
                menu.scroll(rotation);
                debug!(offset = menu.list.offset(), "city menu scrolled");
            }
        }
    }

    fn resize(&mut self, surface: SurfaceSize) -> Vec<HudSignal> {
        self.surface = surface;
        vec![HudSignal::Layout(self.relayout())]
    }

    fn relayout(&mut self) -> LayoutReport {
        self.stats.layouts += 1;
        self.scene.layout(&self.transform, self.surface)
    }

    /// Re-derive all clocks and push values into the scene
    fn refresh(&mut self, now: DateTime<Utc>) -> Projection {
        let projection = self.engine.project_all(now);
        self.earth_seconds = projection.earth_seconds;
        for clock in &projection.clocks {
            if let Some(label) = self.scene.clock_mut(&clock.name) {
                label.set_reading(clock.value, format_clock(clock.value));
            }
        }
        let status = self.engine.status_lines();
        if let Some(label) = self.scene.status_mut() {
            label.lines = [status.mode.clone(), status.secondary.clone()];
        }
        projection
    }

    fn sync_labels(&mut self) -> String {
        let caption = self.engine.button_label();
        if let Some(button) = self.scene.button_mut() {
            button.caption = caption.clone();
        }
        caption
    }

    fn refresh_signals(&mut self, now: DateTime<Utc>) -> Vec<HudSignal> {
        let projection = self.refresh(now);
        let caption = self.sync_labels();
        vec![
            HudSignal::Clocks(projection),
            HudSignal::Status(self.engine.status_lines()),
            HudSignal::Caption(caption),
        ]
    }

    fn set_open(&mut self, surface: Surface, open: bool) -> HudSignal {
        match surface {
            Surface::ModeMenu => {
                if let Some(menu) = self.scene.mode_menu_mut() {
                    menu.visible = open;
                }
            }
            Surface::CityMenu => {
                if let Some(menu) = self.scene.city_menu_mut() {
                    menu.visible = open;
                }
            }
        }
        if open {
            HudSignal::Expand(surface)
        } else {
            HudSignal::Collapse(surface)
        }
    }

    /// Snapshot of the current display state
    pub fn frame(&self) -> HudFrame {
        let clocks = self
            .scene
            .clocks()
            .map(|c| ClockReading {
                name: c.name.clone(),
                value: c.value,
                text: c.text.clone(),
            })
            .collect();

        let elements = self
            .scene
            .paint_order()
            .map(|w| PlacedElement {
                id: w.id,
                device: w.device_box(),
                view: element_view(w),
            })
            .collect();

        HudFrame {
            time_base: self.engine.time_base(),
            earth_seconds: self.earth_seconds,
            clocks,
            status: self.engine.status_lines(),
            caption: self.scene.button().map(|b| b.caption.clone()).unwrap_or_default(),
            mode_menu_open: self.scene.mode_menu().map_or(false, |m| m.visible),
            city_menu_open: self.scene.city_menu().map_or(false, |m| m.visible),
            surface: self.surface,
            elements,
        }
    }

    pub fn engine(&self) -> &TimeEngine {
        &self.engine
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    pub fn stats(&self) -> &HudStats {
        &self.stats
    }
}

fn press_target(widget: &Widget, p: Point) -> PressTarget {
    let local = widget.device_box().to_local(p);
    match &widget.kind {
        WidgetKind::ModeMenu(m) => PressTarget::Mode(m.base_at(local.y)),
        WidgetKind::CityMenu(m) => PressTarget::City(m.list.item_at(local.y)),
        WidgetKind::Button(_) => PressTarget::Toggle,
        _ => PressTarget::Outside,
    }
}

fn element_view(widget: &Widget) -> ElementView {
    match &widget.kind {
        WidgetKind::Clock(c) => ElementView::Clock {
            name: c.name.clone(),
            text: c.text.clone(),
        },
        WidgetKind::Status(s) => ElementView::Status {
            lines: s.lines.clone(),
        },
        WidgetKind::ModeMenu(m) => ElementView::ModeMenu {
            items: m.list.items().to_vec(),
            hover: m.list.hover(),
        },
        WidgetKind::CityMenu(m) => ElementView::CityMenu {
            items: m.visible_items().to_vec(),
            first: m.list.offset(),
            hover: m.list.hover(),
        },
        WidgetKind::Button(b) => ElementView::Button {
            caption: b.caption.clone(),
            hover: b.hover,
        },
        WidgetKind::Backdrop(_) => ElementView::Backdrop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use proptest::prelude::*;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn hud() -> Hud {
        Hud::new(HudConfig::default(), epoch()).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        epoch() + ChronoDuration::seconds(secs)
    }

    fn caption(signals: &[HudSignal]) -> Option<&str> {
        signals.iter().find_map(|s| match s {
            HudSignal::Caption(c) => Some(c.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_initial_frame() {
        let hud = hud();
        let frame = hud.frame();
        assert_eq!(frame.time_base, TimeBase::SimX1);
        assert_eq!(frame.caption, "MODE : SIM x1");
        assert_eq!(frame.status.lines(), ["MODE : SIM x1", "BASE : MET"]);
        assert!(!frame.mode_menu_open);
        assert!(!frame.city_menu_open);
        assert_eq!(frame.clocks.len(), 9);
        assert_eq!(frame.clock("Earth").unwrap().text, "00:00:00.00");
        assert_eq!(frame.surface, SurfaceSize::new(1280, 720));
    }

    #[test]
    fn test_real_world_startup_opens_city_menu() {
        let config = HudConfig {
            engine: TimeEngineConfig::real_world(1),
            ..HudConfig::default()
        };
        let hud = Hud::new(config, epoch()).unwrap();
        let frame = hud.frame();
        assert!(frame.city_menu_open);
        assert_eq!(frame.caption, "CITY : Tokyo");
        // 12:00 UTC is 21:00 in Tokyo
        assert_eq!(frame.earth_seconds, 75_600.0);
    }

    #[test]
    fn test_tick_advances_clocks() {
        let mut hud = hud();
        let frame = hud.tick(at(2));
        assert_eq!(frame.earth_seconds, 2.0);
        assert_eq!(frame.clock("Earth").unwrap().text, "00:00:02.00");
        assert_eq!(hud.stats().ticks, 1);

        let frame = hud.tick(at(3600));
        assert_eq!(frame.clock("Earth").unwrap().value, 3600.0);
        assert_eq!(hud.stats().ticks, 2);
    }

    #[test]
    fn test_select_real_world() {
        let mut hud = hud();
        let signals = hud.handle(HudEvent::ModeSelected(TimeBase::RealWorld), at(1));

        assert_eq!(signals.first(), Some(&HudSignal::Expand(Surface::CityMenu)));
        assert_eq!(signals.last(), Some(&HudSignal::Collapse(Surface::ModeMenu)));
        assert_eq!(caption(&signals), Some("CITY : UTC"));
        assert!(signals.iter().any(|s| matches!(s, HudSignal::Clocks(_))));

        let frame = hud.frame();
        assert!(frame.city_menu_open);
        assert_eq!(frame.status.lines(), ["MODE : REAL WORLD", "CITY : UTC"]);
    }

    #[test]
    fn test_select_simulation_collapses_city_menu_and_rearms() {
        let mut hud = hud();
        hud.handle(HudEvent::ModeSelected(TimeBase::RealWorld), at(1));

        let signals = hud.handle(HudEvent::ModeSelected(TimeBase::SimX10), at(100));
        assert_eq!(signals.first(), Some(&HudSignal::Collapse(Surface::CityMenu)));
        assert_eq!(caption(&signals), Some("MODE : SIM x10"));
        assert!(!hud.frame().city_menu_open);

        let frame = hud.tick(at(101));
        assert_eq!(frame.earth_seconds, 10.0);
    }

    #[test]
    fn test_reselecting_mode_resets_met() {
        let mut hud = hud();
        assert_eq!(hud.tick(at(5)).earth_seconds, 5.0);

        hud.handle(HudEvent::ModeSelected(TimeBase::SimX1), at(5));
        assert_eq!(hud.tick(at(5)).earth_seconds, 0.0);
        assert_eq!(hud.tick(at(7)).earth_seconds, 2.0);
    }

    #[test]
    fn test_mode_index_selection() {
        let mut hud = hud();
        let signals = hud.handle(HudEvent::ModeIndexSelected(2), at(0));
        assert_eq!(caption(&signals), Some("MODE : SIM x100"));

        assert!(hud.handle(HudEvent::ModeIndexSelected(4), at(0)).is_empty());
        assert_eq!(hud.engine().time_base(), TimeBase::SimX100);
        assert_eq!(hud.stats().ignored_events, 1);
        assert_eq!(hud.stats().events, 2);
    }

    #[test]
    fn test_city_selection() {
        let mut hud = hud();
        hud.handle(HudEvent::ModeSelected(TimeBase::RealWorld), epoch());

        let signals = hud.handle(HudEvent::CitySelected(1), epoch());
        assert_eq!(caption(&signals), Some("CITY : Tokyo"));
        assert_eq!(signals.last(), Some(&HudSignal::Collapse(Surface::CityMenu)));
        assert_eq!(hud.frame().earth_seconds, 75_600.0);
        assert!(!hud.frame().city_menu_open);
    }

    #[test]
    fn test_invalid_city_is_noop() {
        let mut hud = hud();
        hud.handle(HudEvent::ModeSelected(TimeBase::RealWorld), epoch());

        assert!(hud.handle(HudEvent::CitySelected(14), epoch()).is_empty());
        assert_eq!(hud.engine().selected_city_index(), 0);
        assert!(hud.frame().city_menu_open);
    }

    #[test]
    fn test_toggle_opens_mode_menu() {
        let mut hud = hud();
        hud.handle(HudEvent::ModeSelected(TimeBase::RealWorld), epoch());

        let signals = hud.handle(HudEvent::TogglePressed, epoch());
        assert_eq!(
            signals,
            vec![
                HudSignal::Collapse(Surface::CityMenu),
                HudSignal::Expand(Surface::ModeMenu),
            ]
        );
        let frame = hud.frame();
        assert!(frame.mode_menu_open);
        assert!(!frame.city_menu_open);
    }

    #[test]
    fn test_pointer_press_button_then_mode_row() {
        let mut hud = hud();
        // Button sits at (13, 13, 173, 32) on a 1280x720 surface
        let signals = hud.handle(HudEvent::PointerPressed(Point::new(20, 20)), epoch());
        assert!(signals.contains(&HudSignal::Expand(Surface::ModeMenu)));

        // Mode menu at (13, 93, 200, 213); fourth row is REAL WORLD
        let signals = hud.handle(HudEvent::PointerPressed(Point::new(50, 93 + 3 * 36 + 2)), epoch());
        assert_eq!(caption(&signals), Some("CITY : UTC"));
        assert_eq!(hud.engine().time_base(), TimeBase::RealWorld);
        assert!(!hud.frame().mode_menu_open);
    }

    #[test]
    fn test_pointer_press_city_row() {
        let mut hud = hud();
        hud.handle(HudEvent::ModeSelected(TimeBase::RealWorld), epoch());

        // City menu at (200, 93, 173, 280), rows of 32
        let signals = hud.handle(HudEvent::PointerPressed(Point::new(250, 93 + 32 + 4)), epoch());
        assert_eq!(caption(&signals), Some("CITY : Tokyo"));
    }

    #[test]
    fn test_press_below_menu_rows_does_nothing() {
        let mut hud = hud();
        hud.handle(HudEvent::TogglePressed, epoch());

        let signals = hud.handle(HudEvent::PointerPressed(Point::new(50, 93 + 200)), epoch());
        assert!(signals.is_empty());
        assert!(hud.frame().mode_menu_open);
    }

    #[test]
    fn test_press_outside_closes_menus() {
        let mut hud = hud();
        hud.handle(HudEvent::TogglePressed, epoch());

        let signals = hud.handle(HudEvent::PointerPressed(Point::new(1270, 710)), epoch());
        assert_eq!(signals, vec![HudSignal::Collapse(Surface::ModeMenu)]);
        assert!(!hud.frame().mode_menu_open);

        // Nothing open, nothing to close
        assert!(hud
            .handle(HudEvent::PointerPressed(Point::new(1270, 710)), epoch())
            .is_empty());
    }

    #[test]
    fn test_wheel_scrolls_open_city_menu() {
        let mut hud = hud();
        hud.handle(HudEvent::ModeSelected(TimeBase::RealWorld), epoch());

        // Outside the menu: ignored
        hud.handle(
            HudEvent::Wheel {
                at: Point::new(1000, 600),
                rotation: 3,
            },
            epoch(),
        );
        assert_eq!(hud.scene().city_menu().unwrap().list.offset(), 0);

        hud.handle(
            HudEvent::Wheel {
                at: Point::new(250, 150),
                rotation: 3,
            },
            epoch(),
        );
        assert_eq!(hud.scene().city_menu().unwrap().list.offset(), 3);

        // 280px shows 8 of 14 rows
        hud.handle(HudEvent::ScrollCities(50), epoch());
        assert_eq!(hud.scene().city_menu().unwrap().list.offset(), 6);

        let view = hud
            .frame()
            .elements
            .into_iter()
            .find_map(|e| match e.view {
                ElementView::CityMenu { items, first, .. } => Some((items, first)),
                _ => None,
            })
            .unwrap();
        assert_eq!(view.1, 6);
        assert_eq!(view.0.first().map(String::as_str), Some("Berlin"));
        assert_eq!(view.0.len(), 8);
    }

    #[test]
    fn test_scroll_ignored_when_city_menu_closed() {
        let mut hud = hud();
        hud.handle(HudEvent::ScrollCities(5), epoch());
        assert_eq!(hud.scene().city_menu().unwrap().list.offset(), 0);
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut hud = hud();
        hud.handle(HudEvent::PointerMoved(Point::new(20, 20)), epoch());
        assert!(hud.scene().button().unwrap().hover);

        hud.handle(HudEvent::PointerMoved(Point::new(900, 600)), epoch());
        assert!(!hud.scene().button().unwrap().hover);

        hud.handle(HudEvent::TogglePressed, epoch());
        hud.handle(HudEvent::PointerMoved(Point::new(50, 93 + 40)), epoch());
        assert_eq!(hud.scene().mode_menu().unwrap().list.hover(), Some(1));

        hud.handle(HudEvent::PointerExited, epoch());
        assert_eq!(hud.scene().mode_menu().unwrap().list.hover(), None);
    }

    #[test]
    fn test_resize_relayouts() {
        let mut hud = hud();
        let signals = hud.handle(HudEvent::Resized(SurfaceSize::new(960, 540)), epoch());
        assert!(matches!(
            signals.as_slice(),
            [HudSignal::Layout(LayoutReport { scale, .. })] if *scale == 0.5
        ));

        let frame = hud.frame();
        assert_eq!(frame.surface, SurfaceSize::new(960, 540));
        let backdrop = frame.elements.first().unwrap();
        assert_eq!(backdrop.view, ElementView::Backdrop);
        assert_eq!(backdrop.device, DeviceBox::new(0, 0, 960, 540));
        assert_eq!(hud.stats().layouts, 2);
    }

    #[test]
    fn test_frame_paint_order() {
        let mut hud = hud();
        let frame = hud.frame();
        // Collapsed menus are not drawn
        assert_eq!(frame.elements.len(), hud.scene().len() - 2);
        assert!(matches!(
            frame.elements.last().unwrap().view,
            ElementView::Button { .. } | ElementView::Status { .. }
        ));

        hud.handle(HudEvent::TogglePressed, epoch());
        let frame = hud.frame();
        assert!(matches!(
            frame.elements.last().unwrap().view,
            ElementView::ModeMenu { .. }
        ));
    }

    #[test]
    fn test_fast_tick_preset() {
        let config = HudConfig::fast_tick();
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.event_buffer, 64);
    }

    fn any_event() -> impl Strategy<Value = HudEvent> {
        let point = (-50i32..2000, -50i32..1200).prop_map(|(x, y)| Point::new(x, y));
        prop_oneof![
            (0usize..4).prop_map(|i| HudEvent::ModeSelected(TimeBase::ALL[i])),
            (0usize..8).prop_map(HudEvent::ModeIndexSelected),
            (0usize..20).prop_map(HudEvent::CitySelected),
            Just(HudEvent::TogglePressed),
            point.clone().prop_map(HudEvent::PointerPressed),
            point.clone().prop_map(HudEvent::PointerMoved),
            Just(HudEvent::PointerExited),
            (point, -40i32..40).prop_map(|(at, rotation)| HudEvent::Wheel { at, rotation }),
            (-40i32..40).prop_map(HudEvent::ScrollCities),
            (0u32..3000, 0u32..2000)
                .prop_map(|(w, h)| HudEvent::Resized(SurfaceSize::new(w, h))),
        ]
    }

    proptest! {
        #[test]
        fn prop_event_sequences_keep_state_in_range(
            events in proptest::collection::vec(any_event(), 1..60)
        ) {
            let mut hud = hud();
            for (i, event) in events.into_iter().enumerate() {
                hud.handle(event, at(i as i64));

                let city_count = hud.engine().cities().len();
                prop_assert!(hud.engine().selected_city_index() < city_count);

                let menu = hud.scene().city_menu().unwrap();
                let height = hud
                    .scene()
                    .widgets()
                    .iter()
                    .find(|w| matches!(w.kind, WidgetKind::CityMenu(_)))
                    .unwrap()
                    .device_box()
                    .h;
                prop_assert!(menu.list.offset() <= menu.list.max_offset(height));
                if let Some(hover) = menu.list.hover() {
                    prop_assert!(hover < city_count);
                }
            }
        }
    }
}
