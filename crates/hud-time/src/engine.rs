//! Time Engine - derives one reference time and projects it onto every planet

use chrono::{DateTime, Timelike, Utc};
use tracing::{debug, info};

use hud_core::{City, CityRegistry, HudError, HudResult, PlanetRegistry, TimeBase};

use crate::{format_clock, MissionClock};

/// Time Engine configuration
#[derive(Clone, Debug)]
pub struct TimeEngineConfig {
    /// Time base active at startup
    pub initial_base: TimeBase,
    /// City selected at startup
    pub initial_city: usize,
}

impl Default for TimeEngineConfig {
    fn default() -> Self {
        TimeEngineConfig {
            initial_base: TimeBase::SimX1,
            initial_city: 0,
        }
    }
}

impl TimeEngineConfig {
    /// Start on the real-world clock of the given city
    pub fn real_world(city: usize) -> Self {
        TimeEngineConfig {
            initial_base: TimeBase::RealWorld,
            initial_city: city,
        }
    }
}

/// What the city selection surface should do after a mode change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CitySurface {
    Open,
    Close,
}

/// One planet's clock value for the current tick
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetClock {
    pub name: String,
    /// Raw, unnormalized planet seconds
    pub value: f64,
}

impl PlanetClock {
    pub fn formatted(&self) -> String {
        format_clock(self.value)
    }
}

/// All planetary clocks derived from one reference value
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub earth_seconds: f64,
    pub clocks: Vec<PlanetClock>,
}

impl Projection {
    pub fn get(&self, name: &str) -> Option<&PlanetClock> {
        self.clocks.iter().find(|c| c.name == name)
    }
}

/// Status readout: mode plus either the MET tag or the city
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLines {
    pub mode: String,
    pub secondary: String,
}

impl StatusLines {
    pub fn lines(&self) -> [&str; 2] {
        [&self.mode, &self.secondary]
    }
}

/// Time Engine - owns the time base, mission clock and city selection
pub struct TimeEngine {
    /// Active time base
    base: TimeBase,
    /// Mission elapsed time counter
    mission: MissionClock,
    /// Selected city, meaningful in real-world mode only
    selected_city: usize,
    cities: CityRegistry,
    planets: PlanetRegistry,
}

impl TimeEngine {
    /// Create an engine with the default configuration
    pub fn new(cities: CityRegistry, planets: PlanetRegistry, now: DateTime<Utc>) -> HudResult<Self> {
        Self::with_config(cities, planets, TimeEngineConfig::default(), now)
    }

    /// Create an engine with custom configuration
    pub fn with_config(
        cities: CityRegistry,
        planets: PlanetRegistry,
        config: TimeEngineConfig,
        now: DateTime<Utc>,
    ) -> HudResult<Self> {
        if !cities.contains_index(config.initial_city) {
            return Err(HudError::CityIndexOutOfRange {
                index: config.initial_city,
                len: cities.len(),
            });
        }

        let mut mission = MissionClock::new(now);
        mission.set_scale(config.initial_base.scale_factor());

        Ok(TimeEngine {
            base: config.initial_base,
            mission,
            selected_city: config.initial_city,
            cities,
            planets,
        })
    }

    /// Switch the time source
    ///
    /// Entering any simulation mode re-arms the mission clock at `now`,
    /// including a switch between scales and a reselection of the current mode.
    pub fn set_time_base(&mut self, base: TimeBase, now: DateTime<Utc>) -> CitySurface {
        let previous = self.base;
        self.base = base;

        let surface = if base.is_simulation() {
            self.mission.arm(now, base.scale_factor());
            CitySurface::Close
        } else {
            self.mission.set_scale(1.0);
            CitySurface::Open
        };

        info!(from = %previous, to = %base, "time base changed");
        surface
    }

    /// Select a city by registry index. Out-of-range indices are ignored.
    pub fn select_city(&mut self, index: usize) -> bool {
        if !self.cities.contains_index(index) {
            debug!(index, len = self.cities.len(), "ignoring city selection out of range");
            return false;
        }
        self.selected_city = index;
        debug!(city = self.selected_city().name(), "city selected");
        true
    }

    /// Reference Earth seconds: scaled MET, or local time of day in the city
    pub fn reference_earth_seconds(&self, now: DateTime<Utc>) -> f64 {
        if self.base.is_simulation() {
            return self.mission.elapsed_secs(now);
        }

        let local = now.with_timezone(&self.selected_city().zone());
        // Leap-second nanos run past 1e9; fold them back
        let nanos = local.nanosecond() % 1_000_000_000;
        local.num_seconds_from_midnight() as f64 + nanos as f64 / 1_000_000_000.0
    }

    /// Project the reference time onto every registered body, unnormalized
    pub fn project_all(&self, now: DateTime<Utc>) -> Projection {
        let earth_seconds = self.reference_earth_seconds(now);
        let clocks = self
            .planets
            .iter()
            .map(|planet| PlanetClock {
                name: planet.name().to_string(),
                value: planet.project(earth_seconds),
            })
            .collect();

        Projection {
            earth_seconds,
            clocks,
        }
    }

    /// Two-line status readout
    pub fn status_lines(&self) -> StatusLines {
        if self.base.is_simulation() {
            StatusLines {
                mode: format!("MODE : SIM x{}", self.scale_label()),
                secondary: "BASE : MET".to_string(),
            }
        } else {
            StatusLines {
                mode: "MODE : REAL WORLD".to_string(),
                secondary: format!("CITY : {}", self.selected_city().name()),
            }
        }
    }

    /// Caption for the mode/city toggle button
    pub fn button_label(&self) -> String {
        if self.base.is_simulation() {
            format!("MODE : SIM x{}", self.scale_label())
        } else {
            format!("CITY : {}", self.selected_city().name())
        }
    }

    fn scale_label(&self) -> u32 {
        self.mission.scale() as u32
    }

    pub fn time_base(&self) -> TimeBase {
        self.base
    }

    pub fn mission_clock(&self) -> &MissionClock {
        &self.mission
    }

    pub fn selected_city_index(&self) -> usize {
        self.selected_city
    }

    pub fn selected_city(&self) -> &City {
        // Index is validated on every write
        &self.cities[self.selected_city]
    }

    pub fn cities(&self) -> &CityRegistry {
        &self.cities
    }

    pub fn planets(&self) -> &PlanetRegistry {
        &self.planets
    }
}
