//! Fixed registries of world cities and planetary bodies
//!
//! Both registries are built once at startup and validated eagerly.
//! There is no mutation path after construction.

use std::collections::HashSet;
use std::ops::Index;

use chrono_tz::Tz;

use crate::{HudError, HudResult, SECONDS_PER_DAY};

/// World cities offered in real-world mode: (display name, IANA zone)
pub const WORLD_CITIES: &[(&str, &str)] = &[
    ("UTC", "UTC"),
    ("Tokyo", "Asia/Tokyo"),
    ("Beijing", "Asia/Shanghai"),
    ("Delhi", "Asia/Kolkata"),
    ("Riyadh", "Asia/Riyadh"),
    ("Moscow", "Europe/Moscow"),
    ("Berlin", "Europe/Berlin"),
    ("Paris", "Europe/Paris"),
    ("London", "Europe/London"),
    ("Sao Paulo", "America/Sao_Paulo"),
    ("New York", "America/New_York"),
    ("Los Angeles", "America/Los_Angeles"),
    ("Honolulu", "Pacific/Honolulu"),
    ("Sydney", "Australia/Sydney"),
];

/// Rotation periods in Earth days; negative is retrograde
pub const SOLAR_SYSTEM: &[(&str, f64)] = &[
    ("Mercury", 58.646),
    ("Venus", -243.018),
    ("Earth", 1.0),
    ("Moon", 27.32),
    ("Mars", 1.025957),
    ("Jupiter", 0.41),
    ("Saturn", 0.44),
    // Tilted on its side as well as retrograde
    ("Uranus", -0.72),
    ("Neptune", 0.67),
];

/// A selectable world city
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    name: String,
    zone: Tz,
}

impl City {
    /// Resolve a city from its IANA zone identifier
    pub fn new(name: &str, zone: &str) -> HudResult<Self> {
        let tz = zone.parse::<Tz>().map_err(|_| HudError::InvalidTimeZone {
            city: name.to_string(),
            zone: zone.to_string(),
        })?;
        Ok(City {
            name: name.to_string(),
            zone: tz,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

/// Ordered, immutable list of cities
#[derive(Clone, Debug)]
pub struct CityRegistry {
    cities: Vec<City>,
}

impl CityRegistry {
    /// Build and validate a registry. Any unknown zone is fatal.
    pub fn new(entries: &[(&str, &str)]) -> HudResult<Self> {
        if entries.is_empty() {
            return Err(HudError::EmptyRegistry("cities"));
        }

        let mut seen = HashSet::new();
        let mut cities = Vec::with_capacity(entries.len());
        for (name, zone) in entries {
            if !seen.insert(*name) {
                return Err(HudError::DuplicateName(name.to_string()));
            }
            cities.push(City::new(name, zone)?);
        }

        Ok(CityRegistry { cities })
    }

    /// The default fourteen world cities
    pub fn world() -> HudResult<Self> {
        Self::new(WORLD_CITIES)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.cities.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(City::name)
    }
}

impl Index<usize> for CityRegistry {
    type Output = City;

    fn index(&self, index: usize) -> &City {
        &self.cities[index]
    }
}

/// A body with its own clock
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    name: String,
    /// Signed rotation period in Earth seconds
    rotation_period_secs: f64,
}

impl Planet {
    pub fn new(name: &str, rotation_period_secs: f64) -> HudResult<Self> {
        if rotation_period_secs == 0.0 || !rotation_period_secs.is_finite() {
            return Err(HudError::InvalidRotationPeriod {
                planet: name.to_string(),
                period: rotation_period_secs,
            });
        }
        Ok(Planet {
            name: name.to_string(),
            rotation_period_secs,
        })
    }

    pub fn from_days(name: &str, days: f64) -> HudResult<Self> {
        Self::new(name, days * SECONDS_PER_DAY)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rotation_period_secs(&self) -> f64 {
        self.rotation_period_secs
    }

    /// Planet seconds per Earth second
    #[inline]
    pub fn rate(&self) -> f64 {
        SECONDS_PER_DAY / self.rotation_period_secs
    }

    #[inline]
    pub fn is_retrograde(&self) -> bool {
        self.rotation_period_secs < 0.0
    }

    /// Project reference Earth seconds onto this body's clock
    #[inline]
    pub fn project(&self, earth_seconds: f64) -> f64 {
        earth_seconds * self.rate()
    }
}

/// Ordered, immutable list of planetary bodies
#[derive(Clone, Debug)]
pub struct PlanetRegistry {
    planets: Vec<Planet>,
}

impl PlanetRegistry {
    pub fn new(planets: Vec<Planet>) -> HudResult<Self> {
        if planets.is_empty() {
            return Err(HudError::EmptyRegistry("planets"));
        }

        let mut seen = HashSet::new();
        for planet in &planets {
            if !seen.insert(planet.name()) {
                return Err(HudError::DuplicateName(planet.name().to_string()));
            }
        }

        Ok(PlanetRegistry { planets })
    }

    /// Mercury through Neptune, with the Moon after Earth
    pub fn solar_system() -> HudResult<Self> {
        let planets = SOLAR_SYSTEM
            .iter()
            .map(|(name, days)| Planet::from_days(name, *days))
            .collect::<HudResult<Vec<_>>>()?;
        Self::new(planets)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Planet> {
        self.planets.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.name() == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_cities_resolve() {
        let registry = CityRegistry::world().unwrap();
        assert_eq!(registry.len(), 14);
        assert_eq!(registry.get(0).unwrap().name(), "UTC");
        assert_eq!(registry.get(1).unwrap().zone(), chrono_tz::Asia::Tokyo);
        assert_eq!(registry.get(13).unwrap().name(), "Sydney");
        assert!(registry.get(14).is_none());
    }

    #[test]
    fn test_invalid_zone_is_fatal() {
        let err = CityRegistry::new(&[("UTC", "UTC"), ("Atlantis", "Ocean/Atlantis")]).unwrap_err();
        assert_eq!(
            err,
            HudError::InvalidTimeZone {
                city: "Atlantis".to_string(),
                zone: "Ocean/Atlantis".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_city_rejected() {
        let err = CityRegistry::new(&[("Tokyo", "Asia/Tokyo"), ("Tokyo", "UTC")]).unwrap_err();
        assert_eq!(err, HudError::DuplicateName("Tokyo".to_string()));
    }

    #[test]
    fn test_empty_registries_rejected() {
        assert_eq!(
            CityRegistry::new(&[]).unwrap_err(),
            HudError::EmptyRegistry("cities")
        );
        assert_eq!(
            PlanetRegistry::new(Vec::new()).unwrap_err(),
            HudError::EmptyRegistry("planets")
        );
    }

    #[test]
    fn test_solar_system_order() {
        let registry = PlanetRegistry::solar_system().unwrap();
        let names: Vec<_> = registry.iter().map(Planet::name).collect();
        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Moon", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn test_earth_rate_is_identity() {
        let registry = PlanetRegistry::solar_system().unwrap();
        let earth = registry.by_name("Earth").unwrap();
        assert_eq!(earth.rotation_period_secs(), SECONDS_PER_DAY);
        assert_eq!(earth.rate(), 1.0);
        assert_eq!(earth.project(12_345.678), 12_345.678);
    }

    #[test]
    fn test_retrograde_bodies() {
        let registry = PlanetRegistry::solar_system().unwrap();
        let retrograde: Vec<_> = registry
            .iter()
            .filter(|p| p.is_retrograde())
            .map(Planet::name)
            .collect();
        assert_eq!(retrograde, ["Venus", "Uranus"]);
        assert!(registry.by_name("Venus").unwrap().project(1000.0) < 0.0);
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            Planet::new("Nowhere", 0.0),
            Err(HudError::InvalidRotationPeriod { .. })
        ));
        assert!(Planet::new("Nowhere", f64::NAN).is_err());
        assert!(Planet::new("Nowhere", f64::INFINITY).is_err());
    }
}
