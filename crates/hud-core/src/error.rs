//! Error types for the planet HUD

use thiserror::Error;

/// Core HUD errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HudError {
    // Registry errors
    #[error("Invalid time zone for city {city}: {zone}")]
    InvalidTimeZone { city: String, zone: String },

    #[error("Invalid rotation period for {planet}: {period}")]
    InvalidRotationPeriod { planet: String, period: f64 },

    #[error("Duplicate registry name: {0}")]
    DuplicateName(String),

    #[error("Registry is empty: {0}")]
    EmptyRegistry(&'static str),

    // Configuration errors
    #[error("City index out of range: {index} (registry has {len})")]
    CityIndexOutOfRange { index: usize, len: usize },

    // Runtime errors
    #[error("HUD service stopped")]
    ServiceStopped,

    #[error("HUD event queue full")]
    QueueFull,
}

/// Result type for HUD operations
pub type HudResult<T> = Result<T, HudError>;
