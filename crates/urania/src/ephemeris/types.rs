use crate::western::Body;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw position of one tracked body as reported by the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialLongitude {
    pub body: Body,
    /// Ecliptic longitude in degrees
    pub longitude: f64,
    pub retrograde: bool,
}

impl CelestialLongitude {
    pub fn new(body: Body, longitude: f64, retrograde: bool) -> Self {
        Self {
            body,
            longitude,
            retrograde,
        }
    }
}

/// Everything the chart engine needs from one ephemeris call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    pub ascendant: f64,
    pub midheaven: f64,
    pub bodies: Vec<CelestialLongitude>,
}

/// Planetary position data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Latitude in degrees
    #[serde(default)]
    pub lat: f64,
    /// Speed in longitude (degrees per day)
    #[serde(default)]
    pub speed_lon: f64,
    /// Whether the planet is retrograde; derived from `speed_lon` when absent
    #[serde(default)]
    pub retrograde: Option<bool>,
}

impl PlanetPosition {
    pub fn is_retrograde(&self) -> bool {
        self.retrograde.unwrap_or(self.speed_lon < 0.0)
    }
}

/// House system positions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousePositions {
    /// House system name
    #[serde(default)]
    pub system: Option<String>,
    /// Angles: "asc", "mc" (optionally "ic", "dc") -> degrees
    pub angles: BTreeMap<String, f64>,
}

/// Position payload written by an external ephemeris service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerPositions {
    /// Moment the positions were computed for, when the service reports it
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
    /// Planet ID -> position
    pub planets: BTreeMap<String, PlanetPosition>,
    /// House positions (None if no location was provided)
    pub houses: Option<HousePositions>,
}
