//! Location resolution.
//!
//! Turning free text into coordinates is delegated to a [`Geocoder`]. The
//! only implementation shipped here is an in-memory [`Gazetteer`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("Location '{0}' not found")]
    NotFound(String),
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("Invalid UTC offset {0}: expected hours in [-12, 14]")]
    InvalidUtcOffset(f64),
}

/// Geographic coordinates plus the UTC offset in force at that place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Hours east of UTC
    pub utc_offset: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64, utc_offset: f64) -> Result<Self, GeocodeError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeocodeError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        if !(-12.0..=14.0).contains(&utc_offset) {
            return Err(GeocodeError::InvalidUtcOffset(utc_offset));
        }
        Ok(Self {
            latitude,
            longitude,
            utc_offset,
        })
    }
}

pub trait Geocoder {
    fn locate(&self, query: &str) -> Result<GeoLocation, GeocodeError>;
}

/// A named place in a [`Gazetteer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset: f64,
}

/// Fixed table of known places, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: Vec<NamedLocation>,
}

impl Gazetteer {
    pub fn new(entries: Vec<NamedLocation>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for Gazetteer {
    fn locate(&self, query: &str) -> Result<GeoLocation, GeocodeError> {
        let key = query.trim().to_lowercase();
        let entry = self
            .entries
            .iter()
            .find(|e| e.name.trim().to_lowercase() == key)
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;
        GeoLocation::new(entry.latitude, entry.longitude, entry.utc_offset)
    }
}
