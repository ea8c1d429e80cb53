use crate::birth::BirthMoment;
use crate::ephemeris::types::{CelestialLongitude, EphemerisSnapshot, LayerPositions};
use crate::western::Body;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while obtaining raw positions
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Failed to read ephemeris snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse ephemeris snapshot {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Ephemeris snapshot has no {angle} angle")]
    MissingAngle { angle: String },
    #[error("Non-finite longitude {value} reported for {planet_id}")]
    InvalidPosition { planet_id: String, value: f64 },
    #[error("Ephemeris snapshot is for {found}, but the chart moment is {expected}")]
    MomentMismatch {
        expected: DateTime<Utc>,
        found: DateTime<Utc>,
    },
}

/// Source of raw longitudes for a birth moment.
pub trait EphemerisProvider {
    fn positions(&self, moment: &BirthMoment) -> Result<EphemerisSnapshot, EphemerisError>;
}

/// Reads positions an external ephemeris service wrote to a JSON file.
pub struct SnapshotEphemeris {
    path: PathBuf,
}

impl SnapshotEphemeris {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_layer(&self) -> Result<LayerPositions, EphemerisError> {
        let display = self.path.display().to_string();
        let text = fs::read_to_string(&self.path).map_err(|source| EphemerisError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| EphemerisError::Parse {
            path: display,
            source,
        })
    }
}

impl EphemerisProvider for SnapshotEphemeris {
    fn positions(&self, moment: &BirthMoment) -> Result<EphemerisSnapshot, EphemerisError> {
        let layer = self.load_layer()?;
        if let Some(found) = layer.datetime {
            if (found - moment.utc).num_seconds().abs() >= 60 {
                return Err(EphemerisError::MomentMismatch {
                    expected: moment.utc,
                    found,
                });
            }
        }
        snapshot_from_layer(&layer)
    }
}

/// Convert a layer payload into the engine's input.
///
/// Unknown planet ids are skipped. A missing South Node is derived from the
/// North Node when present.
pub fn snapshot_from_layer(layer: &LayerPositions) -> Result<EphemerisSnapshot, EphemerisError> {
    let angle = |name: &str| -> Result<f64, EphemerisError> {
        layer
            .houses
            .as_ref()
            .and_then(|h| h.angles.get(name))
            .copied()
            .ok_or_else(|| EphemerisError::MissingAngle {
                angle: name.to_string(),
            })
    };
    let ascendant = angle("asc")?;
    let midheaven = angle("mc")?;

    let mut bodies = Vec::new();
    for (planet_id, position) in &layer.planets {
        let body = match planet_id.parse::<Body>() {
            Ok(body) => body,
            Err(_) => {
                log::warn!("Skipping unknown ephemeris object '{}'", planet_id);
                continue;
            }
        };
        if !position.lon.is_finite() {
            return Err(EphemerisError::InvalidPosition {
                planet_id: planet_id.clone(),
                value: position.lon,
            });
        }
        bodies.push(CelestialLongitude::new(body, position.lon, position.is_retrograde()));
    }

    let has = |b: Body| bodies.iter().any(|c| c.body == b);
    if !has(Body::SouthNode) {
        if let Some(north) = bodies.iter().find(|c| c.body == Body::NorthNode).copied() {
            log::warn!("Ephemeris omitted south_node; deriving it opposite the north node");
            bodies.push(CelestialLongitude::new(
                Body::SouthNode,
                (north.longitude + 180.0) % 360.0,
                north.retrograde,
            ));
        }
    }

    Ok(EphemerisSnapshot {
        ascendant,
        midheaven,
        bodies,
    })
}
