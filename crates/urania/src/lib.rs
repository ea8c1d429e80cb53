//! Natal chart derivation.
//!
//! Raw ecliptic longitudes go in, a Whole Sign chart comes out: placements
//! with houses, the chart ruler, angles, moon phase with void-of-course
//! status, and natal aspects. Ephemeris and geocoding are collaborators
//! behind traits; nothing here does astronomy.

pub mod aspects;
pub mod birth;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod geocoding;
pub mod western;

pub use birth::{BirthInfo, BirthInfoError, BirthMoment};
pub use chart::{ChartAssembler, ChartSettings, CompleteChart};
pub use ephemeris::{EphemerisProvider, SnapshotEphemeris};
pub use error::{ChartError, GenerationError};
pub use geocoding::{Gazetteer, GeoLocation, Geocoder};
pub use western::{Body, RulershipScheme, ZodiacSign};

/// Validate birth data, fetch positions and assemble the chart.
///
/// Collaborator failures propagate unchanged; no partial chart is produced.
pub fn generate_chart(
    info: &BirthInfo,
    geocoder: Option<&dyn Geocoder>,
    ephemeris: &dyn EphemerisProvider,
    settings: ChartSettings,
) -> Result<CompleteChart, GenerationError> {
    let moment = info.resolve(geocoder)?;
    let snapshot = ephemeris.positions(&moment)?;
    let chart = ChartAssembler::new(settings).assemble_snapshot(&snapshot)?;
    log::info!(
        "Generated chart for {}: {} rising, Sun in {}, Moon in {}",
        info.name,
        chart.rising_sign,
        chart.sun_sign,
        chart.moon_sign
    );
    Ok(chart)
}
