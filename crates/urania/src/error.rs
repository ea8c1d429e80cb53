use crate::birth::BirthInfoError;
use crate::ephemeris::EphemerisError;
use crate::western::{Body, ZodiacSign};
use thiserror::Error;

/// Errors raised while deriving a chart from raw longitudes.
///
/// All of these are validation failures local to one chart; nothing is
/// retried and no partial chart is ever returned alongside them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid longitude {value}: expected a finite value in [0, 360)")]
    InvalidLongitude { value: f64 },
    #[error("Incomplete body set, missing: {}", format_bodies(.missing))]
    IncompleteBodySet { missing: Vec<Body> },
    #[error("Body {0} supplied more than once")]
    DuplicateBody(Body),
    #[error("Chart ruler {ruler} of rising sign {sign} is not among the tracked bodies")]
    RulerNotTracked { sign: ZodiacSign, ruler: Body },
}

fn format_bodies(bodies: &[Body]) -> String {
    bodies
        .iter()
        .map(|b| b.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure anywhere along the birth data to chart pipeline.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid birth data: {0}")]
    BirthInfo(#[from] BirthInfoError),
    #[error("Ephemeris lookup failed: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("Chart derivation failed: {0}")]
    Chart(#[from] ChartError),
}
