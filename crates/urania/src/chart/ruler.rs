use crate::chart::types::{ChartRuler, Placement};
use crate::error::ChartError;
use crate::western::{RulershipScheme, ZodiacSign};

/// Find the ruler of the rising sign among the placements.
///
/// A ruler missing from `placements` is an error rather than a default.
pub fn resolve_chart_ruler(
    rising: ZodiacSign,
    placements: &[Placement],
    scheme: RulershipScheme,
) -> Result<ChartRuler, ChartError> {
    let ruler = scheme.ruler_of(rising);
    let placement = placements
        .iter()
        .find(|p| p.planet == ruler)
        .ok_or(ChartError::RulerNotTracked { sign: rising, ruler })?;

    Ok(ChartRuler {
        planet: placement.planet,
        sign: placement.sign,
        house: placement.house,
        degree: placement.degree,
        formatted: placement.formatted.clone(),
        retrograde: placement.retrograde,
    })
}
