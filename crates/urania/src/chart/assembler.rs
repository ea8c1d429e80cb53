use crate::aspects::AspectCalculator;
use crate::chart::houses::build_houses;
use crate::chart::moon::{AspectCandidate, MoonPhaseCalculator};
use crate::chart::ruler::resolve_chart_ruler;
use crate::chart::settings::ChartSettings;
use crate::chart::types::{ChartAngle, CompleteChart, Placement};
use crate::ephemeris::{CelestialLongitude, EphemerisSnapshot};
use crate::error::ChartError;
use crate::western::{format_longitude, normalize_longitude, Body, ZodiacSign, TRACKED_BODIES};

/// Turns raw longitudes into a complete natal chart.
///
/// Each call works on its own input only; an assembler can be shared freely
/// between threads.
pub struct ChartAssembler {
    settings: ChartSettings,
    aspects: AspectCalculator,
    moon: MoonPhaseCalculator,
}

impl ChartAssembler {
    pub fn new(settings: ChartSettings) -> Self {
        Self {
            settings,
            aspects: AspectCalculator::new(),
            moon: MoonPhaseCalculator::new(),
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn assemble_snapshot(&self, snapshot: &EphemerisSnapshot) -> Result<CompleteChart, ChartError> {
        self.assemble(snapshot.ascendant, snapshot.midheaven, &snapshot.bodies)
    }

    /// Build the chart, or fail without producing any part of it.
    ///
    /// Every body in [`TRACKED_BODIES`] must appear exactly once in `bodies`.
    pub fn assemble(
        &self,
        ascendant_longitude: f64,
        midheaven_longitude: f64,
        bodies: &[CelestialLongitude],
    ) -> Result<CompleteChart, ChartError> {
        let system = self.settings.house_system;
        let scheme = self.settings.rulership;

        let ascendant_lon = normalize_longitude(ascendant_longitude)?;
        let midheaven_lon = normalize_longitude(midheaven_longitude)?;
        let slots = collect_bodies(bodies)?;

        let rising = ZodiacSign::from_longitude(ascendant_lon);
        let angle = |longitude: f64| -> Result<ChartAngle, ChartError> {
            let longitude = normalize_longitude(longitude)?;
            let position = format_longitude(longitude)?;
            Ok(ChartAngle {
                house: system.assign_house(rising, position.sign),
                sign: position.sign,
                degree: position.degree,
                formatted: position.formatted,
                longitude,
            })
        };
        let ascendant = angle(ascendant_lon)?;
        let midheaven = angle(midheaven_lon)?;
        let descendant = angle(ascendant_lon + 180.0)?;
        let imum_coeli = angle(midheaven_lon + 180.0)?;

        let mut placements = Vec::with_capacity(TRACKED_BODIES.len());
        for (body, (longitude, retrograde)) in TRACKED_BODIES.iter().zip(slots) {
            let position = format_longitude(longitude)?;
            let house = system.assign_house(rising, position.sign);
            placements.push(Placement {
                planet: *body,
                sign: position.sign,
                degree: position.degree,
                formatted: position.formatted,
                longitude,
                house,
                retrograde,
                house_ruler: scheme.ruler_of(system.house_sign(rising, house)),
            });
        }

        let houses = build_houses(system, rising, &placements, scheme);
        let chart_ruler = resolve_chart_ruler(rising, &placements, scheme)?;

        let sun = &placements[slot_index(Body::Sun)];
        let moon = &placements[slot_index(Body::Moon)];
        let candidates: Vec<AspectCandidate> = self
            .settings
            .void_of_course
            .bodies
            .iter()
            .map(|body| AspectCandidate {
                body: *body,
                longitude: placements[slot_index(*body)].longitude,
            })
            .collect();
        let moon_phase = self.moon.compute(
            sun.longitude,
            moon.longitude,
            moon.sign.end_longitude(),
            &candidates,
            &self.settings.void_of_course.aspects,
        );

        let positions: Vec<(Body, f64)> = placements.iter().map(|p| (p.planet, p.longitude)).collect();
        let aspects = self
            .aspects
            .compute_chart_aspects(&positions, &self.settings.aspect_orbs);

        log::debug!(
            "assembled chart: rising {}, ruler {} in house {}, {} aspects",
            rising,
            chart_ruler.planet,
            chart_ruler.house,
            aspects.len()
        );

        Ok(CompleteChart {
            house_system: system,
            rising_sign: rising,
            sun_sign: sun.sign,
            moon_sign: moon.sign,
            ascendant,
            midheaven,
            descendant,
            imum_coeli,
            chart_ruler,
            moon_phase,
            placements,
            houses,
            aspects,
        })
    }
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self::new(ChartSettings::default())
    }
}

fn slot_index(body: Body) -> usize {
    body as usize
}

/// Normalized (longitude, retrograde) per tracked body, in canonical order.
fn collect_bodies(bodies: &[CelestialLongitude]) -> Result<Vec<(f64, bool)>, ChartError> {
    let mut slots: [Option<(f64, bool)>; 13] = [None; 13];
    for entry in bodies {
        let longitude = normalize_longitude(entry.longitude)?;
        let slot = &mut slots[slot_index(entry.body)];
        if slot.is_some() {
            return Err(ChartError::DuplicateBody(entry.body));
        }
        *slot = Some((longitude, entry.retrograde));
    }

    let missing: Vec<Body> = TRACKED_BODIES
        .iter()
        .copied()
        .filter(|body| slots[slot_index(*body)].is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ChartError::IncompleteBodySet { missing });
    }

    Ok(slots.iter().flatten().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_matches_tracked_bodies() {
        for (i, body) in TRACKED_BODIES.iter().enumerate() {
            assert_eq!(slot_index(*body), i);
        }
    }

    #[test]
    fn test_duplicate_body_rejected() {
        let bodies = vec![
            CelestialLongitude::new(Body::Sun, 10.0, false),
            CelestialLongitude::new(Body::Sun, 20.0, false),
        ];
        assert_eq!(collect_bodies(&bodies), Err(ChartError::DuplicateBody(Body::Sun)));
    }
}
