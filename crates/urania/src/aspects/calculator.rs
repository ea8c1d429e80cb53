use crate::aspects::types::{AspectCore, AspectKind, AspectOrbs, ChartAspect};
use crate::western::Body;

/// Aspects in order of frequency (most common first)
const ASPECT_CHECK_ORDER: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

/// Below this deviation an aspect is reported as exact.
const EXACT_THRESHOLD: f64 = 0.1;

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Shortest angular separation between two longitudes, in [0, 180].
    pub fn separation(lon1: f64, lon2: f64) -> f64 {
        let raw_diff = (lon1 - lon2).abs() % 360.0;
        if raw_diff > 180.0 {
            360.0 - raw_diff
        } else {
            raw_diff
        }
    }

    /// Aspect formed by two longitudes, if any lies within its orb.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64, orbs: &AspectOrbs) -> Option<AspectCore> {
        let angle_diff = Self::separation(lon1, lon2);

        for kind in ASPECT_CHECK_ORDER {
            let orb_value = (angle_diff - kind.angle()).abs();
            if orb_value <= orbs.orb_for(kind) {
                return Some(AspectCore {
                    kind,
                    exact_angle: kind.angle(),
                    orb: orb_value,
                    is_exact: orb_value < EXACT_THRESHOLD,
                });
            }
        }

        None
    }

    /// Aspects between every pair of the given bodies.
    ///
    /// Pairs are visited in input order, so the result is deterministic for a
    /// given input ordering.
    pub fn compute_chart_aspects(
        &self,
        positions: &[(Body, f64)],
        orbs: &AspectOrbs,
    ) -> Vec<ChartAspect> {
        let mut pairs = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let (from, lon1) = positions[i];
                let (to, lon2) = positions[j];
                if let Some(aspect) = self.calculate_aspect(lon1, lon2, orbs) {
                    pairs.push(ChartAspect { from, to, aspect });
                }
            }
        }
        pairs
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
