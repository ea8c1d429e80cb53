//! Lunar phase, illumination and void-of-course status.
//!
//! The phase comes from the Sun-Moon elongation `(moon - sun) mod 360`. The
//! void-of-course check walks the Moon forward through the rest of its sign
//! against the other bodies' positions at the chart moment, looking for the
//! first major aspect to perfect before the sign boundary.

use crate::aspects::AspectKind;
use crate::western::{format_dms, Body, ZodiacSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhaseName {
    #[serde(rename = "New Moon")]
    New,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    Full,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

/// Phases in elongation order, one per 45 degree bin.
const PHASES: [MoonPhaseName; 8] = [
    MoonPhaseName::New,
    MoonPhaseName::WaxingCrescent,
    MoonPhaseName::FirstQuarter,
    MoonPhaseName::WaxingGibbous,
    MoonPhaseName::Full,
    MoonPhaseName::WaningGibbous,
    MoonPhaseName::LastQuarter,
    MoonPhaseName::WaningCrescent,
];

impl MoonPhaseName {
    /// Phase for an elongation in [0, 360).
    pub fn from_elongation(elongation: f64) -> Self {
        let bin = (elongation / 45.0).floor().clamp(0.0, 7.0) as usize;
        PHASES[bin]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

/// The first aspect the Moon perfects before leaving its sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAspect {
    pub body: Body,
    pub aspect: AspectKind,
    /// Moon longitude at which the aspect is exact
    pub exact_longitude: f64,
    /// `D°MM'SS"` of the exact point within its sign
    pub formatted: String,
    /// Degrees the Moon still has to travel
    pub degrees_ahead: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseInfo {
    pub name: MoonPhaseName,
    /// Sun-Moon elongation in degrees, 0 <= x < 360
    pub elongation: f64,
    /// Illuminated fraction of the disc, 0-100
    pub illumination: f64,
    pub void_of_course: bool,
    pub next_aspect: Option<NextAspect>,
}

/// A body the Moon may still aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectCandidate {
    pub body: Body,
    pub longitude: f64,
}

pub struct MoonPhaseCalculator;

impl MoonPhaseCalculator {
    pub fn new() -> Self {
        Self
    }

    /// `(moon - sun) mod 360`
    pub fn elongation(sun_longitude: f64, moon_longitude: f64) -> f64 {
        wrap(moon_longitude - sun_longitude)
    }

    /// `(1 - cos(elongation)) / 2 * 100`
    pub fn illumination(elongation: f64) -> f64 {
        (1.0 - elongation.to_radians().cos()) / 2.0 * 100.0
    }

    /// Phase, illumination and void-of-course status.
    ///
    /// `sign_boundary` is the longitude where the Moon's current sign ends.
    /// Candidates naming the Moon are ignored.
    pub fn compute(
        &self,
        sun_longitude: f64,
        moon_longitude: f64,
        sign_boundary: f64,
        candidates: &[AspectCandidate],
        aspects: &[AspectKind],
    ) -> MoonPhaseInfo {
        let elongation = Self::elongation(sun_longitude, moon_longitude);
        let next_aspect = self.next_aspect(moon_longitude, sign_boundary, candidates, aspects);

        log::debug!(
            "moon phase: elongation {:.4}, next aspect {:?}",
            elongation,
            next_aspect.as_ref().map(|a| (a.body, a.aspect))
        );

        MoonPhaseInfo {
            name: MoonPhaseName::from_elongation(elongation),
            elongation,
            illumination: Self::illumination(elongation),
            void_of_course: next_aspect.is_none(),
            next_aspect,
        }
    }

    /// Nearest aspect perfected ahead of the Moon and before `sign_boundary`.
    ///
    /// An aspect exact at the Moon's current longitude still counts. Ties go
    /// to the earlier candidate, then to the earlier entry of `aspects`.
    pub fn next_aspect(
        &self,
        moon_longitude: f64,
        sign_boundary: f64,
        candidates: &[AspectCandidate],
        aspects: &[AspectKind],
    ) -> Option<NextAspect> {
        let moon = wrap(moon_longitude);
        let remaining = wrap(sign_boundary - moon);

        let mut best: Option<(AspectCandidate, AspectKind, f64, f64)> = None;
        for candidate in candidates.iter().filter(|c| c.body != Body::Moon) {
            for &kind in aspects {
                for target in aspect_points(candidate.longitude, kind) {
                    let ahead = wrap(target - moon);
                    if ahead >= remaining {
                        continue;
                    }
                    if best.map_or(true, |(_, _, _, d)| ahead < d) {
                        best = Some((*candidate, kind, target, ahead));
                    }
                }
            }
        }

        best.map(|(candidate, aspect, target, ahead)| {
            let sign = ZodiacSign::from_longitude(target);
            NextAspect {
                body: candidate.body,
                aspect,
                exact_longitude: target,
                formatted: format_dms((target - sign.start_longitude()).max(0.0)),
                degrees_ahead: ahead,
            }
        })
    }
}

impl Default for MoonPhaseCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Longitudes at which a point would aspect `longitude` by `kind`.
fn aspect_points(longitude: f64, kind: AspectKind) -> impl Iterator<Item = f64> {
    let angle = kind.angle();
    let count = if angle == 0.0 || angle == 180.0 { 1 } else { 2 };
    [wrap(longitude + angle), wrap(longitude - angle)]
        .into_iter()
        .take(count)
}

fn wrap(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
