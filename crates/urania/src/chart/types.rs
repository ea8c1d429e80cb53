//! Assembled chart structures. All of them serialize to the camelCase JSON
//! shape consumers expect.

use crate::aspects::ChartAspect;
use crate::chart::houses::HouseSystem;
use crate::chart::moon::MoonPhaseInfo;
use crate::western::{Body, ZodiacSign};
use serde::{Deserialize, Serialize};

/// A tracked body placed in sign and house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub planet: Body,
    pub sign: ZodiacSign,
    /// Degrees into the sign, 0 <= x < 30
    pub degree: f64,
    pub formatted: String,
    /// Absolute ecliptic longitude, 0 <= x < 360
    pub longitude: f64,
    pub house: u8,
    pub retrograde: bool,
    /// Ruler of the sign on this placement's house
    pub house_ruler: Body,
}

/// One of the four chart angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAngle {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub formatted: String,
    pub longitude: f64,
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseInfo {
    pub house: u8,
    pub sign: ZodiacSign,
    pub ruler: Body,
    /// Occupants in canonical body order
    pub planets: Vec<Body>,
}

/// The body ruling the rising sign, with its own placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRuler {
    pub planet: Body,
    pub sign: ZodiacSign,
    pub house: u8,
    pub degree: f64,
    pub formatted: String,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteChart {
    pub house_system: HouseSystem,
    pub rising_sign: ZodiacSign,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub ascendant: ChartAngle,
    pub midheaven: ChartAngle,
    pub descendant: ChartAngle,
    pub imum_coeli: ChartAngle,
    pub chart_ruler: ChartRuler,
    pub moon_phase: MoonPhaseInfo,
    pub placements: Vec<Placement>,
    pub houses: Vec<HouseInfo>,
    pub aspects: Vec<ChartAspect>,
}

impl CompleteChart {
    pub fn placement(&self, body: Body) -> Option<&Placement> {
        self.placements.iter().find(|p| p.planet == body)
    }

    /// House by number (1-12).
    pub fn house(&self, number: u8) -> Option<&HouseInfo> {
        self.houses.iter().find(|h| h.house == number)
    }
}
