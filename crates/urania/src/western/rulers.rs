//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).
//! A chart uses exactly one scheme for both its chart ruler and house rulers.

use crate::western::{Body, ZodiacSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulershipScheme {
    /// Seven visible planets only.
    #[default]
    Traditional,
    /// Outer planets take Scorpio, Aquarius and Pisces.
    Modern,
}

const TRADITIONAL_RULERS: [Body; 12] = [
    Body::Mars,    // Aries
    Body::Venus,   // Taurus
    Body::Mercury, // Gemini
    Body::Moon,    // Cancer
    Body::Sun,     // Leo
    Body::Mercury, // Virgo
    Body::Venus,   // Libra
    Body::Mars,    // Scorpio
    Body::Jupiter, // Sagittarius
    Body::Saturn,  // Capricorn
    Body::Saturn,  // Aquarius
    Body::Jupiter, // Pisces
];

const MODERN_RULERS: [Body; 12] = [
    Body::Mars,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Pluto,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
];

impl RulershipScheme {
    /// Ruling planet of a sign under this scheme.
    pub const fn ruler_of(self, sign: ZodiacSign) -> Body {
        let idx = sign.index() as usize;
        match self {
            Self::Traditional => TRADITIONAL_RULERS[idx],
            Self::Modern => MODERN_RULERS[idx],
        }
    }
}
