//! The twelve tropical zodiac signs.
//!
//! The ecliptic is split into 12 equal signs of 30 degrees each, starting
//! with Aries at 0 degrees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of one sign in degrees.
pub const SIGN_WIDTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Zero-based position in the zodiac.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at the given index, wrapping past Pisces.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// Sign containing an already-normalized longitude in [0, 360).
    ///
    /// Out-of-range input clamps to Aries or Pisces; public callers go
    /// through `format_longitude`, which rejects it instead.
    pub(crate) fn from_longitude(longitude: f64) -> Self {
        let index = (longitude / SIGN_WIDTH).floor().clamp(0.0, 11.0) as u8;
        Self::from_index(index)
    }

    /// Longitude at which this sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SIGN_WIDTH
    }

    /// Longitude at which the following sign begins (360 for Pisces).
    pub fn end_longitude(self) -> f64 {
        self.start_longitude() + SIGN_WIDTH
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
