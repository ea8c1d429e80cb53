//! Whole Sign houses.
//!
//! House 1 is the entire rising sign, house 2 the next sign, and so on. A
//! body's house depends only on its sign, never on its exact degree.

use crate::chart::types::{HouseInfo, Placement};
use crate::western::{Body, RulershipScheme, ZodiacSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    #[default]
    #[serde(rename = "W", alias = "whole_sign", alias = "whole-sign")]
    WholeSign,
}

impl HouseSystem {
    /// House (1-12) of a body in `body_sign` for a chart rising in `rising`.
    pub fn assign_house(self, rising: ZodiacSign, body_sign: ZodiacSign) -> u8 {
        match self {
            Self::WholeSign => assign_whole_sign_house(rising, body_sign),
        }
    }

    /// Sign occupying a house (1-12).
    pub fn house_sign(self, rising: ZodiacSign, house: u8) -> ZodiacSign {
        match self {
            Self::WholeSign => ZodiacSign::from_index(rising.index() + (house.saturating_sub(1) % 12)),
        }
    }
}

/// `((body - rising) mod 12) + 1`
pub fn assign_whole_sign_house(rising: ZodiacSign, body_sign: ZodiacSign) -> u8 {
    (body_sign.index() + 12 - rising.index()) % 12 + 1
}

/// Build all 12 houses with their sign, ruler and occupants.
///
/// Occupants keep the order of `placements`.
pub fn build_houses(
    system: HouseSystem,
    rising: ZodiacSign,
    placements: &[Placement],
    scheme: RulershipScheme,
) -> Vec<HouseInfo> {
    let mut occupants: [Vec<Body>; 12] = Default::default();
    for placement in placements {
        let slot = placement.house.saturating_sub(1) as usize % 12;
        occupants[slot].push(placement.planet);
    }

    occupants
        .into_iter()
        .enumerate()
        .map(|(i, planets)| {
            let house = i as u8 + 1;
            let sign = system.house_sign(rising, house);
            HouseInfo {
                house,
                sign,
                ruler: scheme.ruler_of(sign),
                planets,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::western::ALL_SIGNS;

    #[test]
    fn test_rising_sign_is_first_house() {
        for sign in ALL_SIGNS {
            assert_eq!(assign_whole_sign_house(sign, sign), 1);
        }
    }

    #[test]
    fn test_house_range() {
        for rising in ALL_SIGNS {
            for body in ALL_SIGNS {
                let house = assign_whole_sign_house(rising, body);
                assert!((1..=12).contains(&house));
            }
        }
    }

    #[test]
    fn test_wraps_past_pisces() {
        // (1 - 8) mod 12 + 1
        assert_eq!(assign_whole_sign_house(ZodiacSign::Sagittarius, ZodiacSign::Taurus), 6);
        assert_eq!(assign_whole_sign_house(ZodiacSign::Pisces, ZodiacSign::Aries), 2);
        assert_eq!(assign_whole_sign_house(ZodiacSign::Aries, ZodiacSign::Pisces), 12);
    }

    #[test]
    fn test_house_sign_matches_assignment() {
        let system = HouseSystem::WholeSign;
        for rising in ALL_SIGNS {
            for house in 1..=12u8 {
                let sign = system.house_sign(rising, house);
                assert_eq!(system.assign_house(rising, sign), house);
            }
        }
    }

    #[test]
    fn test_serde_name() {
        assert_eq!(serde_json::to_string(&HouseSystem::WholeSign).unwrap(), "\"W\"");
        let parsed: HouseSystem = serde_json::from_str("\"whole_sign\"").unwrap();
        assert_eq!(parsed, HouseSystem::WholeSign);
    }
}
