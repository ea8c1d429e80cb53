use crate::aspects::{AspectKind, AspectOrbs, MAJOR_ASPECTS};
use crate::chart::houses::HouseSystem;
use crate::western::{Body, RulershipScheme, TRACKED_BODIES};
use serde::{Deserialize, Serialize};

/// Everything that shapes a chart besides its raw longitudes.
///
/// Passed to the assembler on every call; there is no process-wide default
/// the engine falls back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub house_system: HouseSystem,
    pub rulership: RulershipScheme,
    /// Orbs for natal aspects between tracked bodies
    pub aspect_orbs: AspectOrbs,
    pub void_of_course: VoidOfCourseSettings,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::WholeSign,
            rulership: RulershipScheme::Traditional,
            aspect_orbs: AspectOrbs::default(),
            void_of_course: VoidOfCourseSettings::default(),
        }
    }
}

/// Which aspects, to which bodies, keep the Moon from being void of course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoidOfCourseSettings {
    pub aspects: Vec<AspectKind>,
    /// The Moon itself is always ignored if listed.
    pub bodies: Vec<Body>,
}

impl Default for VoidOfCourseSettings {
    fn default() -> Self {
        Self {
            aspects: MAJOR_ASPECTS.to_vec(),
            bodies: TRACKED_BODIES
                .iter()
                .copied()
                .filter(|body| *body != Body::Moon)
                .collect(),
        }
    }
}
