pub mod assembler;
pub mod houses;
pub mod moon;
pub mod ruler;
pub mod settings;
pub mod types;

pub use assembler::ChartAssembler;
pub use houses::{assign_whole_sign_house, build_houses, HouseSystem};
pub use moon::{AspectCandidate, MoonPhaseCalculator, MoonPhaseInfo, MoonPhaseName, NextAspect};
pub use ruler::resolve_chart_ruler;
pub use settings::{ChartSettings, VoidOfCourseSettings};
pub use types::{ChartAngle, ChartRuler, CompleteChart, HouseInfo, Placement};
