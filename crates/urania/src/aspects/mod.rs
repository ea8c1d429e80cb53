pub mod calculator;
pub mod types;

pub use calculator::AspectCalculator;
pub use types::{AspectCore, AspectKind, AspectOrbs, ChartAspect, MAJOR_ASPECTS};
