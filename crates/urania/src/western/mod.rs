pub mod bodies;
pub mod degrees;
pub mod rulers;
pub mod signs;

pub use bodies::{Body, TRACKED_BODIES};
pub use degrees::{format_dms, format_longitude, normalize_longitude, ZodiacPosition};
pub use rulers::RulershipScheme;
pub use signs::{ZodiacSign, ALL_SIGNS, SIGN_WIDTH};
