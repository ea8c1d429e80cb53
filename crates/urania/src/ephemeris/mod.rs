pub mod adapter;
pub mod types;

pub use adapter::{snapshot_from_layer, EphemerisError, EphemerisProvider, SnapshotEphemeris};
pub use types::{
    CelestialLongitude, EphemerisSnapshot, HousePositions, LayerPositions, PlanetPosition,
};
