//! Terrain - an infinite 1D height field and the body's contact with it
//!
//! Heights grow downward (canvas convention): a body whose bottom edge
//! (`y + radius`) is greater than the floor height is inside the ground.

mod noise;
mod height_field;
mod collision;

pub use noise::{ConstantNoise, NoiseSource, PerlinNoise};
pub use height_field::Terrain;
pub use collision::{Contact, TerrainCollisionResolver, GROUND_ACCEL, SLOPE_FORCE};
