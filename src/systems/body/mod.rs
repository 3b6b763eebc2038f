//! Body - the single controllable entity
//!
//! Composes a linear and an angular Verlet integrator with a collision
//! radius. Rendering reads `position`, `orientation` and `radius` once the
//! frame pipeline has finished.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::Body;
