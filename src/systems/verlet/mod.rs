//! Verlet integrators - velocity lives implicitly in (current - previous)
//!
//! Both integrators follow the same step:
//! 1. velocity = current - previous
//! 2. previous = current
//! 3. velocity *= 1 - friction
//! 4. current += velocity + pending * dt
//! 5. pending = 0
//!
//! Forces (or torques) accumulate between steps and are consumed by the next
//! `integrate`. Force is added straight to the position, not to a velocity.

mod point;
mod angular;

pub use point::VerletPoint;
pub use angular::VerletAngle;
