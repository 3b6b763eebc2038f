use std::f64::consts::FRAC_PI_2;

use crate::core::math::{map, wrap_turn};
use crate::systems::body::Body;

use super::height_field::Terrain;

/// Horizontal force per unit of throttle while on the ground
pub const GROUND_ACCEL: f64 = 25.0;
/// Reaction force at a pitch of +/- 90 degrees
pub const SLOPE_FORCE: f64 = 6.0;

/// Outcome of one resolution pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Body touched (and was snapped to) the ground this frame
    pub grounded: bool,
    /// Floor height sampled under the body
    pub floor: f64,
}

/// Snaps the body onto the terrain and applies ground forces.
///
/// Runs after `Body::update`. When the body's bottom edge is below the floor:
/// snap to the surface, push with the throttle, face along the velocity
/// (mirrored when moving left, untouched when `vx == 0`), wrap to one turn,
/// then push along the slope. Forces applied here act on the next frame.
#[derive(Clone, Copy, Debug)]
pub struct TerrainCollisionResolver {
    pub throttle_accel: f64,
    pub slope_force: f64,
}

impl Default for TerrainCollisionResolver {
    fn default() -> Self {
        Self {
            throttle_accel: GROUND_ACCEL,
            slope_force: SLOPE_FORCE,
        }
    }
}

impl TerrainCollisionResolver {
    pub fn new(throttle_accel: f64, slope_force: f64) -> Self {
        Self {
            throttle_accel,
            slope_force,
        }
    }

    /// `throttle` is `up - down` from the controls
    pub fn resolve(&self, body: &mut Body, terrain: &Terrain, throttle: f64) -> Contact {
        let pos = body.position();
        let floor = terrain.height_at(pos.x);

        if pos.y + body.radius <= floor {
            return Contact { grounded: false, floor };
        }

        body.snap_y(floor - body.radius);
        body.apply_force(throttle * self.throttle_accel, 0.0);

        let v = body.velocity();
        if v.x > 0.0 {
            body.set_orientation(v.y.atan2(v.x));
        }
        if v.x < 0.0 {
            body.set_orientation((-v.y).atan2(-v.x));
        }

        let orientation = wrap_turn(body.orientation());
        body.set_orientation(orientation);

        let push = map(orientation, -FRAC_PI_2, FRAC_PI_2, -self.slope_force, self.slope_force);
        body.apply_force(push, 0.0);

        Contact { grounded: true, floor }
    }
}
