use crate::systems::verlet::{VerletAngle, VerletPoint};

use super::vec2::Vec2;

/// Controllable body: linear + angular Verlet state and a collision radius
#[derive(Clone, Debug)]
pub struct Body {
    // === Physics State ===
    linear: VerletPoint,
    angular: VerletAngle,

    // === Shape ===
    /// Collision half-extent
    pub radius: f64,
}

impl Body {
    /// Body at rest at (x, y); both integrators share `friction`
    pub fn new(x: f64, y: f64, radius: f64, friction: f64) -> Self {
        Self {
            linear: VerletPoint::new(x, y, friction),
            angular: VerletAngle::new(0.0, friction),
            radius,
        }
    }

    pub fn apply_force(&mut self, fx: f64, fy: f64) {
        self.linear.apply_force(fx, fy);
    }

    pub fn apply_torque(&mut self, torque: f64) {
        self.angular.apply_torque(torque);
    }

    /// Integrate linear and angular state for one frame
    pub fn update(&mut self, dt: f64) {
        self.linear.integrate(dt);
        self.angular.integrate(dt);
    }

    /// Derived velocity, computed exactly as `update` computes it
    pub fn velocity(&self) -> Vec2 {
        self.linear.velocity()
    }

    pub fn position(&self) -> Vec2 {
        self.linear.pos
    }

    pub fn orientation(&self) -> f64 {
        self.angular.angle()
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular.angular_velocity()
    }

    /// Hard-set the vertical position (terrain snap). The previous position
    /// is untouched, so the correction shows up in the derived velocity.
    pub(crate) fn snap_y(&mut self, y: f64) {
        self.linear.pos.y = y;
    }

    pub(crate) fn set_orientation(&mut self, angle: f64) {
        self.angular.set_angle(angle);
    }
}
