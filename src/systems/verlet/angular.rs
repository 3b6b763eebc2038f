/// Scalar orientation integrated like [`super::VerletPoint`].
///
/// The angle is never normalized here. Wrapping `angle` without shifting the
/// previous angle by the same amount makes the next derived angular velocity
/// jump by a full turn.
#[derive(Clone, Debug)]
pub struct VerletAngle {
    /// Current angle (radians)
    angle: f64,
    /// Angle at the start of the last integration step
    prev_angle: f64,
    /// Torque accumulated since the last step
    torque: f64,
    friction: f64,
}

impl VerletAngle {
    pub fn new(angle: f64, friction: f64) -> Self {
        Self {
            angle,
            prev_angle: angle,
            torque: 0.0,
            friction,
        }
    }

    /// Accumulate torque for the next step
    pub fn apply_torque(&mut self, torque: f64) {
        self.torque += torque;
    }

    pub fn integrate(&mut self, dt: f64) {
        let mut angular_velocity = self.angular_velocity();
        self.prev_angle = self.angle;

        angular_velocity *= 1.0 - self.friction;
        self.angle = self.angle + angular_velocity + self.torque * dt;

        self.torque = 0.0;
    }

    #[inline]
    pub fn angular_velocity(&self) -> f64 {
        self.angle - self.prev_angle
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Overwrite the current angle only; the previous angle is left alone.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    pub fn prev_angle(&self) -> f64 {
        self.prev_angle
    }

    pub fn pending_torque(&self) -> f64 {
        self.torque
    }
}
