use crate::systems::body::Vec2;

/// Point mass with implicit (position-delta) velocity
#[derive(Clone, Debug)]
pub struct VerletPoint {
    /// Current world position
    pub pos: Vec2,
    /// Position at the start of the last integration step
    prev_pos: Vec2,
    /// Force accumulated since the last step
    force: Vec2,
    /// Per-step damping factor in [0, 1)
    friction: f64,
}

impl VerletPoint {
    /// Create a point at rest at (x, y)
    pub fn new(x: f64, y: f64, friction: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            prev_pos: Vec2::new(x, y),
            force: Vec2::zero(),
            friction,
        }
    }

    /// Accumulate a force for the next step
    pub fn apply_force(&mut self, fx: f64, fy: f64) {
        self.force.x += fx;
        self.force.y += fy;
    }

    /// Advance one step and consume the pending force
    pub fn integrate(&mut self, dt: f64) {
        let mut velocity = self.velocity();
        self.prev_pos = self.pos;

        velocity = velocity * (1.0 - self.friction);
        self.pos = self.pos + velocity + self.force * dt;

        self.force = Vec2::zero();
    }

    /// Derived velocity (units per step). Same value `integrate` would use.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    pub fn prev_pos(&self) -> Vec2 {
        self.prev_pos
    }

    pub fn pending_force(&self) -> Vec2 {
        self.force
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }
}
