use crate::core::math::lerp;

/// Smoothed follower of the body's height. Derived every frame, never read
/// by the physics.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Fixed at the starting column; the terrain scrolls instead
    pub x: f64,
    pub y: f64,
    smoothing: f64,
    /// Lowest point the camera may look at (view_height / 2)
    floor_limit: f64,
}

impl Camera {
    pub fn new(x: f64, y: f64, smoothing: f64, view_height: u32) -> Self {
        Self {
            x,
            y,
            smoothing,
            floor_limit: view_height as f64 / 2.0,
        }
    }

    pub fn follow(&mut self, target_y: f64) {
        self.y = lerp(self.smoothing, self.y, target_y);
        self.y = self.y.min(self.floor_limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_toward_target() {
        let mut camera = Camera::new(0.0, 0.0, 0.25, 600);
        camera.follow(100.0);
        assert_eq!(camera.y, 25.0);
        camera.follow(100.0);
        assert_eq!(camera.y, 43.75);
        assert_eq!(camera.x, 0.0);
    }

    #[test]
    fn never_goes_below_half_the_view() {
        let mut camera = Camera::new(0.0, 290.0, 1.0, 600);
        camera.follow(1000.0);
        assert_eq!(camera.y, 300.0);
        camera.follow(-50.0);
        assert_eq!(camera.y, -50.0);
    }
}
