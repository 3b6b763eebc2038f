//! Simulation settings, loadable from a JSON document.
//!
//! Every field is optional in the JSON; missing fields take the defaults
//! below. Validation only happens here, at load time; the physics core
//! itself accepts any value.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::systems::terrain::{GROUND_ACCEL, SLOPE_FORCE};

/// Largest accepted view width or height (pixels)
pub const MAX_VIEW_DIMENSION: u32 = 16_384;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Downward force applied every frame
    pub gravity: f64,
    /// Per-step damping shared by linear and angular motion, in [0, 1)
    pub friction: f64,
    pub radius: f64,
    pub start_x: f64,
    pub start_y: f64,
    /// Ground force per unit of throttle
    pub throttle_accel: f64,
    /// Torque per unit of steering
    pub steer_torque: f64,
    /// Reaction force at +/- 90 degrees of pitch
    pub slope_force: f64,
    pub noise_frequency: f64,
    pub noise_amplitude: f64,
    pub noise_seed: u32,
    /// Camera lerp factor per frame
    pub camera_smoothing: f64,
    pub view_width: u32,
    pub view_height: u32,
    /// Frame gaps above this (seconds) are treated as dt = 0
    pub max_frame_delta: f64,
    /// FPS counter window (seconds)
    pub fps_window: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            friction: 0.01,
            radius: 20.0,
            start_x: 0.0,
            start_y: 0.0,
            throttle_accel: GROUND_ACCEL,
            steer_torque: PI * 0.05,
            slope_force: SLOPE_FORCE,
            noise_frequency: 0.001,
            noise_amplitude: 600.0,
            noise_seed: 1337,
            camera_smoothing: 0.075,
            view_width: 800,
            view_height: 600,
            max_frame_delta: 1.0,
            fps_window: 1.0,
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("radius", self.radius),
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("throttle_accel", self.throttle_accel),
            ("steer_torque", self.steer_torque),
            ("slope_force", self.slope_force),
            ("noise_frequency", self.noise_frequency),
            ("noise_amplitude", self.noise_amplitude),
            ("camera_smoothing", self.camera_smoothing),
            ("max_frame_delta", self.max_frame_delta),
            ("fps_window", self.fps_window),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }

        if !(0.0..1.0).contains(&self.friction) {
            return Err(format!("friction must be in [0, 1), got {}", self.friction));
        }
        if self.radius < 0.0 {
            return Err(format!("radius must be >= 0, got {}", self.radius));
        }
        if self.max_frame_delta <= 0.0 {
            return Err(format!("max_frame_delta must be > 0, got {}", self.max_frame_delta));
        }
        if self.fps_window <= 0.0 {
            return Err(format!("fps_window must be > 0, got {}", self.fps_window));
        }
        for (name, value) in [("view_width", self.view_width), ("view_height", self.view_height)] {
            if value == 0 || value > MAX_VIEW_DIMENSION {
                return Err(format!(
                    "{name} must be in [1, {MAX_VIEW_DIMENSION}], got {value}"
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.camera_smoothing) {
            return Err(format!(
                "camera_smoothing must be in [0, 1], got {}",
                self.camera_smoothing
            ));
        }
        Ok(())
    }
}
