//! Simulation - one body on an infinite height field
//!
//! Single-threaded and frame driven. Each host frame:
//! clock -> controls -> torque/gravity -> integrate -> terrain contact
//! -> camera -> stats. Render state is only read after the whole pipeline
//! has run.
//!
//! - clock/   - wall-clock delta, dt clamp (Running/Reset), FPS counter
//! - step/    - per-frame update pipeline
//! - camera/  - smoothed vertical follower
//! - perf/    - frame stats and timing
//! - render/  - snapshot and terrain profile for the renderer

use crate::domain::controls::ControlInput;
use crate::domain::settings::SimSettings;
use crate::systems::body::Body;
use crate::systems::terrain::{Contact, NoiseSource, Terrain, TerrainCollisionResolver};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "clock/frame_clock.rs"]
mod frame_clock;
#[path = "camera/camera.rs"]
mod camera;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use camera::Camera;
pub use facade::Simulation;
pub use frame_clock::{ClockState, FrameClock};
pub use frame_stats::FrameStats;
pub use perf_timer::now_ms;
pub use render_extract::RenderSnapshot;

use perf_timer::PerfTimer;

/// The simulation state. Exclusively owns the body for the process lifetime.
pub struct SimulationCore {
    settings: SimSettings,
    body: Body,
    terrain: Terrain,
    resolver: TerrainCollisionResolver,
    camera: Camera,
    clock: FrameClock,
    input: ControlInput,

    // State
    frame: u64,
    last_contact: Contact,

    // Perf metrics
    perf_enabled: bool,
    stats: FrameStats,

    // Render transfer
    profile_buffer: Vec<f32>,
}

impl SimulationCore {
    /// Default settings over seeded Perlin terrain
    pub fn new() -> Self {
        init::create_simulation_core(SimSettings::default())
    }

    /// Settings must already be validated (see `SimSettings::from_json`)
    pub fn with_settings(settings: SimSettings) -> Self {
        init::create_simulation_core(settings)
    }

    /// Custom terrain source, e.g. flat ground for tests
    pub fn with_noise(settings: SimSettings, noise: Box<dyn NoiseSource>) -> Self {
        init::create_simulation_core_with_noise(settings, noise)
    }

    pub fn from_settings_json(json: &str) -> Result<Self, String> {
        let settings = SimSettings::from_json(json)?;
        Ok(Self::with_settings(settings))
    }

    // === FRAME LOOP ===

    /// Host frame callback: measure the wall-clock gap, then step.
    /// Returns the dt that was simulated.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = self.clock.advance(now_ms);
        self.step(dt);
        dt
    }

    /// Run the update pipeline once with an explicit dt (no clock involved)
    pub fn step(&mut self, dt: f64) {
        step::step(self, dt);
    }

    // === CONTROLS ===

    pub fn set_input(&mut self, input: ControlInput) {
        self.input = input;
    }

    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        self.input.set_key(key, pressed)
    }

    pub fn input(&self) -> ControlInput {
        self.input
    }

    // === STATE ===

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    pub fn last_contact(&self) -> Contact {
        self.last_contact
    }

    pub fn terrain_height(&self, x: f64) -> f64 {
        self.terrain.height_at(x)
    }

    // === SETTINGS ===

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_throttle_accel(&mut self, accel: f64) {
        settings::set_throttle_accel(self, accel);
    }

    pub fn set_steer_torque(&mut self, torque: f64) {
        settings::set_steer_torque(self, torque);
    }

    /// Enable or disable per-step timing (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's stats
    pub fn get_frame_stats(&self) -> FrameStats {
        self.stats.clone()
    }

    // === RENDER HANDOFF ===

    pub fn snapshot(&self) -> RenderSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }

    /// Sample terrain heights for every screen column around `offset_x`
    pub fn collect_terrain_profile(&mut self, offset_x: f64) -> usize {
        render_extract::collect_terrain_profile(self, offset_x)
    }

    pub fn terrain_profile(&self) -> &[f32] {
        &self.profile_buffer
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
