use wasm_bindgen::prelude::*;

use crate::domain::controls::ControlInput;

use super::frame_stats::FrameStats;
use super::{now_ms, ClockState, SimulationCore};

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
        }
    }

    /// Create a simulation from a JSON settings document (missing fields use defaults)
    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: String) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_settings_json(&json).map_err(|e| {
            console_warn!("rejected settings: {}", e);
            JsValue::from_str(&e)
        })?;
        Ok(Self { core })
    }

    // === FRAME LOOP ===

    /// Frame callback with the host timestamp (ms), e.g. from requestAnimationFrame.
    /// Returns the simulated dt in seconds.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        self.core.tick(now_ms)
    }

    /// Frame callback that reads the wall clock itself
    pub fn tick_now(&mut self) -> f64 {
        self.core.tick(now_ms())
    }

    /// Step with an explicit dt (seconds), bypassing the clock
    pub fn step(&mut self, dt: f64) {
        self.core.step(dt);
    }

    // === CONTROLS ===

    /// Feed a KeyboardEvent.key; returns false for keys the engine ignores
    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        self.core.set_key(key, pressed)
    }

    pub fn set_input(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.core.set_input(ControlInput::new(up, down, left, right));
    }

    // === BODY STATE ===

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 { self.core.body().position().x }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 { self.core.body().position().y }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 { self.core.body().orientation() }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 { self.core.body().radius }

    #[wasm_bindgen(getter)]
    pub fn camera_x(&self) -> f64 { self.core.camera().x }

    #[wasm_bindgen(getter)]
    pub fn camera_y(&self) -> f64 { self.core.camera().y }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 { self.core.fps() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn grounded(&self) -> bool { self.core.last_contact().grounded }

    /// True when the last tick hit the dt clamp
    #[wasm_bindgen(getter)]
    pub fn clock_reset(&self) -> bool { self.core.clock().state() == ClockState::Reset }

    pub fn terrain_height(&self, x: f64) -> f64 {
        self.core.terrain_height(x)
    }

    /// Last frame's stats
    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.get_frame_stats()
    }

    /// Enable or disable per-step timing (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    // === SETTINGS ===

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.core.set_gravity(gravity);
    }

    pub fn set_throttle_accel(&mut self, accel: f64) {
        self.core.set_throttle_accel(accel);
    }

    pub fn set_steer_torque(&mut self, torque: f64) {
        self.core.set_steer_torque(torque);
    }

    // === TERRAIN TRANSFER ===

    /// Sample the terrain for one screen around `offset_x`; returns the sample count
    pub fn collect_terrain_profile(&mut self, offset_x: f64) -> usize {
        self.core.collect_terrain_profile(offset_x)
    }

    /// Pointer to the terrain profile (for JS reads over wasm memory)
    pub fn terrain_profile_ptr(&self) -> *const f32 {
        self.core.terrain_profile().as_ptr()
    }

    pub fn terrain_profile_len(&self) -> usize {
        self.core.terrain_profile().len()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Native access to the core (tests, tools)
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
