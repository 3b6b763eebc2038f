//! Hillride Engine - single-body Verlet motion over procedural terrain, in WASM
//!
//! One controllable body falls, rolls and rides over an infinite 1D height
//! field. Linear and angular motion use implicit-velocity Verlet steps;
//! ground contact is a hard snap plus throttle and slope forces.
//!
//! Architecture:
//! - core/       - math helpers, logging macros
//! - domain/     - controls and settings
//! - systems/    - integrators, body, terrain + collision
//! - simulation/ - frame loop orchestration and the JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::body;
pub use systems::terrain;
pub use systems::verlet;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Hillride engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::controls::ControlInput;
pub use domain::settings::SimSettings;
pub use simulation::{Simulation, SimulationCore};
pub use systems::body::{Body, Vec2};
pub use systems::terrain::{ConstantNoise, NoiseSource, PerlinNoise, Terrain, TerrainCollisionResolver};
