//! Core helpers shared by every system.
//!
//! - utils/log.rs - console logging macros (no-ops off wasm32)
//! - math.rs      - scalar helpers used by the physics and camera

#[macro_use]
pub mod utils;
pub mod math;
