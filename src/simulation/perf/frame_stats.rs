use wasm_bindgen::prelude::*;

/// Per-frame debug overlay data
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub(super) fps: u32,
    pub(super) dt: f64,
    pub(super) frame: u64,
    pub(super) rotation_degrees: f64,
    pub(super) grounded: bool,
    pub(super) floor_height: f64,
    /// Zero unless perf metrics are enabled
    pub(super) step_ms: f64,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 { self.fps }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f64 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn rotation_degrees(&self) -> f64 { self.rotation_degrees }
    #[wasm_bindgen(getter)]
    pub fn grounded(&self) -> bool { self.grounded }
    #[wasm_bindgen(getter)]
    pub fn floor_height(&self) -> f64 { self.floor_height }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
}
