use serde::Serialize;

use super::SimulationCore;

/// Everything the renderer needs for one frame, taken after the pipeline ran
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub x: f64,
    pub y: f64,
    pub orientation: f64,
    pub radius: f64,
    pub camera_x: f64,
    pub camera_y: f64,
    pub fps: u32,
    pub dt: f64,
    pub frame: u64,
    pub grounded: bool,
}

pub(super) fn snapshot(sim: &SimulationCore) -> RenderSnapshot {
    let pos = sim.body.position();
    RenderSnapshot {
        x: pos.x,
        y: pos.y,
        orientation: sim.body.orientation(),
        radius: sim.body.radius,
        camera_x: sim.camera.x,
        camera_y: sim.camera.y,
        fps: sim.clock.fps(),
        dt: sim.stats.dt,
        frame: sim.frame,
        grounded: sim.last_contact.grounded,
    }
}

pub(super) fn snapshot_json(sim: &SimulationCore) -> String {
    serde_json::to_string(&snapshot(sim)).unwrap_or_else(|_| "{}".to_string())
}

/// Heights for screen columns `[-view_width / 2, view_width]` around
/// `offset_x`, written into the reusable transfer buffer.
pub(super) fn collect_terrain_profile(sim: &mut SimulationCore, offset_x: f64) -> usize {
    let width = sim.settings.view_width as i64;
    let from = -width / 2;
    sim.terrain
        .sample_profile(offset_x, from, width, &mut sim.profile_buffer)
}
