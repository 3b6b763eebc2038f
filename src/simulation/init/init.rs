use crate::domain::controls::ControlInput;
use crate::domain::settings::{SimSettings, MAX_VIEW_DIMENSION};
use crate::systems::body::Body;
use crate::systems::terrain::{Contact, NoiseSource, PerlinNoise, Terrain, TerrainCollisionResolver};

use super::frame_clock::FrameClock;
use super::frame_stats::FrameStats;
use super::{Camera, SimulationCore};

pub(super) fn create_simulation_core(settings: SimSettings) -> SimulationCore {
    let noise = Box::new(PerlinNoise::new(settings.noise_seed));
    create_simulation_core_with_noise(settings, noise)
}

pub(super) fn create_simulation_core_with_noise(
    settings: SimSettings,
    noise: Box<dyn NoiseSource>,
) -> SimulationCore {
    let body = Body::new(settings.start_x, settings.start_y, settings.radius, settings.friction);
    let terrain = Terrain::new(noise, settings.noise_frequency, settings.noise_amplitude);
    let floor = terrain.height_at(settings.start_x);

    console_log!(
        "simulation created: seed {}, start ({}, {}), floor {}",
        settings.noise_seed,
        settings.start_x,
        settings.start_y,
        floor
    );

    SimulationCore {
        resolver: TerrainCollisionResolver::new(settings.throttle_accel, settings.slope_force),
        camera: Camera::new(
            settings.start_x,
            settings.start_y,
            settings.camera_smoothing,
            settings.view_height,
        ),
        clock: FrameClock::new(settings.max_frame_delta, settings.fps_window),
        input: ControlInput::default(),
        frame: 0,
        last_contact: Contact { grounded: false, floor },
        perf_enabled: false,
        stats: FrameStats::default(),
        // screen columns [-w/2, w]
        profile_buffer: Vec::with_capacity(profile_capacity(settings.view_width)),
        body,
        terrain,
        settings,
    }
}

/// Samples per terrain profile; unvalidated widths only get the capped reservation
fn profile_capacity(view_width: u32) -> usize {
    let width = view_width.min(MAX_VIEW_DIMENSION) as usize;
    width + width / 2 + 1
}
