use crate::core::math::TO_DEGREES;

use super::{PerfTimer, SimulationCore};

/// One frame of the update pipeline. Strictly sequential: collision always
/// sees the post-integration position of this frame.
pub(super) fn step(sim: &mut SimulationCore, dt: f64) {
    let perf_on = sim.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let throttle = sim.input.throttle();
    let steer = sim.input.steer();

    // === CONTROL + GRAVITY ===
    sim.body.apply_torque(steer * sim.settings.steer_torque);
    sim.body.apply_force(0.0, sim.settings.gravity);

    // === INTEGRATION ===
    sim.body.update(dt);

    // === TERRAIN CONTACT ===
    // Queues throttle and slope forces for the next frame when grounded
    sim.last_contact = sim.resolver.resolve(&mut sim.body, &sim.terrain, throttle);

    sim.camera.follow(sim.body.position().y);
    sim.frame += 1;

    sim.stats.reset();
    sim.stats.fps = sim.clock.fps();
    sim.stats.dt = dt;
    sim.stats.frame = sim.frame;
    sim.stats.rotation_degrees = sim.body.orientation() * TO_DEGREES;
    sim.stats.grounded = sim.last_contact.grounded;
    sim.stats.floor_height = sim.last_contact.floor;
    if let Some(t0) = step_start {
        sim.stats.step_ms = t0.elapsed_ms();
    }
}
