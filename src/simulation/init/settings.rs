use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
}

pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: f64) {
    sim.settings.gravity = gravity;
}

pub(super) fn set_throttle_accel(sim: &mut SimulationCore, accel: f64) {
    sim.settings.throttle_accel = accel;
    sim.resolver.throttle_accel = accel;
}

pub(super) fn set_steer_torque(sim: &mut SimulationCore, torque: f64) {
    sim.settings.steer_torque = torque;
}
