use super::*;
use crate::domain::settings::SimSettings;
use crate::systems::body::Vec2;
use crate::systems::terrain::ConstantNoise;

const DT: f64 = 1.0 / 60.0;

/// Flat floor at y = 300 (0.5 * 600)
fn flat_sim(settings: SimSettings) -> SimulationCore {
    SimulationCore::with_noise(settings, Box::new(ConstantNoise(0.5)))
}

fn frictionless() -> SimSettings {
    SimSettings {
        friction: 0.0,
        ..SimSettings::default()
    }
}

#[test]
fn falling_body_comes_to_rest_on_flat_ground() {
    let mut sim = flat_sim(SimSettings::default());
    assert_eq!(sim.terrain_height(0.0), 300.0);

    let mut landed_at = None;
    for i in 0..600 {
        sim.step(DT);
        if landed_at.is_none() && sim.last_contact().grounded {
            landed_at = Some(i);
        }
    }
    assert!(landed_at.is_some(), "body never reached the ground");

    for _ in 0..100 {
        sim.step(DT);
        let body = sim.body();
        assert!(sim.last_contact().grounded);
        assert_eq!(body.position().y, 300.0 - body.radius);
        assert_eq!(body.position().x, 0.0);
        assert_eq!(body.orientation(), 0.0);
    }
}

#[test]
fn body_falls_freely_above_ground() {
    let mut sim = flat_sim(frictionless());
    sim.step(0.5);
    // gravity force 9.8 * dt lands directly in the position
    assert_eq!(sim.body().position(), Vec2::new(0.0, 4.9));
    assert!(!sim.last_contact().grounded);
    assert_eq!(sim.last_contact().floor, 300.0);
}

#[test]
fn long_frame_gap_simulates_zero_dt() {
    let mut sim = flat_sim(frictionless());
    assert!((sim.tick(16.0) - 0.016).abs() < 1e-6);
    sim.tick(32.0);
    assert_eq!(sim.clock().state(), ClockState::Running);

    let before = sim.body().position();
    let velocity = sim.body().velocity();

    // 5 second gap
    let dt = sim.tick(5032.0);
    assert_eq!(dt, 0.0);
    assert_eq!(sim.clock().state(), ClockState::Reset);

    // inertia only, no 5s worth of gravity
    let after = sim.body().position();
    assert!((after.y - (before.y + velocity.y)).abs() < 1e-5);

    let dt = sim.tick(5048.0);
    assert!((dt - 0.016).abs() < 1e-6);
    assert_eq!(sim.clock().state(), ClockState::Running);
}

#[test]
fn steering_applies_torque_every_frame() {
    let mut sim = flat_sim(frictionless());
    assert!(sim.set_key("ArrowRight", true));
    sim.step(0.5);

    let expected = sim.settings().steer_torque * 0.5;
    assert!((sim.body().orientation() - expected).abs() < 1e-6);

    sim.set_key("ArrowRight", false);
    sim.set_key("ArrowLeft", true);
    sim.step(0.5);
    // the opposite push cancels this frame's gain; momentum remains
    assert!((sim.body().orientation() - expected).abs() < 1e-6);
}

#[test]
fn throttle_does_nothing_in_the_air() {
    let mut sim = flat_sim(frictionless());
    sim.set_input(ControlInput::new(true, false, false, false));
    for _ in 0..10 {
        sim.step(DT);
        assert!(!sim.last_contact().grounded);
    }
    assert_eq!(sim.body().position().x, 0.0);
}

#[test]
fn throttle_drives_body_along_the_ground() {
    let mut sim = flat_sim(SimSettings {
        start_y: 279.0,
        ..SimSettings::default()
    });
    sim.set_key("ArrowUp", true);

    for _ in 0..120 {
        sim.step(DT);
    }

    let body = sim.body();
    assert!(sim.last_contact().grounded);
    assert!(body.position().x > 0.0);
    assert!(body.velocity().x > 0.0);
    assert_eq!(body.position().y, 280.0);
    // flat ground: facing straight ahead
    assert_eq!(body.orientation(), 0.0);
}

#[test]
fn reverse_throttle_faces_the_same_way() {
    let mut sim = flat_sim(SimSettings {
        start_y: 279.0,
        ..SimSettings::default()
    });
    sim.set_key("ArrowDown", true);

    for _ in 0..120 {
        sim.step(DT);
    }

    assert!(sim.body().position().x < 0.0);
    assert_eq!(sim.body().orientation(), 0.0);
}

#[test]
fn coasting_body_slows_down_far_from_origin() {
    let mut sim = flat_sim(SimSettings {
        start_x: 1_048_576.0,
        start_y: 279.0,
        ..SimSettings::default()
    });
    sim.set_key("ArrowUp", true);
    for _ in 0..120 {
        sim.step(DT);
    }
    sim.set_key("ArrowUp", false);
    // last queued throttle push is consumed here
    sim.step(DT);

    let mut last = sim.body().velocity().x;
    assert!(last > 0.0);
    for _ in 0..200 {
        sim.step(DT);
        let vx = sim.body().velocity().x;
        assert!(vx < last, "vx {vx} should be below {last} at x = {}", sim.body().position().x);
        assert!(sim.last_contact().grounded);
        last = vx;
    }
}

#[test]
fn camera_follows_and_stops_at_half_view() {
    let mut sim = flat_sim(SimSettings {
        view_height: 400,
        ..SimSettings::default()
    });
    sim.step(DT);
    assert!(sim.camera().y > 0.0);
    assert!(sim.camera().y < sim.body().position().y);

    for _ in 0..600 {
        sim.step(DT);
    }
    assert_eq!(sim.camera().y, 200.0);
    assert_eq!(sim.camera().x, 0.0);
}

#[test]
fn stats_describe_the_last_frame() {
    let mut sim = flat_sim(SimSettings::default());
    sim.step(DT);
    sim.step(DT);

    let stats = sim.get_frame_stats();
    assert_eq!(stats.frame(), 2);
    assert_eq!(sim.frame(), 2);
    assert_eq!(stats.dt(), DT);
    assert!(!stats.grounded());
    assert_eq!(stats.floor_height(), 300.0);
    assert_eq!(stats.step_ms(), 0.0);
}

#[test]
fn perf_metrics_time_the_step() {
    let mut sim = flat_sim(SimSettings::default());
    sim.enable_perf_metrics(true);
    sim.step(DT);
    assert!(sim.get_frame_stats().step_ms() >= 0.0);
}

#[test]
fn fps_reaches_stats_after_a_full_window() {
    let mut sim = flat_sim(SimSettings::default());
    let mut now = 0.0;
    for _ in 0..8 {
        now += 125.0;
        sim.tick(now);
    }
    assert_eq!(sim.fps(), 8);
    sim.tick(now + 125.0);
    assert_eq!(sim.get_frame_stats().fps(), 8);
}

#[test]
fn terrain_profile_spans_one_and_a_half_screens() {
    let mut sim = flat_sim(SimSettings::default());
    let n = sim.collect_terrain_profile(1234.0);
    assert_eq!(n, 1201);
    assert_eq!(sim.terrain_profile().len(), 1201);
    assert!(sim.terrain_profile().iter().all(|h| *h == 300.0));
}

#[test]
fn snapshot_matches_body_state() {
    let mut sim = flat_sim(SimSettings::default());
    sim.step(DT);
    let snap = sim.snapshot();
    assert_eq!(snap.x, sim.body().position().x);
    assert_eq!(snap.y, sim.body().position().y);
    assert_eq!(snap.radius, 20.0);
    assert_eq!(snap.frame, 1);

    let json = sim.snapshot_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["frame"], 1);
    assert_eq!(value["grounded"], false);
}

#[test]
fn runtime_setters_change_the_pipeline() {
    let mut sim = flat_sim(frictionless());
    sim.set_gravity(2.0);
    sim.step(1.0);
    assert_eq!(sim.body().position().y, 2.0);

    sim.set_steer_torque(1.0);
    sim.set_key("ArrowRight", true);
    sim.step(1.0);
    assert_eq!(sim.body().orientation(), 1.0);

    sim.set_throttle_accel(50.0);
    assert_eq!(sim.settings().throttle_accel, 50.0);
}

#[test]
fn settings_json_is_validated() {
    assert!(SimulationCore::from_settings_json(r#"{ "friction": 2.0 }"#).is_err());
    let sim = SimulationCore::from_settings_json(r#"{ "noise_seed": 5, "radius": 10 }"#).unwrap();
    assert_eq!(sim.settings().noise_seed, 5);
    assert_eq!(sim.body().radius, 10.0);
}

#[test]
fn perlin_terrain_is_the_default() {
    let a = SimulationCore::new();
    let b = SimulationCore::new();
    for i in 0..20 {
        let x = i as f64 * 137.0;
        let h = a.terrain_height(x);
        assert_eq!(h, b.terrain_height(x));
        assert!((0.0..=600.0).contains(&h));
    }
}
