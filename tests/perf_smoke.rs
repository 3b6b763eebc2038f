use hillride_engine::Simulation;

#[test]
fn perf_smoke_tick() {
    let mut sim = Simulation::new();
    sim.enable_perf_metrics(true);
    sim.set_key("ArrowUp", true);

    // 64 frames per second, exact in binary
    let mut now = 0.0;
    for _ in 0..120 {
        now += 15.625;
        sim.tick(now);
    }

    let stats = sim.get_frame_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.frame(), 120);
    assert_eq!(sim.frame(), 120);
    assert_eq!(sim.fps(), 64);

    let core = sim.core();
    assert_eq!(core.frame(), 120);
    assert_eq!(sim.x(), core.body().position().x);
    assert!(core.last_contact().floor.is_finite());
}
