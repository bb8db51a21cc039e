use pbd_kernel::Kernel;

#[test]
fn perf_smoke_advance() {
    let mut kernel = Kernel::new(7);
    kernel.enable_perf_metrics(true);
    for i in 0..64 {
        let x = (i % 8) as f32 * 2.2 - 8.0;
        let z = (i / 8) as f32 * 2.2 - 8.0;
        kernel.spawn(x, 5.0, z, 0.0, 0.0, 0.0, 1.0).unwrap();
    }
    let positions = kernel.advance(None);
    assert_eq!(positions.len(), 64 * 3);

    let stats = kernel.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 64);
    let passes = stats.substeps() * stats.iterations();
    assert_eq!(stats.pair_checks(), passes * (64 * 63 / 2));
}
