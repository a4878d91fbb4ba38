// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serial_test::serial;
use sortvis::{BarStyle, InterruptFlag, RecordingPainter, RunConfig, SortAlgorithm,
              Visualizer, VisualizerConfig, assert_eq2, generate_shuffled_vec, run};
use strum::IntoEnumIterator;

#[test]
fn test_completed_run_ends_with_plain_sorted_frame() {
    for algorithm in SortAlgorithm::iter() {
        let painter = RecordingPainter::new();
        let mut vis = Visualizer::try_new_with_painter(
            VisualizerConfig::new(true, 0),
            InterruptFlag::new(),
            Box::new(painter.clone()),
        )
        .unwrap();
        vis.set_algorithm_name(algorithm.name());

        let mut array = generate_shuffled_vec(12, Some(2025));
        algorithm.run(&mut array, &mut vis);
        let expected_header = vis.stats().summary(vis.algorithm_name());
        drop(vis);

        let last = painter.last_frame().unwrap();
        let values: Vec<usize> = last.columns.iter().map(|it| it.value).collect();
        assert_eq2!(values, (0..12).collect::<Vec<_>>(), "{algorithm}");
        assert!(last.columns.iter().all(|it| it.style == BarStyle::Filled));
        assert_eq2!(last.header, expected_header);
    }
}

#[test]
fn test_same_seed_same_stats() {
    let stats_for = |seed| {
        let mut vis =
            Visualizer::try_new(VisualizerConfig::new(false, 0), InterruptFlag::new()).unwrap();
        let mut array = generate_shuffled_vec(40, Some(seed));
        SortAlgorithm::Insertion.run(&mut array, &mut vis);
        vis.stats()
    };
    assert_eq2!(stats_for(11), stats_for(11));
}

#[serial]
#[test]
fn test_launcher_without_visualization() {
    for algorithm in SortAlgorithm::iter() {
        let result = run(RunConfig {
            algorithm,
            size: 16,
            delay_ms: 0,
            maybe_seed: Some(1),
            visual_enabled: false,
            enable_logging: false,
        });
        assert!(result.is_ok(), "{algorithm}");
    }
}
