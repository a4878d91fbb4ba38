// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StepHighlights, Visualizer};

/// Insertion sort by shifting. Each larger predecessor of the key moves one slot to the
/// right, and the key is written into the vacated slot so the chart shows it sinking.
/// That display write is not counted as an array access.
///
/// Highlights: the slot the larger element came from (last changed), the position the
/// key was taken from (active pointer), and the slot it moved to (comparison partner).
pub fn insertion_sort(array: &mut [usize], vis: &mut Visualizer) {
    for i in 1..array.len() {
        let key = array[i];
        vis.record_access();

        let mut hole = i;
        while hole > 0 && array[hole - 1] > key {
            let source = hole - 1;
            vis.record_comparison();
            vis.record_access();

            array[hole] = array[source];
            vis.record_accesses(2);
            array[source] = key;

            vis.render_frame(
                array,
                StepHighlights::none()
                    .last_changed(source)
                    .active_pointer(i)
                    .comparison_partner(hole),
            );
            if !vis.should_continue() {
                return;
            }

            hole = source;
        }

        // The scan stopped on a smaller element rather than the start of the array.
        if hole > 0 {
            vis.record_comparison();
            vis.record_access();
        }

        array[hole] = key;
        vis.record_access();
    }

    if vis.should_continue() {
        vis.render_frame(array, StepHighlights::none());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InterruptFlag, RecordingPainter, RunStats, VisualizerConfig, assert_eq2};

    #[test]
    fn test_counts_on_small_input() {
        let mut vis = Visualizer::try_new(VisualizerConfig::new(false, 0), InterruptFlag::new())
            .unwrap();
        let mut array = vec![2, 0, 1];
        insertion_sort(&mut array, &mut vis);

        // i = 1: key 0, one shift, reaches the start.
        //   accesses 1 (key) + 3 (shift) + 1 (place) = 5, comparisons 1, no bound.
        // i = 2: key 1, one shift, stops on 0.
        //   accesses 1 + 3 + 1 (bound) + 1 = 6, comparisons 1 + 1 (bound).
        assert_eq2!(array, vec![0, 1, 2]);
        assert_eq2!(
            vis.stats(),
            RunStats {
                comparisons: 3,
                accesses: 11,
                swaps: 0
            }
        );
    }

    #[test]
    fn test_sorted_input_only_bounding_comparisons() {
        let mut vis = Visualizer::try_new(VisualizerConfig::new(false, 0), InterruptFlag::new())
            .unwrap();
        let mut array: Vec<usize> = (0..5).collect();
        insertion_sort(&mut array, &mut vis);

        assert_eq2!(
            vis.stats(),
            RunStats {
                comparisons: 4,
                accesses: 12,
                swaps: 0
            }
        );
    }

    #[test]
    fn test_key_is_drawn_in_vacated_slot() {
        let painter = RecordingPainter::new();
        let mut vis = Visualizer::try_new_with_painter(
            VisualizerConfig::new(true, 0),
            InterruptFlag::new(),
            Box::new(painter.clone()),
        )
        .unwrap();
        let mut array = vec![1, 0];
        insertion_sort(&mut array, &mut vis);
        drop(vis);

        let log = painter.log.borrow();
        let first = &log.frames[0];
        assert_eq2!(first.columns[0].value, 0);
        assert_eq2!(first.columns[1].value, 1);
        assert_eq2!(
            first.columns[0].style,
            crate::BarStyle::Highlight(crate::HighlightRole::LastChanged)
        );
    }
}
