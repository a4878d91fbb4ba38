// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StepHighlights, Visualizer};

/// Selection sort. Scans the unsorted suffix for its minimum and swaps it into place,
/// skipping the swap when the minimum is already there.
///
/// Highlights: the last slot that received a minimum (last changed), the running
/// minimum (active pointer), and the scan cursor (comparison partner).
pub fn selection_sort(array: &mut [usize], vis: &mut Visualizer) {
    let len = array.len();
    let mut maybe_last_swapped = None;

    for i in 0..len.saturating_sub(1) {
        let mut min = i;

        for j in (i + 1)..len {
            vis.render_frame(
                array,
                StepHighlights::none()
                    .last_changed(maybe_last_swapped)
                    .active_pointer(min)
                    .comparison_partner(j),
            );
            if !vis.should_continue() {
                return;
            }

            vis.record_comparison();
            vis.record_accesses(2);
            if array[j] < array[min] {
                min = j;
            }
        }

        if min != i {
            array.swap(i, min);
            maybe_last_swapped = Some(i);
            vis.record_swap();
            vis.record_accesses(4);
        }
    }

    if vis.should_continue() {
        vis.render_frame(array, StepHighlights::none());
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{BarStyle::{Filled, Highlight},
                HighlightRole::{ActivePointer, ComparisonPartner, LastChanged},
                InterruptFlag, RecordingPainter, RunStats, VisualizerConfig, assert_eq2};

    #[test_case(vec![0, 1, 2, 3], 0; "sorted")]
    #[test_case(vec![3, 2, 1, 0], 2; "reversed")]
    #[test_case(vec![1, 2, 3, 0], 3; "rotated")]
    fn test_comparisons_are_fixed_swaps_vary(mut array: Vec<usize>, expected_swaps: usize) {
        let mut vis = Visualizer::try_new(VisualizerConfig::new(false, 0), InterruptFlag::new())
            .unwrap();
        selection_sort(&mut array, &mut vis);

        assert_eq2!(array, vec![0, 1, 2, 3]);
        // N(N-1)/2 comparisons no matter the input.
        assert_eq2!(
            vis.stats(),
            RunStats {
                comparisons: 6,
                accesses: 12 + 4 * expected_swaps,
                swaps: expected_swaps
            }
        );
    }

    #[test]
    fn test_highlights_last_swap_running_min_and_cursor() {
        let painter = RecordingPainter::new();
        let mut vis = Visualizer::try_new_with_painter(
            VisualizerConfig::new(true, 0),
            InterruptFlag::new(),
            Box::new(painter.clone()),
        )
        .unwrap();
        let mut array = vec![2, 0, 1];
        selection_sort(&mut array, &mut vis);
        drop(vis);

        // Nothing is last changed until the first minimum lands at 0.
        assert_eq2!(
            painter.frame_styles(),
            vec![
                vec![Highlight(ActivePointer), Highlight(ComparisonPartner), Filled],
                vec![Filled, Highlight(ActivePointer), Highlight(ComparisonPartner)],
                vec![
                    Highlight(LastChanged),
                    Highlight(ActivePointer),
                    Highlight(ComparisonPartner)
                ],
                vec![Filled, Filled, Filled],
            ]
        );
    }
}
