// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StepHighlights, Visualizer};

/// Selection sort that shrinks the unsorted window from both ends. One scan of
/// `[left, right]` finds both the minimum and the maximum; the minimum goes to `left`
/// and the maximum to `right`.
///
/// Highlights use all five roles:
///
/// | role                   | index                                  |
/// | ---------------------- | -------------------------------------- |
/// | last changed           | last slot that received a minimum      |
/// | active pointer         | running minimum                        |
/// | comparison partner     | scan cursor                            |
/// | secondary pointer      | running maximum                        |
/// | secondary last changed | last slot that received a maximum      |
pub fn double_selection_sort(array: &mut [usize], vis: &mut Visualizer) {
    let len = array.len();
    let mut maybe_last_min_swap = None;
    let mut maybe_last_max_swap = None;

    // With an odd length the lone middle element is already in place, and a single
    // element array is never scanned.
    for left in 0..len / 2 {
        let right = len - 1 - left;
        let mut min = left;
        let mut max = left;

        for j in left..=right {
            vis.render_frame(
                array,
                StepHighlights::none()
                    .last_changed(maybe_last_min_swap)
                    .active_pointer(min)
                    .comparison_partner(j)
                    .secondary_pointer(max)
                    .secondary_last_changed(maybe_last_max_swap),
            );
            if !vis.should_continue() {
                return;
            }

            vis.record_comparisons(2);
            vis.record_accesses(4);
            if array[j] < array[min] {
                min = j;
            }
            if array[j] > array[max] {
                max = j;
            }
        }

        if min != left {
            // The maximum is about to be moved out of `left`.
            if max == left {
                max = min;
            }
            array.swap(left, min);
            maybe_last_min_swap = Some(left);
            vis.record_swap();
            vis.record_accesses(4);
        }

        if max != right {
            array.swap(right, max);
            maybe_last_max_swap = Some(right);
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
    use super::*;
    use crate::{BarStyle::{Filled, Highlight},
                HighlightRole::{ActivePointer, ComparisonPartner, LastChanged,
                                SecondaryLastChanged, SecondaryPointer},
                InterruptFlag, RecordingPainter, RunStats, VisualizerConfig, assert_eq2};

    fn run(array: &mut [usize]) -> RunStats {
        let mut vis = Visualizer::try_new(VisualizerConfig::new(false, 0), InterruptFlag::new())
            .unwrap();
        double_selection_sort(array, &mut vis);
        vis.stats()
    }

    #[test]
    fn test_max_at_left_is_tracked_through_min_swap() {
        // Max sits at `left` and min at `right`: one swap fixes both ends.
        let mut array = vec![3, 1, 2, 0];
        let stats = run(&mut array);
        assert_eq2!(array, vec![0, 1, 2, 3]);
        assert_eq2!(stats.swaps, 1);
    }

    #[test]
    fn test_sorted_input_makes_no_swaps() {
        let mut array: Vec<usize> = (0..5).collect();
        let stats = run(&mut array);
        // Windows of 5 then 3 elements.
        assert_eq2!(
            stats,
            RunStats {
                comparisons: 16,
                accesses: 32,
                swaps: 0
            }
        );
    }

    #[test]
    fn test_odd_length_leaves_middle_in_place() {
        let mut array = vec![4, 0, 2, 1, 3];
        run(&mut array);
        assert_eq2!(array, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_element_window_is_never_scanned() {
        for (mut array, expected_comparisons) in [(vec![0], 0), (vec![0, 1, 2], 6)] {
            let stats = run(&mut array);
            assert_eq2!(stats.comparisons, expected_comparisons);
            assert_eq2!(stats.swaps, 0);
        }
    }

    #[test]
    fn test_highlights_use_all_five_roles() {
        let painter = RecordingPainter::new();
        let mut vis = Visualizer::try_new_with_painter(
            VisualizerConfig::new(true, 0),
            InterruptFlag::new(),
            Box::new(painter.clone()),
        )
        .unwrap();
        let mut array = vec![3, 0, 4, 1, 2];
        double_selection_sort(&mut array, &mut vis);
        drop(vis);

        let styles = painter.frame_styles();
        // Outer pass 0 scans 5 elements, pass 1 scans 3, then the plain final frame.
        assert_eq2!(styles.len(), 9);

        // Pass 0, cursor at 2: min found at 1, max still at 0, no swaps yet.
        assert_eq2!(
            styles[2],
            vec![
                Highlight(SecondaryPointer),
                Highlight(ActivePointer),
                Highlight(ComparisonPartner),
                Filled,
                Filled
            ]
        );

        // Pass 1 on [0, 3, 2, 1, 4], cursor at 3: min at 2, max at 1, and both
        // swaps of pass 0 (min into 0, max into 4) are still shown.
        assert_eq2!(
            styles[7],
            vec![
                Highlight(LastChanged),
                Highlight(SecondaryPointer),
                Highlight(ActivePointer),
                Highlight(ComparisonPartner),
                Highlight(SecondaryLastChanged)
            ]
        );
        assert!(styles[8].iter().all(|it| *it == Filled));
    }
}
