// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StepHighlights, Visualizer};

/// Cocktail shaker sort: a forward bubble pass that parks the largest element at
/// `right`, then a backward pass that parks the smallest at `left`. Stops as soon as a
/// pass makes no swaps, or the window closes.
pub fn shaker_sort(array: &mut [usize], vis: &mut Visualizer) {
    let mut left = 0;
    let mut right = array.len().saturating_sub(1);

    while left < right {
        let mut is_swapped = false;
        for i in left..right {
            let Some(it) = step(array, vis, i, i + 1) else {
                return;
            };
            is_swapped |= it;
        }
        right -= 1;
        if !is_swapped {
            break;
        }

        is_swapped = false;
        for i in ((left + 1)..=right).rev() {
            let Some(it) = step(array, vis, i, i - 1) else {
                return;
            };
            is_swapped |= it;
        }
        left += 1;
        if !is_swapped {
            break;
        }
    }

    if vis.should_continue() {
        vis.render_frame(array, StepHighlights::none());
    }
}

/// Compare the neighbors `active` and `partner`, swapping them if the one with the lower
/// index holds the larger value. Returns `None` if the run was cancelled before the
/// comparison, otherwise whether a swap happened.
fn step(
    array: &mut [usize],
    vis: &mut Visualizer,
    active: usize,
    partner: usize,
) -> Option<bool> {
    vis.render_frame(
        array,
        StepHighlights::none()
            .active_pointer(active)
            .comparison_partner(partner),
    );
    if !vis.should_continue() {
        return None;
    }

    let (lo, hi) = (active.min(partner), active.max(partner));
    vis.record_comparison();
    vis.record_accesses(2);
    if array[lo] > array[hi] {
        array.swap(lo, hi);
        vis.record_swap();
        vis.record_accesses(4);
        return Some(true);
    }
    Some(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BarStyle::{Filled, Highlight},
                HighlightRole::{ActivePointer, ComparisonPartner},
                InterruptFlag, RecordingPainter, RunStats, VisualizerConfig, assert_eq2};

    fn run(array: &mut [usize]) -> RunStats {
        let mut vis = Visualizer::try_new(VisualizerConfig::new(false, 0), InterruptFlag::new())
            .unwrap();
        shaker_sort(array, &mut vis);
        vis.stats()
    }

    #[test]
    fn test_sorts_reversed_input() {
        let mut array = vec![4, 3, 2, 1, 0];
        let stats = run(&mut array);
        assert_eq2!(array, vec![0, 1, 2, 3, 4]);
        // Reversed input needs one swap per inversion.
        assert_eq2!(stats.swaps, 10);
    }

    #[test]
    fn test_sorted_input_stops_after_forward_pass() {
        let mut array: Vec<usize> = (0..6).collect();
        let stats = run(&mut array);
        assert_eq2!(
            stats,
            RunStats {
                comparisons: 5,
                accesses: 10,
                swaps: 0
            }
        );
    }

    #[test]
    fn test_small_element_at_end_moves_in_one_backward_pass() {
        // Forward pass: 4 comparisons, no swap until the last pair (4 > 0).
        // Backward pass: 3 comparisons, 0 bubbles down to index 0 (3 swaps).
        // Second forward pass over [1, 3): 2 comparisons, no swaps.
        let mut array = vec![1, 2, 3, 4, 0];
        let stats = run(&mut array);
        assert_eq2!(array, vec![0, 1, 2, 3, 4]);
        assert_eq2!(stats.comparisons, 9);
        assert_eq2!(stats.swaps, 4);
    }

    #[test]
    fn test_only_pointer_and_partner_are_highlighted() {
        let painter = RecordingPainter::new();
        let mut vis = Visualizer::try_new_with_painter(
            VisualizerConfig::new(true, 0),
            InterruptFlag::new(),
            Box::new(painter.clone()),
        )
        .unwrap();
        let mut array = vec![1, 0, 2];
        shaker_sort(&mut array, &mut vis);
        drop(vis);

        // Forward over 0..2, then backward from 1 (the swap at 0 keeps it going).
        assert_eq2!(
            painter.frame_styles(),
            vec![
                vec![Highlight(ActivePointer), Highlight(ComparisonPartner), Filled],
                vec![Filled, Highlight(ActivePointer), Highlight(ComparisonPartner)],
                vec![Highlight(ComparisonPartner), Highlight(ActivePointer), Filled],
                vec![Filled, Filled, Filled],
            ]
        );
    }
}
