// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StepHighlights, Visualizer};

/// Classic bubble sort with the "no swaps in a pass" early exit.
///
/// Every step paints the left element of the pair being compared as last changed, the
/// pass number as the active pointer, and the right element as the comparison partner.
pub fn bubble_sort(array: &mut [usize], vis: &mut Visualizer) {
    let len = array.len();

    for pass in 0..len.saturating_sub(1) {
        let mut is_swapped = false;

        for j in 0..len - 1 - pass {
            vis.render_frame(
                array,
                StepHighlights::none()
                    .last_changed(j)
                    .active_pointer(pass)
                    .comparison_partner(j + 1),
            );
            if !vis.should_continue() {
                return;
            }

            vis.record_comparison();
            vis.record_accesses(2);
            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                is_swapped = true;
                vis.record_swap();
                vis.record_accesses(4);
            }
        }

        if !is_swapped {
            break;
        }
    }

    if vis.should_continue() {
        vis.render_frame(array, StepHighlights::none());
    }
}
