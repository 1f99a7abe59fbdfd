//! Value transfer between the two segments that share a handle.

use crate::{ValueModel, find_nearest};

/// Outcome of one redistribution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Redistribution {
    /// Handle that moved.
    pub handle_index: usize,
    /// Cumulative percentage the handle was moved to, after snapping.
    pub target: f32,
    /// Value of the segment left of the handle before the step.
    pub previous_left: f32,
    /// Value of the segment right of the handle before the step.
    pub previous_right: f32,
    /// Value of the segment left of the handle after the step.
    pub left: f32,
    /// Value of the segment right of the handle after the step.
    pub right: f32,
    /// Whether a segment minimum stopped the handle short of `target`.
    pub clamped: bool,
}

/// Moves handle `handle_index` so the segments left of it add up to
/// `percentage`, transferring value between its two neighbours only.
///
/// With `nearest`, the target percentage is first snapped to the model's
/// step grid. The left segment is then held within
/// `[minimum_left, pair_total - minimum_right]` and the right segment takes
/// the exact complement, so the pair total and the model total are
/// conserved.
///
/// Returns `None` and leaves the model untouched when there is no handle at
/// `handle_index` or `percentage` is not finite.
pub fn redistribute(
    model: &mut ValueModel,
    handle_index: usize,
    percentage: f32,
    nearest: bool,
) -> Option<Redistribution> {
    if !percentage.is_finite() {
        return None;
    }
    let target = if nearest {
        find_nearest(percentage, model.step_size(), model.snap_rule())
    } else {
        percentage
    };
    let sum_till_index = model.sum_through(handle_index);
    let diff = sum_till_index - target;

    let (left, right) = model.handle_pair_mut(handle_index)?;
    let previous_left = left.value;
    let previous_right = right.value;
    let pair_total = previous_left + previous_right;

    let requested = previous_left - diff;
    let upper = (pair_total - right.minimum).max(left.minimum);
    let new_left = requested.max(left.minimum).min(upper);

    left.value = new_left;
    right.value = pair_total - new_left;

    Some(Redistribution {
        handle_index,
        target,
        previous_left,
        previous_right,
        left: left.value,
        right: right.value,
        clamped: new_left != requested,
    })
}
