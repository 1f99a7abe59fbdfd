//! Step snapping for released handles.

/// Remainder below which [`SnapRule::Legacy`] rounds down.
///
/// The threshold is a fixed number of percentage points and does not scale
/// with the step size: with a step of 3 or less every value rounds down.
pub const LEGACY_ROUND_DOWN_THRESHOLD: f32 = 3.0;

/// Relative distance from a grid point still treated as on the grid.
const GRID_TOLERANCE: f32 = 4.0 * f32::EPSILON;

/// How a percentage is rounded onto the step grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapRule {
    /// Round down when the remainder is below
    /// [`LEGACY_ROUND_DOWN_THRESHOLD`], otherwise round up.
    #[default]
    Legacy,
    /// Round to the nearest multiple of the step (ties round up).
    Nearest,
}

impl SnapRule {
    fn round_down_threshold(self, step: f32) -> f32 {
        match self {
            SnapRule::Legacy => LEGACY_ROUND_DOWN_THRESHOLD,
            SnapRule::Nearest => step / 2.0,
        }
    }
}

/// Snaps `number` onto a multiple of `step` according to `rule`.
///
/// Results are always `k * step` for an integer `k`, and a value that is
/// already on the grid snaps to itself, so snapping is idempotent for
/// fractional steps too.
///
/// A non-positive or non-finite `step` leaves `number` unchanged; callers
/// validate the step size when it is configured.
///
/// ```
/// use tessera_segmented_slider::{SnapRule, find_nearest};
///
/// assert_eq!(find_nearest(47.0, 5.0, SnapRule::Legacy), 45.0);
/// assert_eq!(find_nearest(48.0, 5.0, SnapRule::Legacy), 50.0);
/// assert_eq!(find_nearest(47.0, 5.0, SnapRule::Nearest), 45.0);
/// assert_eq!(find_nearest(47.5, 5.0, SnapRule::Nearest), 50.0);
/// ```
pub fn find_nearest(number: f32, step: f32, rule: SnapRule) -> f32 {
    if !(step.is_finite() && step > 0.0) || !number.is_finite() {
        return number;
    }
    let steps = number / step;

    // On the grid up to rounding noise: `k * step` reproduces itself.
    let nearest = steps.round();
    let tolerance = GRID_TOLERANCE * number.abs().max(step);
    if (number - nearest * step).abs() <= tolerance {
        return nearest * step;
    }

    let floor = steps.floor();
    let remainder = number - floor * step;
    if remainder < rule.round_down_threshold(step) {
        floor * step
    } else {
        (floor + 1.0) * step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_rounds_down_below_three() {
        assert_eq!(find_nearest(52.9, 5.0, SnapRule::Legacy), 50.0);
        assert_eq!(find_nearest(53.0, 5.0, SnapRule::Legacy), 55.0);
        assert_eq!(find_nearest(50.0, 5.0, SnapRule::Legacy), 50.0);
    }

    #[test]
    fn legacy_threshold_ignores_step_size() {
        // Remainder is always below 3 with a step of 2.
        assert_eq!(find_nearest(13.9, 2.0, SnapRule::Legacy), 12.0);
        // With a wide step, 4 of 10 still rounds up.
        assert_eq!(find_nearest(24.0, 10.0, SnapRule::Legacy), 30.0);
        assert_eq!(find_nearest(24.0, 10.0, SnapRule::Nearest), 20.0);
    }

    #[test]
    fn negative_values_snap_on_the_same_grid() {
        assert_eq!(find_nearest(-2.0, 5.0, SnapRule::Legacy), 0.0);
        assert_eq!(find_nearest(-4.0, 5.0, SnapRule::Legacy), -5.0);
    }

    #[test]
    fn fractional_steps_snap_idempotently() {
        assert_eq!(find_nearest(0.537, 0.1, SnapRule::Legacy), 0.5);
        assert_eq!(find_nearest(0.5, 0.1, SnapRule::Legacy), 0.5);

        for step in [0.1, 0.3, 0.7, 2.5] {
            for rule in [SnapRule::Legacy, SnapRule::Nearest] {
                let mut x = -50.0_f32;
                while x < 50.0 {
                    let once = find_nearest(x, step, rule);
                    assert_eq!(
                        find_nearest(once, step, rule),
                        once,
                        "x={x} step={step} {rule:?}"
                    );
                    assert_eq!(once, (once / step).round() * step);
                    x += 0.037;
                }
            }
        }
    }

    #[test]
    fn invalid_step_is_identity() {
        assert_eq!(find_nearest(12.3, 0.0, SnapRule::Legacy), 12.3);
        assert_eq!(find_nearest(12.3, -1.0, SnapRule::Nearest), 12.3);
        assert_eq!(find_nearest(12.3, f32::NAN, SnapRule::Legacy), 12.3);
    }
}
