//! Circular arithmetic on clock angles.
//!
//! All angles are degrees measured clockwise from 12 o'clock.

use crate::constants::{FULL_TURN_DEGREES, HALF_TURN_DEGREES};
use crate::prelude::Degrees;

/// Wraps any angle into `[0, 360)`.
pub fn normalize(angle: Degrees) -> Degrees {
    let mut wrapped = angle % FULL_TURN_DEGREES;
    if wrapped < 0.0 {
        wrapped += FULL_TURN_DEGREES;
    }
    // tiny negative inputs round up to exactly 360 after the correction
    if wrapped >= FULL_TURN_DEGREES {
        wrapped = 0.0;
    }
    wrapped
}

/// Signed rotation from `from` to `to` along the shorter way round, in `(-180, 180]`.
///
/// Positive is clockwise.
pub fn shortest_delta(from: Degrees, to: Degrees) -> Degrees {
    let mut delta = normalize(to) - normalize(from);
    if delta > HALF_TURN_DEGREES {
        delta -= FULL_TURN_DEGREES;
    } else if delta <= -HALF_TURN_DEGREES {
        delta += FULL_TURN_DEGREES;
    }
    delta
}

/// Length of the clockwise arc from `start` to `end`, in `[0, 360)`.
pub fn forward_arc(start: Degrees, end: Degrees) -> Degrees {
    let start = normalize(start);
    let mut end = normalize(end);
    if end < start {
        end += FULL_TURN_DEGREES;
    }
    end - start
}

/// Interpolates along the clockwise arc from `start` to `end`.
///
/// Clock hands never run backwards, so this never takes the shorter
/// counter-clockwise path even when it exists.
pub fn interpolate_forward_arc(start: Degrees, end: Degrees, progress: f64) -> Degrees {
    let start = normalize(start);
    normalize(start + forward_arc(start, end) * progress)
}

/// Rounds to the nearest multiple of `step`.
pub fn snap_to_step(angle: Degrees, step: Degrees) -> Degrees {
    let angle = normalize(angle);
    if !step.is_finite() || step <= 0.0 {
        return angle;
    }
    normalize((angle / step).round() * step)
}

/// Converts a pointer offset from the dial centre into a clock angle.
///
/// `dy` grows downwards, as in screen coordinates.
pub fn angle_from_point(dx: f64, dy: f64) -> Degrees {
    normalize(dy.atan2(dx).to_degrees() + 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn same_angle(a: f64, b: f64) -> bool {
        shortest_delta(a, b).abs() < 1e-9
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert!(close(normalize(370.0), 10.0));
        assert!(close(normalize(-30.0), 330.0));
        assert!(close(normalize(360.0), 0.0));
        assert!(close(normalize(-720.0), 0.0));
        assert!(normalize(-1e-20) < 360.0);
    }

    #[test]
    fn shortest_delta_folds_to_short_side() {
        assert!(close(shortest_delta(350.0, 10.0), 20.0));
        assert!(close(shortest_delta(10.0, 350.0), -20.0));
        assert!(close(shortest_delta(0.0, 180.0), 180.0));
        assert!(close(shortest_delta(180.0, 0.0), 180.0));
        assert!(close(shortest_delta(90.0, 90.0), 0.0));
    }

    #[test]
    fn forward_arc_crosses_the_seam() {
        assert!(close(interpolate_forward_arc(350.0, 10.0, 0.5), 0.0));
        assert!(close(interpolate_forward_arc(330.0, 360.0, 0.5), 345.0));
        assert!(close(interpolate_forward_arc(90.0, 120.0, 0.5), 105.0));
        // the long way round, never backwards
        assert!(close(interpolate_forward_arc(10.0, 350.0, 0.5), 180.0));
    }

    #[test]
    fn snap_rounds_to_minute_markers() {
        assert!(close(snap_to_step(44.0, 6.0), 42.0));
        assert!(close(snap_to_step(45.0, 6.0), 48.0));
        assert!(close(snap_to_step(358.0, 6.0), 0.0));
        assert!(close(snap_to_step(-4.0, 6.0), 354.0));
        assert!(close(snap_to_step(17.0, 0.0), 17.0));
    }

    #[test]
    fn pointer_offsets_map_to_clock_angles() {
        assert!(same_angle(angle_from_point(0.0, -10.0), 0.0));
        assert!(same_angle(angle_from_point(10.0, 0.0), 90.0));
        assert!(same_angle(angle_from_point(0.0, 10.0), 180.0));
        assert!(same_angle(angle_from_point(-10.0, 0.0), 270.0));
        assert!(same_angle(angle_from_point(10.0, -10.0), 45.0));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(angle in -1e6..1e6f64) {
            let once = normalize(angle);
            prop_assert!((0.0..360.0).contains(&once));
            prop_assert_eq!(normalize(once), once);
        }

        #[test]
        fn prop_shortest_delta_range(from in -1e4..1e4f64, to in -1e4..1e4f64) {
            let delta = shortest_delta(from, to);
            prop_assert!(delta > -180.0);
            prop_assert!(delta <= 180.0);
        }

        #[test]
        fn prop_interpolate_same_point(angle in 0.0..360.0f64, progress in 0.0..=1.0f64) {
            prop_assert_eq!(interpolate_forward_arc(angle, angle, progress), angle);
        }
    }
}
