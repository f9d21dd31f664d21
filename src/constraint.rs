//! Keeps dragged hour markers from crossing or crowding their neighbours.

use crate::angle::normalize;
use crate::constants::{ANCHOR_DEGREES, FULL_TURN_DEGREES, HALF_TURN_DEGREES, MIN_GAP_DEGREES};
use crate::prelude::*;

/// Clamps a proposed angle for `hour` so it stays at least [`MIN_GAP_DEGREES`]
/// clockwise of `previous` and counter-clockwise of `next`.
///
/// Never rejects an edit: a violated bound pins the result to that bound, and
/// when the bounds cross the lower one wins. Hours 1 and 11 sit next to the
/// 0/360 seam and get their own bounds. The anchor always stays put.
pub fn constrain(hour: Hour, previous: Degrees, next: Degrees, proposed: Degrees) -> Degrees {
    if hour.is_anchor() {
        return normalize(ANCHOR_DEGREES);
    }

    let proposed = normalize(proposed);
    let previous = normalize(previous);
    let next = normalize(next);

    let (lower, upper) = match hour.get() {
        1 => {
            let mut lower = previous + MIN_GAP_DEGREES;
            if previous > HALF_TURN_DEGREES && lower >= FULL_TURN_DEGREES {
                lower -= FULL_TURN_DEGREES;
            }
            (lower, next - MIN_GAP_DEGREES)
        }
        11 => {
            let upper = if next < HALF_TURN_DEGREES {
                FULL_TURN_DEGREES - MIN_GAP_DEGREES
            } else {
                next - MIN_GAP_DEGREES
            };
            (previous + MIN_GAP_DEGREES, upper)
        }
        _ => (previous + MIN_GAP_DEGREES, next - MIN_GAP_DEGREES),
    };

    let clamped = proposed.min(upper).max(lower);
    if clamped != proposed {
        trace!(
            "hour {} pinned from {} to {} (bounds {}..={})",
            hour, proposed, clamped, lower, upper
        );
    }
    normalize(clamped)
}

/// [`constrain`] against the neighbours recorded in `positions`.
pub fn constrain_in(positions: &PositionSet, hour: Hour, proposed: Degrees) -> Degrees {
    constrain(
        hour,
        positions.angle(hour.previous()),
        positions.angle(hour.next()),
        proposed,
    )
}
