//! Warped hand and tick angles.
//!
//! Hands don't move at a constant 30°/h. They sweep between the user-placed
//! hour markers, so a marker that has been squeezed close to its neighbour
//! makes that stretch of time pass quickly.

use time::OffsetDateTime;

use crate::angle::{interpolate_forward_arc, normalize};
use crate::constants::{HOURS_ON_DIAL, MINUTE_TICK_COUNT, MINUTES_PER_MARKER, TICKS_PER_ARC};
use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    pub hour: Degrees,
    pub minute: Degrees,
}

impl HandAngles {
    pub fn to_radians(self) -> HandAngles {
        HandAngles {
            hour: self.hour.to_radians(),
            minute: self.minute.to_radians(),
        }
    }

    pub fn normalize_degrees(self) -> HandAngles {
        HandAngles {
            hour: normalize(self.hour),
            minute: normalize(self.minute),
        }
    }
}

/// An hour marker with its angle normalized into `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub hour: Hour,
    pub angle: Degrees,
}

/// All twelve markers in clockwise order starting from 0°.
///
/// Sorting is stable, so markers sharing an angle keep hour order.
pub fn sorted_by_angle(positions: &PositionSet) -> [Marker; HOURS_ON_DIAL] {
    let mut markers = [Marker {
        hour: Hour::TWELVE,
        angle: 0.0,
    }; HOURS_ON_DIAL];
    for (slot, (hour, angle)) in markers.iter_mut().zip(positions.iter()) {
        *slot = Marker {
            hour,
            angle: normalize(angle),
        };
    }
    markers.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    markers
}

/// Interpolates from `hour`'s marker towards the next marker clockwise.
fn sweep_from(sorted: &[Marker; HOURS_ON_DIAL], hour: Hour, progress: f64) -> Option<Degrees> {
    let index = sorted.iter().position(|marker| marker.hour == hour)?;
    let current = sorted[index];
    let next = sorted[(index + 1) % sorted.len()];
    Some(interpolate_forward_arc(current.angle, next.angle, progress))
}

/// Hour hand: sits on the current hour's marker on the hour and reaches the
/// next marker on the next hour.
pub fn hour_hand_angle(positions: &PositionSet, time: OffsetDateTime) -> Degrees {
    let hour = Hour::from_clock_hour(time.hour());
    let progress = f64::from(time.minute()) / 60.0;
    sweep_from(&sorted_by_angle(positions), hour, progress).unwrap_or_else(|| {
        warn!("hour {} missing from sorted markers, using unwarped angle", hour);
        normalize(hour.default_angle())
    })
}

/// Minute hand: its twelve stops are the hour markers themselves, one every
/// five minutes, so it pauses and hurries along with the layout.
pub fn minute_hand_angle(positions: &PositionSet, time: OffsetDateTime) -> Degrees {
    let minute = time.minute();
    let slot = Hour::from_clock_hour(minute / MINUTES_PER_MARKER);
    let progress = f64::from(minute % MINUTES_PER_MARKER) / f64::from(MINUTES_PER_MARKER);
    sweep_from(&sorted_by_angle(positions), slot, progress).unwrap_or_else(|| {
        warn!("hour {} missing from sorted markers, using unwarped angle", slot);
        normalize(f64::from(minute) * 6.0)
    })
}

pub fn hand_angles(positions: &PositionSet, time: OffsetDateTime) -> HandAngles {
    HandAngles {
        hour: hour_hand_angle(positions, time),
        minute: minute_hand_angle(positions, time),
    }
    .normalize_degrees()
}

pub fn hand_angles_radians(positions: &PositionSet, time: OffsetDateTime) -> HandAngles {
    hand_angles(positions, time).to_radians()
}

/// Four ticks splitting each marker-to-marker arc into fifths.
///
/// Grouped by arc in clockwise order, though renderers shouldn't rely on it.
pub fn minute_marker_angles(positions: &PositionSet) -> [Degrees; MINUTE_TICK_COUNT] {
    let sorted = sorted_by_angle(positions);
    let mut ticks = [0.0; MINUTE_TICK_COUNT];
    let steps = (TICKS_PER_ARC + 1) as f64;
    for (index, current) in sorted.iter().enumerate() {
        let next = sorted[(index + 1) % sorted.len()];
        for tick in 0..TICKS_PER_ARC {
            let progress = (tick + 1) as f64 / steps;
            ticks[index * TICKS_PER_ARC + tick] =
                interpolate_forward_arc(current.angle, next.angle, progress);
        }
    }
    ticks
}

/// An hour marker as a renderer places it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerGlyph {
    pub hour: Hour,
    /// Rotation of the marker around the dial centre.
    pub angle: Degrees,
    /// Counter-rotation that keeps the hour number upright.
    pub glyph_rotation: Degrees,
}

/// Everything needed to draw one frame of the dial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockFace {
    pub hands: HandAngles,
    pub ticks: [Degrees; MINUTE_TICK_COUNT],
    pub markers: [MarkerGlyph; HOURS_ON_DIAL],
}

impl ClockFace {
    pub fn compose(positions: &PositionSet, time: OffsetDateTime) -> ClockFace {
        let mut markers = [MarkerGlyph {
            hour: Hour::TWELVE,
            angle: 0.0,
            glyph_rotation: 0.0,
        }; HOURS_ON_DIAL];
        for (slot, (hour, angle)) in markers.iter_mut().zip(positions.iter()) {
            *slot = MarkerGlyph {
                hour,
                angle,
                glyph_rotation: -angle,
            };
        }
        ClockFace {
            hands: hand_angles(positions, time),
            ticks: minute_marker_angles(positions),
            markers,
        }
    }
}
