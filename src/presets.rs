//! Preset layouts shown while introducing the warped clock, and the morph
//! used to animate from one to the next.

use crate::constants::HOURS_ON_DIAL;
use crate::prelude::*;

pub const PRESET_COUNT: usize = 4;

const PRESET_ANGLES: [[Degrees; HOURS_ON_DIAL]; PRESET_COUNT] = [
    // even
    [
        30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 360.0,
    ],
    // a night's sleep flies by
    [
        12.0, 24.0, 36.0, 48.0, 60.0, 72.0, 84.0, 120.0, 180.0, 240.0, 300.0, 360.0,
    ],
    // and a morning meeting drags
    [
        12.0, 24.0, 36.0, 48.0, 60.0, 72.0, 84.0, 120.0, 150.0, 300.0, 330.0, 360.0,
    ],
    // back to even, ready for the user's own layout
    [
        30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 360.0,
    ],
];

/// The preset for `page`, pages past the end repeat the last preset.
pub fn preset(page: usize) -> PositionSet {
    PositionSet::from_angles(PRESET_ANGLES[page.min(PRESET_COUNT - 1)])
}

/// Blends the presets either side of a fractional page index.
///
/// `morph(1.0)` is exactly preset 1 and `morph(1.5)` is halfway to preset 2.
/// Each marker moves in a straight line between its two angles.
pub fn morph(page: f64) -> PositionSet {
    let last = (PRESET_COUNT - 1) as f64;
    let page = if page.is_finite() {
        page.clamp(0.0, last)
    } else {
        0.0
    };
    let from = preset(page.floor() as usize);
    let to = preset(page.ceil() as usize);
    let t = page - page.floor();

    let mut angles = [0.0; HOURS_ON_DIAL];
    for (slot, hour) in angles.iter_mut().zip(Hour::all()) {
        let start = from.angle(hour);
        *slot = start + (to.angle(hour) - start) * t;
    }
    PositionSet::from_angles(angles)
}
