//! Hour markers and the layouts they form.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::angle::normalize;
use crate::constants::{
    AM_RECORD, ANCHOR_DEGREES, DEFAULT_HOUR_SPACING_DEGREES, FULL_TURN_DEGREES, HOURS_ON_DIAL,
    MIN_GAP_DEGREES, PM_RECORD,
};
use crate::prelude::*;

/// One of the twelve marker positions. Hour 12 plays the role of zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// The fixed anchor at the top of the dial.
    pub const TWELVE: Hour = Hour(12);

    pub fn new(value: u8) -> Option<Hour> {
        (1..=HOURS_ON_DIAL as u8)
            .contains(&value)
            .then_some(Hour(value))
    }

    /// Maps a 24h (or 0-based 12h) clock hour onto the dial, midnight and noon become 12.
    pub fn from_clock_hour(hour: u8) -> Hour {
        match hour % HOURS_ON_DIAL as u8 {
            0 => Hour::TWELVE,
            h => Hour(h),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Hour {
        Hour::from_clock_hour(self.0 + 1)
    }

    pub fn previous(self) -> Hour {
        Hour::from_clock_hour(self.0 - 1)
    }

    pub fn is_anchor(self) -> bool {
        self == Hour::TWELVE
    }

    /// Position on an unwarped dial.
    pub fn default_angle(self) -> Degrees {
        f64::from(self.0) * DEFAULT_HOUR_SPACING_DEGREES
    }

    pub fn all() -> impl Iterator<Item = Hour> {
        (1..=HOURS_ON_DIAL as u8).map(Hour)
    }

    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Hour {
    type Error = ClockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Hour::new(value).ok_or(ClockError::InvalidHour(value))
    }
}

impl Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two layouts is being edited or shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockMode {
    Am,
    Pm,
}

impl ClockMode {
    /// Before noon is AM.
    pub fn from_time(time: OffsetDateTime) -> ClockMode {
        if time.hour() < 12 {
            ClockMode::Am
        } else {
            ClockMode::Pm
        }
    }

    pub fn toggled(self) -> ClockMode {
        match self {
            ClockMode::Am => ClockMode::Pm,
            ClockMode::Pm => ClockMode::Am,
        }
    }

    /// Name of the shared-storage record holding this mode's layout.
    pub fn record_name(self) -> &'static str {
        match self {
            ClockMode::Am => AM_RECORD,
            ClockMode::Pm => PM_RECORD,
        }
    }
}

impl Display for ClockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockMode::Am => write!(f, "AM"),
            ClockMode::Pm => write!(f, "PM"),
        }
    }
}

/// Angle of every hour marker.
///
/// All twelve entries always exist and hour 12 always sits on the anchor.
/// Serialized as `{"1": 30.0, ..., "12": 360.0}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PositionRecord", into = "PositionRecord")]
pub struct PositionSet {
    angles: [Degrees; HOURS_ON_DIAL],
}

impl Default for PositionSet {
    fn default() -> Self {
        PositionSet::even()
    }
}

impl PositionSet {
    /// Factory layout, hour `h` at `h * 30`.
    pub fn even() -> PositionSet {
        PositionSet {
            angles: std::array::from_fn(|index| (index + 1) as f64 * DEFAULT_HOUR_SPACING_DEGREES),
        }
    }

    /// Builds a layout from angles listed for hours 1 through 12.
    ///
    /// The last entry is ignored, hour 12 is always placed on the anchor.
    pub fn from_angles(angles: [Degrees; HOURS_ON_DIAL]) -> PositionSet {
        let mut positions = PositionSet { angles };
        positions.angles[Hour::TWELVE.index()] = ANCHOR_DEGREES;
        positions
    }

    pub fn angle(&self, hour: Hour) -> Degrees {
        self.angles[hour.index()]
    }

    /// Moves a single marker. Returns `false` and leaves the set untouched for the anchor.
    pub(crate) fn set(&mut self, hour: Hour, angle: Degrees) -> bool {
        if hour.is_anchor() {
            return false;
        }
        self.angles[hour.index()] = angle;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (Hour, Degrees)> + '_ {
        Hour::all().map(|hour| (hour, self.angle(hour)))
    }

    /// True when the markers run clockwise from 12 in hour order, each at
    /// least the minimum gap from its neighbours.
    pub fn respects_spacing(&self) -> bool {
        const EPSILON: f64 = 1e-9;
        let mut previous = normalize(self.angle(Hour::TWELVE));
        for hour in Hour::all().filter(|hour| !hour.is_anchor()) {
            let angle = normalize(self.angle(hour));
            if angle - previous < MIN_GAP_DEGREES - EPSILON {
                return false;
            }
            previous = angle;
        }
        FULL_TURN_DEGREES - previous >= MIN_GAP_DEGREES - EPSILON
    }

    pub fn to_json(&self) -> Result<Vec<u8>, ClockError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<PositionSet, ClockError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// On-disk shape of a [`PositionSet`].
///
/// Written as an hour-keyed object. Older records stored as a flat
/// `[key, value, key, value, ...]` array are still accepted on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum PositionRecord {
    // keys stay strings, untagged buffering can't parse them into integers
    Keyed(BTreeMap<String, f64>),
    Flat(Vec<f64>),
}

impl From<PositionSet> for PositionRecord {
    fn from(positions: PositionSet) -> Self {
        PositionRecord::Keyed(
            positions
                .iter()
                .map(|(hour, angle)| (hour.to_string(), angle))
                .collect(),
        )
    }
}

impl TryFrom<PositionRecord> for PositionSet {
    type Error = ClockError;

    fn try_from(record: PositionRecord) -> Result<Self, Self::Error> {
        let entries = match record {
            PositionRecord::Keyed(map) => {
                let mut entries = BTreeMap::new();
                for (key, angle) in map {
                    let hour = key
                        .trim()
                        .parse::<u8>()
                        .map_err(|_| ClockError::Decode(format!("invalid hour key {:?}", key)))?;
                    entries.insert(hour, angle);
                }
                entries
            }
            PositionRecord::Flat(values) => {
                if values.len() % 2 != 0 {
                    return Err(ClockError::Decode(format!(
                        "flat record has an odd number of values ({})",
                        values.len()
                    )));
                }
                let mut map = BTreeMap::new();
                for pair in values.chunks_exact(2) {
                    let key = pair[0];
                    if key.fract() != 0.0 || !(1.0..=HOURS_ON_DIAL as f64).contains(&key) {
                        return Err(ClockError::Decode(format!("invalid hour key {}", key)));
                    }
                    map.insert(key as u8, pair[1]);
                }
                map
            }
        };

        let mut angles = [0.0; HOURS_ON_DIAL];
        for hour in Hour::all() {
            let angle = entries
                .get(&hour.get())
                .copied()
                .ok_or_else(|| ClockError::Decode(format!("missing hour {}", hour)))?;
            if !angle.is_finite() {
                return Err(ClockError::Decode(format!(
                    "hour {} has a non-finite angle",
                    hour
                )));
            }
            angles[hour.index()] = angle;
        }
        if let Some(key) = entries.keys().find(|key| Hour::new(**key).is_none()) {
            return Err(ClockError::Decode(format!("invalid hour key {}", key)));
        }
        Ok(PositionSet::from_angles(angles))
    }
}
