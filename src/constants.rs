/// Degrees in a full turn of the dial.
pub const FULL_TURN_DEGREES: f64 = 360.0;
pub const HALF_TURN_DEGREES: f64 = 180.0;

/// Number of hour markers on the dial.
pub const HOURS_ON_DIAL: usize = 12;

/// Spacing of the unwarped, factory layout.
pub const DEFAULT_HOUR_SPACING_DEGREES: f64 = 30.0;

/// Hour 12 never moves. It is stored as 360 and treated as 0 in all comparisons.
pub const ANCHOR_DEGREES: f64 = 360.0;

/// Smallest gap allowed between two neighbouring hour markers.
pub const MIN_GAP_DEGREES: f64 = 12.0;

/// Drag input is quantised to one minute marker.
pub const SNAP_STEP_DEGREES: f64 = 6.0;

/// Minute ticks drawn between two neighbouring hour markers.
pub const TICKS_PER_ARC: usize = 4;
pub const MINUTE_TICK_COUNT: usize = HOURS_ON_DIAL * TICKS_PER_ARC;

/// The minute hand visits one hour marker every five minutes.
pub const MINUTES_PER_MARKER: u8 = 5;

pub const AM_RECORD: &str = "AMClockPositions";
pub const PM_RECORD: &str = "PMClockPositions";

pub const STORE_ENV: &str = "WARP_CLOCK_STORE";
pub const DEFAULT_STORE_DIR: &str = ".warp-clock";
