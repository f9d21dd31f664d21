pub use crate::error::ClockError;
pub use crate::local_now;
pub use crate::positions::{ClockMode, Hour, PositionSet};

pub use log::*;

/// Clockwise from 12 o'clock.
pub type Degrees = f64;
