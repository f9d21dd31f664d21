use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::constants::{DEFAULT_STORE_DIR, STORE_ENV};
use crate::prelude::*;

#[derive(Parser, Debug)]
#[clap(version, about = "Analog clock with hour markers you can move")]
pub struct Cli {
    #[clap(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Directory shared by the editor and any viewers.
    #[clap(long, global = true, env = STORE_ENV, default_value = DEFAULT_STORE_DIR)]
    pub store: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print hand, tick and marker angles.
    Show {
        /// Display time as HH:MM, defaults to now.
        #[clap(long)]
        at: Option<String>,
        /// Layout to use instead of the one matching the display time.
        #[clap(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Move an hour marker to an angle, keeping it clear of its neighbours.
    Set {
        hour: u8,
        #[clap(allow_negative_numbers = true)]
        degrees: f64,
        #[clap(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Move an hour marker towards a pointer offset from the dial centre.
    Drag {
        hour: u8,
        #[clap(allow_negative_numbers = true)]
        dx: f64,
        /// Grows downwards, like screen coordinates.
        #[clap(allow_negative_numbers = true)]
        dy: f64,
        #[clap(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Print a stored layout as JSON.
    Positions {
        #[clap(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Show a blend of the introductory preset layouts.
    Preview {
        /// Fractional page, 0 to 3.
        page: f64,
        #[clap(long, default_value = "12:19")]
        at: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Am,
    Pm,
}

impl From<ModeArg> for ClockMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Am => ClockMode::Am,
            ModeArg::Pm => ClockMode::Pm,
        }
    }
}

/// Applies an `HH:MM` wall-clock time to `today`'s date and offset.
pub fn parse_display_time(value: &str, today: OffsetDateTime) -> Result<OffsetDateTime, ClockError> {
    let format = format_description!("[hour]:[minute]");
    let time = time::Time::parse(value, &format)
        .map_err(|err| ClockError::InvalidTime(format!("{value:?}: {err}")))?;
    Ok(today.replace_time(time))
}
