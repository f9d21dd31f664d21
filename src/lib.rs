#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::panic))]

//! Analog clock engine for dials whose hour markers sit wherever the user
//! drags them. Hands sweep between neighbouring markers instead of turning
//! at a constant rate, so squeezed hours pass quickly and stretched ones drag.

#[cfg(feature = "cli")]
pub mod cli;

pub mod angle;
pub mod clock;
pub mod constants;
pub mod constraint;
pub mod editor;
pub mod error;
pub mod positions;
pub mod prelude;
pub mod presets;
pub mod store;

use time::OffsetDateTime;

/// Local wall-clock time, or UTC when the local offset can't be determined.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|err| {
        log::warn!("Could not determine local offset, using UTC: {}", err);
        OffsetDateTime::now_utc()
    })
}
