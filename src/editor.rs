//! Turns pointer drags on the dial into stored marker positions.

use crate::angle::{angle_from_point, snap_to_step};
use crate::constants::SNAP_STEP_DEGREES;
use crate::constraint::constrain_in;
use crate::prelude::*;
use crate::store::{PositionBackend, PositionStore};

/// Drag handler for the layout of the store's current mode.
pub struct Editor<'a, B> {
    store: &'a mut PositionStore<B>,
}

impl<'a, B: PositionBackend> Editor<'a, B> {
    pub fn new(store: &'a mut PositionStore<B>) -> Editor<'a, B> {
        Editor { store }
    }

    pub fn mode(&self) -> ClockMode {
        self.store.current_mode()
    }

    pub fn toggle_mode(&mut self) -> ClockMode {
        let mode = self.store.toggle_mode();
        debug!("Now editing {} positions", mode);
        mode
    }

    pub fn positions(&self) -> PositionSet {
        self.store.editing_positions()
    }

    /// Snaps `raw_angle` to a minute marker, keeps it clear of the
    /// neighbouring hours and stores it. Returns the angle that was applied.
    ///
    /// The anchor can't be dragged and reports where it already is.
    pub fn propose(&mut self, hour: Hour, raw_angle: Degrees) -> Result<Degrees, ClockError> {
        let positions = self.store.editing_positions();
        if hour.is_anchor() {
            return Ok(positions.angle(hour));
        }
        let snapped = snap_to_step(raw_angle, SNAP_STEP_DEGREES);
        let applied = constrain_in(&positions, hour, snapped);
        debug!(
            "hour {}: raw {:.2} snapped {} applied {}",
            hour, raw_angle, snapped, applied
        );
        let mode = self.store.current_mode();
        self.store.set(mode, hour, applied)?;
        Ok(applied)
    }

    /// [`Editor::propose`] for a pointer at (`dx`, `dy`) from the dial centre,
    /// `dy` growing downwards.
    pub fn drag(&mut self, hour: Hour, dx: f64, dy: f64) -> Result<Degrees, ClockError> {
        self.propose(hour, angle_from_point(dx, dy))
    }
}
