//! Fixed 8-day rotation.
//!
//! Each fixed-rotation group walks the same cycle, shifted by its phase
//! offset. With the default offsets 0/2/4/6 the four groups are staggered
//! two days apart, so every shift is covered by some group each day.
//!
//! ```text
//! slot:   0  1  2  3  4  5  6  7
//! code:   M  M  S  S  N  N  R  R
//! ```

use crate::config::CYCLE_LENGTH;
use crate::models::DutyCode;

/// Maps cycle positions to duty codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicRotation {
    cycle: [DutyCode; CYCLE_LENGTH],
}

impl CyclicRotation {
    /// Creates a rotation over the given cycle.
    pub fn new(cycle: [DutyCode; CYCLE_LENGTH]) -> Self {
        Self { cycle }
    }

    /// Cycle slot for a day, given days since the agent's effective entry.
    ///
    /// Uses Euclidean remainder so the slot stays in `0..CYCLE_LENGTH`
    /// even for negative day counts.
    #[inline]
    pub fn slot(days_since_entry: i64, offset: u32) -> usize {
        (days_since_entry + i64::from(offset)).rem_euclid(CYCLE_LENGTH as i64) as usize
    }

    /// Duty code for a day.
    #[inline]
    pub fn duty(&self, days_since_entry: i64, offset: u32) -> DutyCode {
        self.cycle[Self::slot(days_since_entry, offset)]
    }

    /// The underlying cycle.
    pub fn cycle(&self) -> &[DutyCode; CYCLE_LENGTH] {
        &self.cycle
    }
}
