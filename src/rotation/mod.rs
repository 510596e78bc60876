//! Rotation strategies.
//!
//! Two strategies turn an eligible (agent, date) pair into a duty code:
//!
//! - **Cyclic**: fixed 8-day cycle shifted by a per-group phase offset.
//! - **Irregular**: weekday-only two-shift pattern driven by rank within
//!   the group and ISO week parity.
//!
//! [`Rotation::for_group`] picks the strategy from the engine
//! configuration. Groups the configuration does not know resolve to rest.

mod cyclic;
mod irregular;

pub use cyclic::CyclicRotation;
pub use irregular::{IrregularRoster, RankRule};

use crate::config::EngineConfig;
use crate::models::GroupId;

/// Strategy applying to a duty group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Fixed cycle with the group's phase offset.
    Cyclic {
        /// Phase offset in days.
        offset: u32,
    },
    /// Rank and parity based assignment.
    Irregular,
    /// Group not declared in the configuration.
    Unrecognized,
}

impl Rotation {
    /// Strategy for a group.
    ///
    /// The irregular declaration wins if a group is (mis)configured as both.
    pub fn for_group(config: &EngineConfig, group: &GroupId) -> Self {
        if config.is_irregular(group) {
            return Rotation::Irregular;
        }
        match config.phase_offset(group) {
            Some(offset) => Rotation::Cyclic { offset },
            None => Rotation::Unrecognized,
        }
    }

    /// Whether holiday shifts earn the statistics bonus.
    ///
    /// Only fixed-rotation groups receive it.
    #[inline]
    pub fn earns_holiday_bonus(self) -> bool {
        matches!(self, Rotation::Cyclic { .. })
    }
}
