//! Engine configuration.
//!
//! All rotation constants live in an explicit [`EngineConfig`] value that is
//! handed to the resolver at construction, so alternate anchors, offsets and
//! cycles can be exercised side by side.
//!
//! # Example
//!
//! ```
//! use u_roster::config::EngineConfig;
//! use chrono::NaiveDate;
//!
//! let config = EngineConfig::default()
//!     .with_fallback_anchor(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .with_fixed_group("F", 1);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.phase_offset(&"F".into()), Some(1));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Locale;
use crate::models::{DutyCode, GroupId};
use crate::validation::{validate_config, ValidationResult};

/// Length of the fixed rotation cycle, in days.
pub const CYCLE_LENGTH: usize = 8;

/// A fixed-rotation group and its phase offset into the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOffset {
    /// Group id.
    pub group: GroupId,
    /// Days added to the agent's cycle position.
    pub offset: u32,
}

/// Roster engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cycle zero point for agents without a recorded entry date.
    pub fallback_anchor: NaiveDate,
    /// Groups following the fixed cycle.
    pub fixed_groups: Vec<GroupOffset>,
    /// The group using rank/parity assignment instead of the cycle.
    pub irregular_group: Option<GroupId>,
    /// Duty code for each cycle slot.
    pub cycle: [DutyCode; CYCLE_LENGTH],
    /// The two operational codes alternated by the irregular group.
    pub irregular_codes: [DutyCode; 2],
    /// Language of weekday names in plannings.
    #[serde(default)]
    pub locale: Locale,
}

impl EngineConfig {
    /// Creates a configuration with no groups and the default cycle.
    pub fn new(fallback_anchor: NaiveDate) -> Self {
        Self {
            fallback_anchor,
            fixed_groups: Vec::new(),
            irregular_group: None,
            cycle: default_cycle(),
            irregular_codes: [DutyCode::Morning, DutyCode::Evening],
            locale: Locale::French,
        }
    }

    /// Sets the fallback anchor date.
    pub fn with_fallback_anchor(mut self, date: NaiveDate) -> Self {
        self.fallback_anchor = date;
        self
    }

    /// Adds (or replaces) a fixed-rotation group.
    pub fn with_fixed_group(mut self, group: impl Into<GroupId>, offset: u32) -> Self {
        let group = group.into();
        self.fixed_groups.retain(|g| g.group != group);
        self.fixed_groups.push(GroupOffset { group, offset });
        self
    }

    /// Sets the irregular group.
    pub fn with_irregular_group(mut self, group: impl Into<GroupId>) -> Self {
        self.irregular_group = Some(group.into());
        self
    }

    /// Sets the cycle pattern.
    pub fn with_cycle(mut self, cycle: [DutyCode; CYCLE_LENGTH]) -> Self {
        self.cycle = cycle;
        self
    }

    /// Sets the irregular group's two codes.
    pub fn with_irregular_codes(mut self, first: DutyCode, second: DutyCode) -> Self {
        self.irregular_codes = [first, second];
        self
    }

    /// Sets the weekday-name locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Phase offset of a fixed-rotation group.
    pub fn phase_offset(&self, group: &GroupId) -> Option<u32> {
        self.fixed_groups
            .iter()
            .find(|g| &g.group == group)
            .map(|g| g.offset)
    }

    /// Whether `group` follows the fixed cycle.
    pub fn is_fixed(&self, group: &GroupId) -> bool {
        self.phase_offset(group).is_some()
    }

    /// Whether `group` is the irregular group.
    pub fn is_irregular(&self, group: &GroupId) -> bool {
        self.irregular_group.as_ref() == Some(group)
    }

    /// Checks the configuration for inconsistencies.
    pub fn validate(&self) -> ValidationResult {
        validate_config(self)
    }
}

impl Default for EngineConfig {
    /// Groups A/B/C/D at offsets 0/2/4/6, irregular group E, anchor 2025-11-01.
    fn default() -> Self {
        let anchor = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap_or(NaiveDate::MIN);
        Self::new(anchor)
            .with_fixed_group("A", 0)
            .with_fixed_group("B", 2)
            .with_fixed_group("C", 4)
            .with_fixed_group("D", 6)
            .with_irregular_group("E")
    }
}

/// Two mornings, two evenings, two nights, two rest days.
fn default_cycle() -> [DutyCode; CYCLE_LENGTH] {
    [
        DutyCode::Morning,
        DutyCode::Morning,
        DutyCode::Evening,
        DutyCode::Evening,
        DutyCode::Night,
        DutyCode::Night,
        DutyCode::Rest,
        DutyCode::Rest,
    ]
}
