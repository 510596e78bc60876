//! Duty code model.
//!
//! A duty code is the single-character classification of an agent's day.
//! Exactly one code exists per (agent, date).
//!
//! | Code | Meaning |
//! |------|---------|
//! | `M` | Morning shift (first operational) |
//! | `S` | Evening shift (second operational) |
//! | `N` | Night shift (third operational) |
//! | `R` | Rest |
//! | `C` | Leave |
//! | `K` | Sick |
//! | `A` | Generic absence |
//! | `-` | Unassigned (outside tenure) |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Duty classification of one agent on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum DutyCode {
    /// First operational shift.
    Morning,
    /// Second operational shift.
    Evening,
    /// Third operational shift.
    Night,
    /// Scheduled rest.
    Rest,
    /// Leave day.
    Leave,
    /// Sick day.
    Sick,
    /// Absence of any other kind.
    Absence,
    /// No assignment: the agent is inactive or outside the tenure window.
    Unassigned,
}

/// A character that is not a known duty code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown duty code: '{0}'")]
pub struct UnknownDutyCode(pub char);

impl DutyCode {
    /// All codes, operational first.
    pub const ALL: [DutyCode; 8] = [
        DutyCode::Morning,
        DutyCode::Evening,
        DutyCode::Night,
        DutyCode::Rest,
        DutyCode::Leave,
        DutyCode::Sick,
        DutyCode::Absence,
        DutyCode::Unassigned,
    ];

    /// The three working shift codes.
    pub const OPERATIONAL: [DutyCode; 3] = [DutyCode::Morning, DutyCode::Evening, DutyCode::Night];

    /// Single-character representation.
    pub fn as_char(self) -> char {
        match self {
            DutyCode::Morning => 'M',
            DutyCode::Evening => 'S',
            DutyCode::Night => 'N',
            DutyCode::Rest => 'R',
            DutyCode::Leave => 'C',
            DutyCode::Sick => 'K',
            DutyCode::Absence => 'A',
            DutyCode::Unassigned => '-',
        }
    }

    /// Parses a code character (case-insensitive).
    pub fn from_char(c: char) -> Result<Self, UnknownDutyCode> {
        match c.to_ascii_uppercase() {
            'M' => Ok(DutyCode::Morning),
            'S' => Ok(DutyCode::Evening),
            'N' => Ok(DutyCode::Night),
            'R' => Ok(DutyCode::Rest),
            'C' => Ok(DutyCode::Leave),
            'K' => Ok(DutyCode::Sick),
            'A' => Ok(DutyCode::Absence),
            '-' => Ok(DutyCode::Unassigned),
            _ => Err(UnknownDutyCode(c)),
        }
    }

    /// Whether this is one of the three working shift codes.
    #[inline]
    pub fn is_operational(self) -> bool {
        matches!(self, DutyCode::Morning | DutyCode::Evening | DutyCode::Night)
    }
}

impl fmt::Display for DutyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for DutyCode {
    type Err = UnknownDutyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => DutyCode::from_char(c),
            (Some(c), Some(_)) => Err(UnknownDutyCode(c)),
            (None, _) => Err(UnknownDutyCode(' ')),
        }
    }
}

impl TryFrom<char> for DutyCode {
    type Error = UnknownDutyCode;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        DutyCode::from_char(c)
    }
}

impl From<DutyCode> for char {
    fn from(code: DutyCode) -> char {
        code.as_char()
    }
}

/// Where a persisted shift record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftOrigin {
    /// Computed by the rotation engine.
    Theoretical,
    /// Entered or corrected by a person.
    Manual,
}

/// Counts per duty code.
///
/// Every code is present, so `total()` equals the number of tallied days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyTally {
    counts: BTreeMap<DutyCode, u32>,
}

impl DutyTally {
    /// Creates a tally with every code at zero.
    pub fn new() -> Self {
        Self {
            counts: DutyCode::ALL.iter().map(|&c| (c, 0)).collect(),
        }
    }

    /// Tallies a sequence of codes.
    pub fn from_codes(codes: impl IntoIterator<Item = DutyCode>) -> Self {
        let mut tally = Self::new();
        for code in codes {
            tally.add(code);
        }
        tally
    }

    /// Counts one more day with `code`.
    pub fn add(&mut self, code: DutyCode) {
        *self.counts.entry(code).or_insert(0) += 1;
    }

    /// Adds every count of `other` into this tally.
    pub fn merge(&mut self, other: &DutyTally) {
        for (&code, &n) in &other.counts {
            *self.counts.entry(code).or_insert(0) += n;
        }
    }

    /// Count for one code.
    pub fn get(&self, code: DutyCode) -> u32 {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    /// Sum over all codes.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Sum over the operational codes.
    pub fn worked(&self) -> u32 {
        DutyCode::OPERATIONAL.iter().map(|&c| self.get(c)).sum()
    }

    /// Iterates `(code, count)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (DutyCode, u32)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

impl Default for DutyTally {
    fn default() -> Self {
        Self::new()
    }
}
