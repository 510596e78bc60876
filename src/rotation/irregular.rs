//! Irregular-group rotation.
//!
//! The irregular group works weekdays only, alternating between two
//! operational codes. Members are ranked by code (ascending); the rank
//! selects a [`RankRule`], and the rule combines ISO week parity with
//! weekday parity to pick the code.
//!
//! # Rules
//!
//! With `week_odd = iso_week % 2 == 1` and `day_odd = weekday % 2 == 1`
//! (Monday = 1):
//!
//! | Rank | Rule | First code when |
//! |------|------|-----------------|
//! | 0 | `Senior` | `week_odd == day_odd` |
//! | 1 | `Mirror` | `week_odd != day_odd` |
//! | r >= 2 | `Alternating` | `(r + iso_week) % 2 == 0` |
//!
//! Ranks 0 and 1 are mirror images, so the two senior members always
//! hold opposite shifts on the same day.

use chrono::NaiveDate;

use crate::calendar::{is_weekend, iso_week, weekday_index};
use crate::models::{AgentCode, DutyCode};

/// Assignment rule selected by an agent's rank in the irregular group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankRule {
    /// Rank 0.
    Senior,
    /// Rank 1: always the opposite of `Senior`.
    Mirror,
    /// Rank 2 and above.
    Alternating {
        /// Zero-based rank.
        rank: usize,
    },
}

impl RankRule {
    /// Rule for a zero-based rank.
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0 => RankRule::Senior,
            1 => RankRule::Mirror,
            rank => RankRule::Alternating { rank },
        }
    }

    /// Whether the rule picks the first code for the given week and weekday.
    pub fn takes_first(self, week: u32, weekday: u32) -> bool {
        let week_odd = week % 2 == 1;
        let day_odd = weekday % 2 == 1;
        match self {
            RankRule::Senior => week_odd == day_odd,
            RankRule::Mirror => week_odd != day_odd,
            RankRule::Alternating { rank } => (rank as u64 + u64::from(week)) % 2 == 0,
        }
    }

    /// Picks one of the two codes for a week and weekday.
    pub fn assign(self, week: u32, weekday: u32, codes: [DutyCode; 2]) -> DutyCode {
        if self.takes_first(week, weekday) {
            codes[0]
        } else {
            codes[1]
        }
    }
}

/// Snapshot of the irregular group's membership, ranked by code.
///
/// Build it once per batch and reuse it for every day; ranking is
/// O(group size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularRoster {
    members: Vec<AgentCode>,
    codes: [DutyCode; 2],
}

impl IrregularRoster {
    /// Ranks the given members (active or not) by ascending code.
    pub fn new(members: impl IntoIterator<Item = AgentCode>, codes: [DutyCode; 2]) -> Self {
        let mut members: Vec<AgentCode> = members.into_iter().collect();
        members.sort();
        members.dedup();
        Self { members, codes }
    }

    /// Zero-based rank of an agent.
    pub fn rank(&self, agent: &AgentCode) -> Option<usize> {
        self.members.binary_search(agent).ok()
    }

    /// Number of ranked members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Duty code for an agent on a date.
    ///
    /// Weekends and agents missing from the roster resolve to rest.
    pub fn resolve(&self, date: NaiveDate, agent: &AgentCode) -> DutyCode {
        if is_weekend(date) {
            return DutyCode::Rest;
        }
        let Some(rank) = self.rank(agent) else {
            return DutyCode::Rest;
        };
        RankRule::for_rank(rank).assign(iso_week(date), weekday_index(date), self.codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: [DutyCode; 2] = [DutyCode::Morning, DutyCode::Evening];

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn roster() -> IrregularRoster {
        IrregularRoster::new(
            ["E03", "E01", "E04", "E02"].into_iter().map(AgentCode::new),
            CODES,
        )
    }

    #[test]
    fn test_rank_rule_selection() {
        assert_eq!(RankRule::for_rank(0), RankRule::Senior);
        assert_eq!(RankRule::for_rank(1), RankRule::Mirror);
        assert_eq!(RankRule::for_rank(5), RankRule::Alternating { rank: 5 });
    }

    #[test]
    fn test_ranking_is_lexicographic() {
        let r = roster();
        assert_eq!(r.rank(&AgentCode::new("E01")), Some(0));
        assert_eq!(r.rank(&AgentCode::new("e02")), Some(1));
        assert_eq!(r.rank(&AgentCode::new("E04")), Some(3));
        assert_eq!(r.rank(&AgentCode::new("X99")), None);
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn test_senior_odd_week_odd_day() {
        // 2025-11-03: Monday (weekday 1) of ISO week 45 (odd).
        let monday = d(2025, 11, 3);
        let r = roster();
        assert_eq!(r.resolve(monday, &AgentCode::new("E01")), DutyCode::Morning);
        assert_eq!(r.resolve(monday, &AgentCode::new("E02")), DutyCode::Evening);
    }

    #[test]
    fn test_senior_flips_with_week_parity() {
        // 2025-11-10: Monday of ISO week 46 (even).
        let monday = d(2025, 11, 10);
        let r = roster();
        assert_eq!(r.resolve(monday, &AgentCode::new("E01")), DutyCode::Evening);
        assert_eq!(r.resolve(monday, &AgentCode::new("E02")), DutyCode::Morning);
    }

    #[test]
    fn test_seniors_always_opposite() {
        let r = roster();
        let (e01, e02) = (AgentCode::new("E01"), AgentCode::new("E02"));
        for date in crate::calendar::date_range(d(2025, 1, 1), d(2026, 12, 31)) {
            if is_weekend(date) {
                continue;
            }
            assert_ne!(r.resolve(date, &e01), r.resolve(date, &e02), "{date}");
        }
    }

    #[test]
    fn test_alternating_ranks() {
        let r = roster();
        // Week 45: rank 2 -> (2 + 45) odd -> second; rank 3 -> even -> first.
        let tuesday = d(2025, 11, 4);
        assert_eq!(r.resolve(tuesday, &AgentCode::new("E03")), DutyCode::Evening);
        assert_eq!(r.resolve(tuesday, &AgentCode::new("E04")), DutyCode::Morning);
        // Constant across the week.
        let friday = d(2025, 11, 7);
        assert_eq!(r.resolve(friday, &AgentCode::new("E03")), DutyCode::Evening);
    }

    #[test]
    fn test_weekend_and_unknown_rest() {
        let r = roster();
        assert_eq!(r.resolve(d(2025, 11, 8), &AgentCode::new("E01")), DutyCode::Rest);
        assert_eq!(r.resolve(d(2025, 11, 9), &AgentCode::new("E02")), DutyCode::Rest);
        assert_eq!(r.resolve(d(2025, 11, 3), &AgentCode::new("Z01")), DutyCode::Rest);
    }

    #[test]
    fn test_single_member_group() {
        let r = IrregularRoster::new([AgentCode::new("E01")], CODES);
        assert_eq!(r.resolve(d(2025, 11, 3), &AgentCode::new("E01")), DutyCode::Morning);

        let empty = IrregularRoster::new(Vec::new(), CODES);
        assert!(empty.is_empty());
        assert_eq!(empty.resolve(d(2025, 11, 3), &AgentCode::new("E01")), DutyCode::Rest);
    }

    #[test]
    fn test_five_of_seven() {
        let r = roster();
        let agent = AgentCode::new("E03");
        let worked = crate::calendar::date_range(d(2025, 11, 3), d(2025, 11, 9))
            .filter(|&day| r.resolve(day, &agent).is_operational())
            .count();
        assert_eq!(worked, 5);
    }
}
