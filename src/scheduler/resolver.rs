//! Daily shift resolution.
//!
//! # Algorithm
//!
//! 1. Eligibility gate: inactive agents, dates on/after the exit date and
//!    dates before the effective entry date resolve to `Unassigned`.
//! 2. Dispatch on the group's [`Rotation`]:
//!    - `Cyclic`: `slot = (days since effective entry + offset) mod 8`.
//!    - `Irregular`: rank/parity rule over the group's membership.
//!    - `Unrecognized`: rest.
//!
//! Lookup failures never propagate out of this module; they degrade to
//! `Unassigned` so display and export paths keep working.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, instrument, warn};

use crate::calendar::days_between;
use crate::config::EngineConfig;
use crate::error::DependencyError;
use crate::models::{Agent, AgentCode, DutyCode};
use crate::providers::{AgentDirectory, HolidayCalendar, ShiftStore};
use crate::rotation::{CyclicRotation, IrregularRoster, Rotation};

/// The roster engine.
///
/// Holds the configuration and the three collaborators. Stateless between
/// calls and cheap to clone; every operation recomputes from the
/// collaborators' current data.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use u_roster::config::EngineConfig;
/// use u_roster::models::{Agent, DutyCode};
/// use u_roster::providers::{HolidaySet, MemoryDirectory, MemoryShiftStore};
/// use u_roster::scheduler::ShiftResolver;
///
/// let entry = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
/// let agent = Agent::new("A01", "A").with_entry_date(entry);
/// let resolver = ShiftResolver::new(
///     EngineConfig::default(),
///     Arc::new(MemoryDirectory::new(vec![agent.clone()])),
///     Arc::new(HolidaySet::new()),
///     Arc::new(MemoryShiftStore::new()),
/// );
///
/// let duty = futures::executor::block_on(resolver.resolve_shift(Some(&agent), entry));
/// assert_eq!(duty, DutyCode::Morning);
/// ```
#[derive(Clone)]
pub struct ShiftResolver {
    pub(crate) config: EngineConfig,
    pub(crate) rotation: CyclicRotation,
    pub(crate) directory: Arc<dyn AgentDirectory>,
    pub(crate) holidays: Arc<dyn HolidayCalendar>,
    pub(crate) store: Arc<dyn ShiftStore>,
}

impl ShiftResolver {
    /// Creates a resolver.
    pub fn new(
        config: EngineConfig,
        directory: Arc<dyn AgentDirectory>,
        holidays: Arc<dyn HolidayCalendar>,
        store: Arc<dyn ShiftStore>,
    ) -> Self {
        let rotation = CyclicRotation::new(config.cycle);
        Self {
            config,
            rotation,
            directory,
            holidays,
            store,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Duty code of `agent` on `date`.
    ///
    /// A missing agent resolves to `Unassigned`. For irregular-group agents
    /// the group membership is fetched; if that fails the result is
    /// `Unassigned`.
    #[instrument(level = "debug", skip(self, agent))]
    pub async fn resolve_shift(&self, agent: Option<&Agent>, date: NaiveDate) -> DutyCode {
        let Some(agent) = agent else {
            return DutyCode::Unassigned;
        };
        if !self.is_eligible(agent, date) {
            return DutyCode::Unassigned;
        }

        let roster = match self.roster_for(agent).await {
            Ok(roster) => roster,
            Err(e) => {
                warn!(agent = %agent.code, error = %e, "irregular roster lookup failed");
                return DutyCode::Unassigned;
            }
        };
        self.resolve_with(Some(agent), date, roster.as_ref())
    }

    /// Duty code for an agent code on `date`.
    ///
    /// Unknown codes and directory failures resolve to `Unassigned`.
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve_shift_for(&self, code: &str, date: NaiveDate) -> DutyCode {
        match self.directory.get_agent(&AgentCode::new(code)).await {
            Ok(agent) => self.resolve_shift(agent.as_ref(), date).await,
            Err(e) => {
                warn!(error = %e, "agent lookup failed");
                DutyCode::Unassigned
            }
        }
    }

    /// Irregular-group duty code for an agent code on `date`.
    ///
    /// Weekends are rest without touching the directory. Codes that are not
    /// in the irregular group (or no irregular group configured) are rest.
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve_irregular(&self, date: NaiveDate, code: &str) -> DutyCode {
        if crate::calendar::is_weekend(date) {
            return DutyCode::Rest;
        }
        match self.irregular_roster().await {
            Ok(Some(roster)) => roster.resolve(date, &AgentCode::new(code)),
            Ok(None) => DutyCode::Rest,
            Err(e) => {
                warn!(error = %e, "irregular roster lookup failed");
                DutyCode::Unassigned
            }
        }
    }

    /// Whether the agent is active and `date` falls inside the tenure window.
    pub fn is_eligible(&self, agent: &Agent, date: NaiveDate) -> bool {
        agent.is_active() && agent.in_tenure(date, self.config.fallback_anchor)
    }

    /// Rotation strategy of the agent's group.
    pub fn rotation_of(&self, agent: &Agent) -> Rotation {
        Rotation::for_group(&self.config, &agent.group)
    }

    /// Pure resolution against an already fetched irregular roster.
    ///
    /// Irregular agents with no roster supplied resolve to rest, as if
    /// missing from the group.
    pub(crate) fn resolve_with(
        &self,
        agent: Option<&Agent>,
        date: NaiveDate,
        roster: Option<&IrregularRoster>,
    ) -> DutyCode {
        let Some(agent) = agent else {
            return DutyCode::Unassigned;
        };
        if !self.is_eligible(agent, date) {
            return DutyCode::Unassigned;
        }

        match self.rotation_of(agent) {
            Rotation::Irregular => roster
                .map(|r| r.resolve(date, &agent.code))
                .unwrap_or(DutyCode::Rest),
            Rotation::Cyclic { offset } => {
                let entry = agent.effective_entry_date(self.config.fallback_anchor);
                self.rotation.duty(days_between(entry, date), offset)
            }
            Rotation::Unrecognized => DutyCode::Rest,
        }
    }

    /// The irregular group's roster, if one is configured.
    pub(crate) async fn irregular_roster(
        &self,
    ) -> Result<Option<IrregularRoster>, DependencyError> {
        let Some(group) = &self.config.irregular_group else {
            return Ok(None);
        };
        let members = self.directory.list_by_group(group).await?;
        debug!(group = %group, members = members.len(), "fetched irregular roster");
        Ok(Some(self.roster_from(&members)))
    }

    /// Ranks an already fetched member list.
    pub(crate) fn roster_from(&self, members: &[Agent]) -> IrregularRoster {
        IrregularRoster::new(
            members.iter().map(|a| a.code.clone()),
            self.config.irregular_codes,
        )
    }

    /// Roster needed to resolve `agent`: fetched only for irregular agents.
    pub(crate) async fn roster_for(
        &self,
        agent: &Agent,
    ) -> Result<Option<IrregularRoster>, DependencyError> {
        match self.rotation_of(agent) {
            Rotation::Irregular => self.irregular_roster().await,
            _ => Ok(None),
        }
    }
}

impl std::fmt::Debug for ShiftResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShiftResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgentStatus;
    use crate::scheduler::testing::{d, resolver, FailingDirectory};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn group_a() -> Agent {
        Agent::new("A01", "A").with_entry_date(d(2025, 11, 1))
    }

    #[tokio::test]
    async fn test_group_a_cycle() {
        let agent = group_a();
        let r = resolver(vec![agent.clone()]);

        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 11, 1)).await, DutyCode::Morning);
        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 11, 7)).await, DutyCode::Rest);
        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 11, 8)).await, DutyCode::Rest);
        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 11, 9)).await, DutyCode::Morning);
    }

    #[tokio::test]
    async fn test_group_b_offset() {
        let agent = Agent::new("B01", "B").with_entry_date(d(2025, 11, 1));
        let r = resolver(vec![agent.clone()]);
        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 11, 1)).await, DutyCode::Evening);
    }

    #[tokio::test]
    async fn test_missing_and_inactive_unassigned() {
        let inactive = group_a().with_status(AgentStatus::Inactive);
        let r = resolver(vec![inactive.clone()]);

        assert_eq!(r.resolve_shift(None, d(2025, 11, 3)).await, DutyCode::Unassigned);
        assert_eq!(
            r.resolve_shift(Some(&inactive), d(2025, 11, 3)).await,
            DutyCode::Unassigned
        );
        assert_eq!(r.resolve_shift_for("nobody", d(2025, 11, 3)).await, DutyCode::Unassigned);
    }

    #[tokio::test]
    async fn test_tenure_window() {
        let agent = group_a().with_exit_date(d(2025, 12, 1));
        let r = resolver(vec![agent.clone()]);

        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 10, 31)).await, DutyCode::Unassigned);
        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 11, 30)).await, DutyCode::Night);
        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 12, 1)).await, DutyCode::Unassigned);
        assert_eq!(r.resolve_shift(Some(&agent), d(2026, 6, 1)).await, DutyCode::Unassigned);
    }

    #[tokio::test]
    async fn test_fallback_anchor() {
        // No entry date: cycle starts at the configured anchor, 2025-11-01.
        let agent = Agent::new("C01", "C");
        let r = resolver(vec![agent.clone()]);

        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 10, 31)).await, DutyCode::Unassigned);
        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 11, 1)).await, DutyCode::Night);
    }

    #[tokio::test]
    async fn test_unrecognized_group_rests() {
        let agent = Agent::new("Z01", "Z").with_entry_date(d(2025, 1, 1));
        let r = resolver(vec![agent.clone()]);
        assert_eq!(r.resolve_shift(Some(&agent), d(2025, 11, 3)).await, DutyCode::Rest);
    }

    #[tokio::test]
    async fn test_lookup_by_code_normalises() {
        let r = resolver(vec![group_a()]);
        assert_eq!(r.resolve_shift_for(" a01 ", d(2025, 11, 3)).await, DutyCode::Evening);
    }

    #[tokio::test]
    async fn test_irregular_members() {
        let e1 = Agent::new("E01", "E").with_entry_date(d(2025, 1, 1));
        let e2 = Agent::new("E02", "E").with_entry_date(d(2025, 1, 1));
        let r = resolver(vec![e2.clone(), e1.clone()]);

        let monday = d(2025, 11, 3); // ISO week 45
        assert_eq!(r.resolve_shift(Some(&e1), monday).await, DutyCode::Morning);
        assert_eq!(r.resolve_shift(Some(&e2), monday).await, DutyCode::Evening);
        assert_eq!(r.resolve_irregular(monday, "e01").await, DutyCode::Morning);
        assert_eq!(r.resolve_irregular(d(2025, 11, 8), "E01").await, DutyCode::Rest);
        assert_eq!(r.resolve_irregular(monday, "A01").await, DutyCode::Rest);
    }

    #[tokio::test]
    async fn test_inactive_members_keep_rank() {
        // E01 is inactive but still ranks 0, so E02 keeps the mirror rule.
        let e1 = Agent::new("E01", "E").with_status(AgentStatus::Inactive);
        let e2 = Agent::new("E02", "E").with_entry_date(d(2025, 1, 1));
        let r = resolver(vec![e1, e2.clone()]);
        assert_eq!(r.resolve_shift(Some(&e2), d(2025, 11, 3)).await, DutyCode::Evening);
    }

    #[tokio::test]
    async fn test_directory_failure_degrades() {
        let e1 = Agent::new("E01", "E").with_entry_date(d(2025, 1, 1));
        let r = ShiftResolver::new(
            EngineConfig::default(),
            Arc::new(FailingDirectory),
            Arc::new(crate::providers::HolidaySet::new()),
            Arc::new(crate::providers::MemoryShiftStore::new()),
        );

        assert_eq!(r.resolve_shift(Some(&e1), d(2025, 11, 3)).await, DutyCode::Unassigned);
        assert_eq!(r.resolve_shift_for("E01", d(2025, 11, 3)).await, DutyCode::Unassigned);
        assert_eq!(r.resolve_irregular(d(2025, 11, 3), "E01").await, DutyCode::Unassigned);
        // Fixed-rotation agents never touch the directory.
        let a1 = group_a();
        assert_eq!(r.resolve_shift(Some(&a1), d(2025, 11, 1)).await, DutyCode::Morning);
    }

    #[tokio::test]
    async fn test_random_dates_periodic_and_bounded() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let entry = d(2020, 1, 1) + chrono::Days::new(rng.random_range(0..2000));
            let group = ["A", "B", "C", "D"][rng.random_range(0..4)];
            let agent = Agent::new("X01", group).with_entry_date(entry);
            let r = resolver(vec![agent.clone()]);

            let before = entry - chrono::Days::new(rng.random_range(1..500));
            assert_eq!(r.resolve_shift(Some(&agent), before).await, DutyCode::Unassigned);

            let day = entry + chrono::Days::new(rng.random_range(0..3000));
            let later = day + chrono::Days::new(8 * rng.random_range(1..50));
            assert_eq!(
                r.resolve_shift(Some(&agent), day).await,
                r.resolve_shift(Some(&agent), later).await
            );
        }
    }
}
