//! Roster statistics.
//!
//! Reduces generated plannings into duty-code counts and an "operational"
//! total used for workload comparison.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Tally | Days per duty code |
//! | Total days worked | Days on an operational code |
//! | Holiday days worked | Operational days that are holidays |
//! | Operational total | Days worked, plus holiday days worked again for fixed-rotation groups |
//! | Total days | Days in the generated planning |
//!
//! The irregular group does not receive the holiday bonus.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::ShiftResolver;
use crate::calendar::month_days;
use crate::error::Result;
use crate::models::{Agent, AgentCode, DutyTally, GroupId, PlanningDay};
use crate::rotation::Rotation;

/// One agent's statistics for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStats {
    /// Agent code.
    pub agent: AgentCode,
    /// Agent's group, if the agent was found.
    pub group: Option<GroupId>,
    /// Days per duty code.
    pub tally: DutyTally,
    /// Operational days falling on a holiday.
    pub holiday_days_worked: u32,
    /// Operational days.
    pub total_days_worked: u32,
    /// Business-rule adjusted workload.
    pub operational_total: u32,
    /// Days in the period.
    pub total_days: u32,
}

impl AgentStats {
    /// Computes statistics from a planning.
    ///
    /// # Arguments
    /// * `agent` - Agent code the planning belongs to.
    /// * `group` - Agent's group, if known.
    /// * `rotation` - Strategy of the group; decides the holiday bonus.
    /// * `days` - The generated planning.
    pub fn calculate(
        agent: AgentCode,
        group: Option<GroupId>,
        rotation: Rotation,
        days: &[PlanningDay],
    ) -> Self {
        let tally = DutyTally::from_codes(days.iter().map(|d| d.duty));
        let total_days_worked = tally.worked();
        let holiday_days_worked = days.iter().filter(|d| d.is_holiday_worked()).count() as u32;

        let operational_total = if rotation.earns_holiday_bonus() {
            total_days_worked + holiday_days_worked
        } else {
            total_days_worked
        };

        Self {
            agent,
            group,
            tally,
            holiday_days_worked,
            total_days_worked,
            operational_total,
            total_days: days.len() as u32,
        }
    }
}

/// Aggregated statistics for the active members of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Group id.
    pub group: GroupId,
    /// Number of agents included.
    pub member_count: usize,
    /// Summed duty-code counts.
    pub tally: DutyTally,
    /// Summed holiday days worked.
    pub holiday_days_worked: u32,
    /// Summed operational days.
    pub total_days_worked: u32,
    /// Summed operational totals.
    pub operational_total: u32,
    /// `operational_total / member_count`, or 0.0 with no members.
    pub average_per_agent: f64,
    /// Per-agent breakdown.
    pub agents: Vec<AgentStats>,
}

impl GroupStats {
    /// Sums per-agent statistics.
    pub fn aggregate(group: GroupId, agents: Vec<AgentStats>) -> Self {
        let mut tally = DutyTally::new();
        let mut holiday_days_worked = 0;
        let mut total_days_worked = 0;
        let mut operational_total = 0;

        for s in &agents {
            tally.merge(&s.tally);
            holiday_days_worked += s.holiday_days_worked;
            total_days_worked += s.total_days_worked;
            operational_total += s.operational_total;
        }

        let member_count = agents.len();
        let average_per_agent = if member_count == 0 {
            0.0
        } else {
            operational_total as f64 / member_count as f64
        };

        Self {
            group,
            member_count,
            tally,
            holiday_days_worked,
            total_days_worked,
            operational_total,
            average_per_agent,
            agents,
        }
    }
}

impl ShiftResolver {
    /// Statistics for one agent over a month.
    ///
    /// Unknown agents yield a month of `Unassigned` with no bonus; a failed
    /// generation yields all-zero statistics with `total_days == 0`.
    #[instrument(skip(self))]
    pub async fn compute_agent_stats(&self, code: &str, month: u32, year: i32) -> Result<AgentStats> {
        let dates = month_days(month, year)?;
        let code = AgentCode::new(code);

        let (agent, days) = match self.directory.get_agent(&code).await {
            Ok(agent) => {
                let days = self.plan(agent.as_ref(), &dates).await;
                (agent, days)
            }
            Err(e) => {
                warn!(agent = %code, error = %e, "agent lookup failed; statistics empty");
                (None, Vec::new())
            }
        };

        let stats = self.stats_for(code, agent.as_ref(), &days);
        debug!(worked = stats.total_days_worked, total = stats.operational_total, "agent stats");
        Ok(stats)
    }

    /// Statistics summed over the active members of a group for a month.
    ///
    /// Directory or holiday failures yield empty statistics (no members).
    #[instrument(skip(self))]
    pub async fn compute_group_stats(&self, group: &str, month: u32, year: i32) -> Result<GroupStats> {
        let dates = month_days(month, year)?;
        let group = GroupId::new(group);

        let Some((members, flags)) = self.group_inputs(&group, &dates).await else {
            return Ok(GroupStats::aggregate(group, Vec::new()));
        };
        let roster = self.group_roster(&group, &members);

        let agents: Vec<AgentStats> = members
            .iter()
            .filter(|a| a.is_active())
            .map(|agent| {
                let days = self.build_days(Some(agent), &dates, &flags, roster.as_ref());
                self.stats_for(agent.code.clone(), Some(agent), &days)
            })
            .collect();

        let stats = GroupStats::aggregate(group, agents);
        debug!(members = stats.member_count, average = stats.average_per_agent, "group stats");
        Ok(stats)
    }

    /// Planning days worked on holidays, for a quick holiday report.
    pub fn holidays_worked(days: &[PlanningDay]) -> Vec<NaiveDate> {
        days.iter()
            .filter(|d| d.is_holiday_worked())
            .map(|d| d.date)
            .collect()
    }

    fn stats_for(&self, code: AgentCode, agent: Option<&Agent>, days: &[PlanningDay]) -> AgentStats {
        let (group, rotation) = match agent {
            Some(a) => (Some(a.group.clone()), self.rotation_of(a)),
            None => (None, Rotation::Unrecognized),
        };
        AgentStats::calculate(code, group, rotation, days)
    }
}
