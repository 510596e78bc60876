//! Monthly and group planning generation.
//!
//! # Algorithm
//!
//! 1. Enumerate the dates of the month (or range) in ascending order.
//! 2. Fetch holiday flags for every date concurrently; results are
//!    re-associated by index, so ordering never depends on completion order.
//! 3. Fetch the irregular roster once, if the agent (or group) needs it.
//! 4. Resolve each date against the fetched data.
//!
//! Generation is fail-closed: any collaborator failure yields an empty
//! planning, never a partial one. Callers must read an empty result as
//! "could not generate".
//!
//! Group generation additionally writes every computed day to the shift
//! store as a theoretical record (last writer wins).

use chrono::{Datelike, NaiveDate, Weekday};
use futures::future::{join_all, try_join_all};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, instrument, warn};

use super::ShiftResolver;
use crate::calendar::{date_range, month_days, weekday_name};
use crate::error::{DependencyError, Result, RosterError};
use crate::models::{Agent, AgentCode, GroupId, GroupPlanningEntry, PlanningDay, ShiftRecord};
use crate::rotation::{IrregularRoster, Rotation};

impl ShiftResolver {
    /// One month of planning for an agent.
    ///
    /// # Errors
    /// `InvalidMonth` / `InvalidYear` for out-of-range parameters. Every
    /// other failure produces `Ok` with an empty planning.
    #[instrument(skip(self))]
    pub async fn generate_month(
        &self,
        code: &str,
        month: u32,
        year: i32,
    ) -> Result<Vec<PlanningDay>> {
        let dates = month_days(month, year)?;
        let days = self.generate_dates(&AgentCode::new(code), &dates).await;
        debug!(days = days.len(), "generated month");
        Ok(days)
    }

    /// Planning for an agent over `[start, end]`.
    ///
    /// Same fail-closed behaviour as [`generate_month`](Self::generate_month).
    #[instrument(skip(self))]
    pub async fn resolve_range(
        &self,
        code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PlanningDay>> {
        if start > end {
            return Err(RosterError::InvalidRange { start, end });
        }
        let dates: Vec<NaiveDate> = date_range(start, end).collect();
        Ok(self.generate_dates(&AgentCode::new(code), &dates).await)
    }

    /// One month of planning for every active member of a group, persisting
    /// each day to the shift store.
    ///
    /// Entries come back in completion order, not membership order. A store
    /// failure for one agent is logged and does not drop the entry.
    #[instrument(skip(self))]
    pub async fn generate_group_month(
        &self,
        group: &str,
        month: u32,
        year: i32,
    ) -> Result<Vec<GroupPlanningEntry>> {
        let dates = month_days(month, year)?;
        let group = GroupId::new(group);

        let Some((members, flags)) = self.group_inputs(&group, &dates).await else {
            return Ok(Vec::new());
        };
        let roster = self.group_roster(&group, &members);

        let mut pending: FuturesUnordered<_> = members
            .into_iter()
            .filter(Agent::is_active)
            .map(|agent| {
                let days = self.build_days(Some(&agent), &dates, &flags, roster.as_ref());
                async move {
                    self.persist(&agent, &days).await;
                    GroupPlanningEntry { agent, days }
                }
            })
            .collect();

        let mut entries = Vec::with_capacity(pending.len());
        while let Some(entry) = pending.next().await {
            entries.push(entry);
        }
        debug!(agents = entries.len(), "generated group month");
        Ok(entries)
    }

    /// Looks up the agent and plans the given dates, fail-closed.
    pub(crate) async fn generate_dates(
        &self,
        code: &AgentCode,
        dates: &[NaiveDate],
    ) -> Vec<PlanningDay> {
        match self.directory.get_agent(code).await {
            Ok(agent) => self.plan(agent.as_ref(), dates).await,
            Err(e) => {
                warn!(agent = %code, error = %e, "agent lookup failed; planning withheld");
                Vec::new()
            }
        }
    }

    /// Plans the given dates for an already fetched agent, fail-closed.
    pub(crate) async fn plan(
        &self,
        agent: Option<&Agent>,
        dates: &[NaiveDate],
    ) -> Vec<PlanningDay> {
        let roster = async {
            match agent {
                Some(agent) => self.roster_for(agent).await,
                None => Ok(None),
            }
        };
        match futures::try_join!(self.holiday_flags(dates), roster) {
            Ok((flags, roster)) => self.build_days(agent, dates, &flags, roster.as_ref()),
            Err(e) => {
                warn!(error = %e, "planning withheld");
                Vec::new()
            }
        }
    }

    /// Members and holiday flags shared by every agent of a group batch.
    ///
    /// `None` (logged) if either lookup fails.
    pub(crate) async fn group_inputs(
        &self,
        group: &GroupId,
        dates: &[NaiveDate],
    ) -> Option<(Vec<Agent>, Vec<bool>)> {
        match futures::try_join!(self.directory.list_by_group(group), self.holiday_flags(dates)) {
            Ok(inputs) => Some(inputs),
            Err(e) => {
                warn!(group = %group, error = %e, "group planning withheld");
                None
            }
        }
    }

    /// Irregular roster built from an already fetched member list, if the
    /// group needs one.
    pub(crate) fn group_roster(
        &self,
        group: &GroupId,
        members: &[Agent],
    ) -> Option<IrregularRoster> {
        match Rotation::for_group(&self.config, group) {
            Rotation::Irregular => Some(self.roster_from(members)),
            _ => None,
        }
    }

    /// Holiday flag for each date, in the same order as `dates`.
    pub(crate) async fn holiday_flags(
        &self,
        dates: &[NaiveDate],
    ) -> std::result::Result<Vec<bool>, DependencyError> {
        try_join_all(dates.iter().map(|&date| self.holidays.is_holiday(date))).await
    }

    pub(crate) fn build_days(
        &self,
        agent: Option<&Agent>,
        dates: &[NaiveDate],
        flags: &[bool],
        roster: Option<&IrregularRoster>,
    ) -> Vec<PlanningDay> {
        dates
            .iter()
            .zip(flags)
            .map(|(&date, &is_holiday)| PlanningDay {
                day: date.day(),
                date,
                weekday: weekday_name(date, self.config.locale).to_string(),
                duty: self.resolve_with(agent, date, roster),
                is_holiday,
                is_sunday: date.weekday() == Weekday::Sun,
                is_saturday: date.weekday() == Weekday::Sat,
            })
            .collect()
    }

    async fn persist(&self, agent: &Agent, days: &[PlanningDay]) {
        let writes = days.iter().map(|day| {
            self.store
                .upsert(ShiftRecord::theoretical(agent.code.clone(), day.date, day.duty))
        });
        let failed = join_all(writes)
            .await
            .into_iter()
            .filter(|r| r.is_err())
            .count();
        if failed > 0 {
            warn!(agent = %agent.code, failed, "theoretical shifts not persisted");
        }
    }
}
