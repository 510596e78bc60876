//! Planning output models.
//!
//! Plannings are freshly computed values. They are never cached or
//! mutated by the engine; a new request regenerates them from scratch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Agent, AgentCode, DutyCode, ShiftOrigin};

/// One day of an agent's planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningDay {
    /// Day of month (1-based).
    pub day: u32,
    /// Full date.
    pub date: NaiveDate,
    /// Localised weekday name.
    pub weekday: String,
    /// Resolved duty code.
    pub duty: DutyCode,
    /// Whether the date is in the holiday calendar.
    pub is_holiday: bool,
    /// Whether the date is a Sunday.
    pub is_sunday: bool,
    /// Whether the date is a Saturday.
    pub is_saturday: bool,
}

impl PlanningDay {
    /// Whether the agent works an operational shift on a holiday.
    #[inline]
    pub fn is_holiday_worked(&self) -> bool {
        self.is_holiday && self.duty.is_operational()
    }
}

/// An agent together with one month of planning days, in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPlanningEntry {
    /// The agent.
    pub agent: Agent,
    /// One entry per day of the month.
    pub days: Vec<PlanningDay>,
}

/// How a day inside a leave period is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveClassification {
    /// A Sunday inside the period; rest, not leave consumption.
    SundayDuringLeave,
    /// A regular leave day.
    LeaveDay,
}

/// One day of an expanded leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDay {
    /// Agent on leave.
    pub agent: AgentCode,
    /// Calendar date.
    pub date: NaiveDate,
    /// `Leave`, or `Rest` on Sundays.
    pub duty: DutyCode,
    /// Sunday or regular leave day.
    pub classification: LeaveClassification,
    /// Holiday flag, independent of the Sunday rule.
    pub is_holiday: bool,
}

/// Number of days in an expanded leave that consume leave balance.
pub fn consumed_leave_days(days: &[LeaveDay]) -> usize {
    days.iter()
        .filter(|d| d.classification == LeaveClassification::LeaveDay)
        .count()
}

/// A shift record written to the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Agent code.
    pub agent: AgentCode,
    /// Date of the shift.
    pub date: NaiveDate,
    /// Duty code.
    pub duty: DutyCode,
    /// Record provenance.
    pub origin: ShiftOrigin,
}

impl ShiftRecord {
    /// Creates a record computed by the rotation engine.
    pub fn theoretical(agent: AgentCode, date: NaiveDate, duty: DutyCode) -> Self {
        Self {
            agent,
            date,
            duty,
            origin: ShiftOrigin::Theoretical,
        }
    }
}
