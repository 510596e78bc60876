//! Roster domain models.
//!
//! Provides the data types shared by the rotation strategies and the
//! scheduler: agent profiles, duty codes, planning days and shift records.
//!
//! # Domain Mappings
//!
//! | u-roster | Operations | Healthcare | Security |
//! |----------|-----------|------------|----------|
//! | Agent | Operator | Nurse | Guard |
//! | GroupId | Watch | Team | Squad |
//! | DutyCode | Shift | Rota slot | Post |
//! | PlanningDay | Roster cell | Rota day | Duty day |

mod agent;
mod duty;
mod planning;

pub use agent::{Agent, AgentCode, AgentStatus, GroupId};
pub use duty::{DutyCode, DutyTally, ShiftOrigin, UnknownDutyCode};
pub use planning::{
    consumed_leave_days, GroupPlanningEntry, LeaveClassification, LeaveDay, PlanningDay,
    ShiftRecord,
};
