//! Leave period expansion.
//!
//! Turns a leave request into one record per calendar day. Sundays inside
//! the period are rest and do not consume leave; every other day is a leave
//! day. The holiday flag is carried for display and does not change the
//! classification.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, instrument, warn};

use super::ShiftResolver;
use crate::calendar::date_range;
use crate::error::{Result, RosterError};
use crate::models::{AgentCode, DutyCode, LeaveClassification, LeaveDay};

impl ShiftResolver {
    /// Expands `[start, end]` into per-day leave records.
    ///
    /// If the holiday calendar fails, every day is flagged as a non-holiday.
    ///
    /// # Errors
    /// `InvalidRange` if `start > end`.
    #[instrument(skip(self))]
    pub async fn expand_leave(
        &self,
        code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveDay>> {
        if start > end {
            return Err(RosterError::InvalidRange { start, end });
        }
        let agent = AgentCode::new(code);
        let dates: Vec<NaiveDate> = date_range(start, end).collect();

        let flags = match self.holiday_flags(&dates).await {
            Ok(flags) => flags,
            Err(e) => {
                warn!(error = %e, "holiday lookup failed; flags default to false");
                vec![false; dates.len()]
            }
        };

        let days: Vec<LeaveDay> = dates
            .into_iter()
            .zip(flags)
            .map(|(date, is_holiday)| {
                let (duty, classification) = if date.weekday() == Weekday::Sun {
                    (DutyCode::Rest, LeaveClassification::SundayDuringLeave)
                } else {
                    (DutyCode::Leave, LeaveClassification::LeaveDay)
                };
                LeaveDay {
                    agent: agent.clone(),
                    date,
                    duty,
                    classification,
                    is_holiday,
                }
            })
            .collect();
        debug!(days = days.len(), "expanded leave");
        Ok(days)
    }
}
