//! Shared fixtures for scheduler tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::ShiftResolver;
use crate::config::EngineConfig;
use crate::error::DependencyError;
use crate::models::{Agent, AgentCode, GroupId, ShiftRecord};
use crate::providers::{
    AgentDirectory, HolidayCalendar, HolidaySet, MemoryDirectory, MemoryShiftStore, ShiftStore,
};

pub(crate) fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub(crate) fn resolver(agents: Vec<Agent>) -> ShiftResolver {
    resolver_with(agents, HolidaySet::new(), Arc::new(MemoryShiftStore::new()))
}

pub(crate) fn resolver_with(
    agents: Vec<Agent>,
    holidays: HolidaySet,
    store: Arc<dyn ShiftStore>,
) -> ShiftResolver {
    ShiftResolver::new(
        EngineConfig::default(),
        Arc::new(MemoryDirectory::new(agents)),
        Arc::new(holidays),
        store,
    )
}

pub(crate) struct FailingDirectory;

#[async_trait]
impl AgentDirectory for FailingDirectory {
    async fn get_agent(&self, _code: &AgentCode) -> Result<Option<Agent>, DependencyError> {
        Err(DependencyError::directory("connection refused"))
    }

    async fn list_by_group(&self, _group: &GroupId) -> Result<Vec<Agent>, DependencyError> {
        Err(DependencyError::directory("connection refused"))
    }

    async fn list_active(&self) -> Result<Vec<Agent>, DependencyError> {
        Err(DependencyError::directory("connection refused"))
    }
}

/// Fails on one specific date, answers `false` otherwise.
pub(crate) struct FlakyHolidays {
    pub(crate) broken: NaiveDate,
}

#[async_trait]
impl HolidayCalendar for FlakyHolidays {
    async fn is_holiday(&self, date: NaiveDate) -> Result<bool, DependencyError> {
        if date == self.broken {
            Err(DependencyError::holidays("timeout"))
        } else {
            Ok(false)
        }
    }
}

/// Rejects writes for one agent, delegates the rest.
pub(crate) struct PickyStore {
    pub(crate) rejected: AgentCode,
    pub(crate) inner: MemoryShiftStore,
}

#[async_trait]
impl ShiftStore for PickyStore {
    async fn upsert(&self, record: ShiftRecord) -> Result<(), DependencyError> {
        if record.agent == self.rejected {
            return Err(DependencyError::store("read-only"));
        }
        self.inner.upsert(record).await
    }
}
