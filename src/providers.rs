//! External collaborator interfaces.
//!
//! The engine reads agents from an [`AgentDirectory`], asks a
//! [`HolidayCalendar`] about public holidays and writes computed shifts to
//! a [`ShiftStore`]. Every call is an async boundary that may fail; the
//! scheduler decides how each failure degrades.
//!
//! In-memory implementations are provided for tests and for embedders
//! whose data already lives in process:
//! - [`MemoryDirectory`]: a fixed list of agents
//! - [`HolidaySet`]: a date -> holiday name map
//! - [`MemoryShiftStore`]: last-writer-wins map keyed by (agent, date)

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::error::DependencyError;
use crate::models::{Agent, AgentCode, GroupId, ShiftRecord};

/// Source of agent profiles.
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    /// Looks up one agent. `Ok(None)` if the code is unknown.
    async fn get_agent(&self, code: &AgentCode) -> Result<Option<Agent>, DependencyError>;

    /// All members of a group, active or not.
    async fn list_by_group(&self, group: &GroupId) -> Result<Vec<Agent>, DependencyError>;

    /// All active agents across groups.
    async fn list_active(&self) -> Result<Vec<Agent>, DependencyError>;
}

/// Source of public holidays.
#[async_trait]
pub trait HolidayCalendar: Send + Sync {
    /// Whether `date` is a holiday.
    async fn is_holiday(&self, date: NaiveDate) -> Result<bool, DependencyError>;

    /// Holiday name, if the calendar knows one.
    async fn holiday_name(&self, _date: NaiveDate) -> Result<Option<String>, DependencyError> {
        Ok(None)
    }
}

/// Destination for computed shift records.
#[async_trait]
pub trait ShiftStore: Send + Sync {
    /// Inserts or overwrites the record for `(record.agent, record.date)`.
    async fn upsert(&self, record: ShiftRecord) -> Result<(), DependencyError>;
}

/// Agent directory backed by a vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    agents: Vec<Agent>,
}

impl MemoryDirectory {
    /// Creates a directory holding `agents`.
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// Adds an agent.
    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }
}

#[async_trait]
impl AgentDirectory for MemoryDirectory {
    async fn get_agent(&self, code: &AgentCode) -> Result<Option<Agent>, DependencyError> {
        Ok(self.agents.iter().find(|a| &a.code == code).cloned())
    }

    async fn list_by_group(&self, group: &GroupId) -> Result<Vec<Agent>, DependencyError> {
        Ok(self
            .agents
            .iter()
            .filter(|a| &a.group == group)
            .cloned()
            .collect())
    }

    async fn list_active(&self) -> Result<Vec<Agent>, DependencyError> {
        Ok(self.agents.iter().filter(|a| a.is_active()).cloned().collect())
    }
}

/// Holiday calendar backed by a date -> name map.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    holidays: BTreeMap<NaiveDate, String>,
}

impl HolidaySet {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday.
    pub fn with_holiday(mut self, date: NaiveDate, name: impl Into<String>) -> Self {
        self.holidays.insert(date, name.into());
        self
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Whether no holidays are registered.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

#[async_trait]
impl HolidayCalendar for HolidaySet {
    async fn is_holiday(&self, date: NaiveDate) -> Result<bool, DependencyError> {
        Ok(self.holidays.contains_key(&date))
    }

    async fn holiday_name(&self, date: NaiveDate) -> Result<Option<String>, DependencyError> {
        Ok(self.holidays.get(&date).cloned())
    }
}

/// Shift store keeping records in memory.
///
/// Writes to the same (agent, date) key overwrite each other; the mutex
/// serialises concurrent writers.
#[derive(Debug, Default)]
pub struct MemoryShiftStore {
    records: Mutex<HashMap<(AgentCode, NaiveDate), ShiftRecord>>,
}

impl MemoryShiftStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, HashMap<(AgentCode, NaiveDate), ShiftRecord>> {
        // A poisoned map is still a consistent map: each write is a single insert.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The record stored for an agent and date.
    pub fn get(&self, agent: &AgentCode, date: NaiveDate) -> Option<ShiftRecord> {
        self.records().get(&(agent.clone(), date)).cloned()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

#[async_trait]
impl ShiftStore for MemoryShiftStore {
    async fn upsert(&self, record: ShiftRecord) -> Result<(), DependencyError> {
        self.records()
            .insert((record.agent.clone(), record.date), record);
        Ok(())
    }
}
