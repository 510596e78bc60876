//! Agent profile model.
//!
//! Agents are the people on the roster. Each agent belongs to one duty
//! group and has a tenure window bounded by an entry date and an optional
//! exit date. The profile is owned by an external directory; the engine
//! only reads it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent identifier, normalised to trimmed uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AgentCode(String);

impl AgentCode {
    /// Creates a normalised code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    /// The normalised code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AgentCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AgentCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<AgentCode> for String {
    fn from(code: AgentCode) -> String {
        code.0
    }
}

/// Duty group identifier, normalised to trimmed uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct GroupId(String);

impl GroupId {
    /// Creates a normalised group id.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_uppercase())
    }

    /// The normalised id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<GroupId> for String {
    fn from(id: GroupId) -> String {
        id.0
    }
}

/// Whether an agent is currently on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// On the roster.
    #[default]
    Active,
    /// Kept for history; never scheduled.
    Inactive,
}

/// An agent profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent code.
    pub code: AgentCode,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Duty group.
    pub group: GroupId,
    /// First day of tenure. `None` = use the configured fallback anchor.
    pub entry_date: Option<NaiveDate>,
    /// First day no longer on the roster (exclusive end of tenure).
    pub exit_date: Option<NaiveDate>,
    /// Roster status.
    #[serde(default)]
    pub status: AgentStatus,
}

impl Agent {
    /// Creates an active agent with no tenure dates.
    pub fn new(code: impl Into<AgentCode>, group: impl Into<GroupId>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            group: group.into(),
            entry_date: None,
            exit_date: None,
            status: AgentStatus::Active,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the entry date.
    pub fn with_entry_date(mut self, date: NaiveDate) -> Self {
        self.entry_date = Some(date);
        self
    }

    /// Sets the exit date.
    pub fn with_exit_date(mut self, date: NaiveDate) -> Self {
        self.exit_date = Some(date);
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the agent is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    /// Entry date, or `fallback` when none is recorded.
    pub fn effective_entry_date(&self, fallback: NaiveDate) -> NaiveDate {
        self.entry_date.unwrap_or(fallback)
    }

    /// Whether `date` lies within `[effective entry, exit)`.
    ///
    /// Does not look at the status.
    pub fn in_tenure(&self, date: NaiveDate, fallback: NaiveDate) -> bool {
        if let Some(exit) = self.exit_date {
            if date >= exit {
                return false;
            }
        }
        date >= self.effective_entry_date(fallback)
    }
}
