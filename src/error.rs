//! Error types for the roster engine.
//!
//! Only invalid parameters surface as errors from the engine's public
//! operations. Unknown agents and collaborator failures are absorbed into
//! duty-code defaults or empty plannings (see `scheduler`), but the
//! collaborator traits still report them through [`DependencyError`] so the
//! engine can log what went wrong.

use chrono::NaiveDate;

/// Which external collaborator failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// The agent directory.
    Directory,
    /// The holiday calendar.
    Holidays,
    /// The shift record store.
    Store,
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dependency::Directory => "agent directory",
            Dependency::Holidays => "holiday calendar",
            Dependency::Store => "shift store",
        };
        f.write_str(name)
    }
}

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{dependency} unavailable: {message}")]
pub struct DependencyError {
    /// The collaborator that failed.
    pub dependency: Dependency,
    /// Human-readable cause.
    pub message: String,
}

impl DependencyError {
    /// Creates a new dependency error.
    pub fn new(dependency: Dependency, message: impl Into<String>) -> Self {
        Self {
            dependency,
            message: message.into(),
        }
    }

    /// Shorthand for an agent directory failure.
    pub fn directory(message: impl Into<String>) -> Self {
        Self::new(Dependency::Directory, message)
    }

    /// Shorthand for a holiday calendar failure.
    pub fn holidays(message: impl Into<String>) -> Self {
        Self::new(Dependency::Holidays, message)
    }

    /// Shorthand for a shift store failure.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(Dependency::Store, message)
    }
}

/// Error type for all fallible roster operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    /// Month number outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// Year outside the range the calendar can represent.
    #[error("invalid year: {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// A date range whose start comes after its end.
    #[error("invalid range: {start} is after {end}")]
    InvalidRange {
        /// Range start.
        start: NaiveDate,
        /// Range end.
        end: NaiveDate,
    },

    /// An external collaborator failed.
    #[error(transparent)]
    Dependency(#[from] DependencyError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;
