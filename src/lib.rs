//! Duty roster engine.
//!
//! Computes which duty an agent works on a given day from rotating group
//! patterns, builds monthly plannings, expands leave periods and derives
//! holiday-aware workload statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Agent`, `DutyCode`, `PlanningDay`, `LeaveDay`
//! - **`rotation`**: The fixed 8-day cycle and the irregular weekday rule
//! - **`scheduler`**: `ShiftResolver`, the entry point for every operation
//! - **`providers`**: Collaborator traits (directory, holidays, shift store)
//!   with in-memory implementations
//! - **`calendar`**: Date arithmetic, ISO weeks, localized weekday names
//! - **`config`**: Group offsets, anchor date, cycle pattern
//! - **`validation`**: Input integrity checks for agents and configuration
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use u_roster::config::EngineConfig;
//! use u_roster::models::{Agent, DutyCode};
//! use u_roster::providers::{HolidaySet, MemoryDirectory, MemoryShiftStore};
//! use u_roster::scheduler::ShiftResolver;
//!
//! let entry = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
//! let resolver = ShiftResolver::new(
//!     EngineConfig::default(),
//!     Arc::new(MemoryDirectory::new(vec![Agent::new("A01", "A").with_entry_date(entry)])),
//!     Arc::new(HolidaySet::new()),
//!     Arc::new(MemoryShiftStore::new()),
//! );
//!
//! let days = futures::executor::block_on(resolver.generate_month("A01", 11, 2025)).unwrap();
//! assert_eq!(days.len(), 30);
//! assert_eq!(days[0].duty, DutyCode::Morning);
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod rotation;
pub mod scheduler;
pub mod validation;

pub use error::{Result, RosterError};
pub use scheduler::ShiftResolver;
