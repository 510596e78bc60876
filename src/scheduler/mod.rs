//! The roster engine.
//!
//! [`ShiftResolver`] answers every roster question: the duty code of one
//! agent on one day, monthly and group plannings, leave expansion and
//! workload statistics.
//!
//! # Failure policy
//!
//! | Operation | On collaborator failure |
//! |-----------|------------------------|
//! | Single-day resolution | `Unassigned` |
//! | Monthly / range / group planning | Empty result |
//! | Leave expansion | Holiday flags default to `false` |
//! | Group persistence | Logged, entry still returned |
//!
//! Only parameter errors (month, year, range) surface as `Err`.

mod leave;
mod monthly;
mod resolver;
mod stats;
#[cfg(test)]
mod testing;

pub use resolver::ShiftResolver;
pub use stats::{AgentStats, GroupStats};
