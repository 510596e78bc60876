//! Input validation for roster data.
//!
//! Checks structural integrity of agent profiles and engine configuration
//! before scheduling. Detects:
//! - Duplicate or empty agent codes
//! - Exit dates on or before the entry date
//! - Agents in groups the configuration does not know
//! - Phase offsets outside the cycle, duplicate fixed groups
//! - An irregular group that is also declared as fixed
//! - Irregular codes that are not two distinct operational codes
//!
//! None of these stop the resolver from running; unknown groups resolve
//! to rest and out-of-window dates to unassigned. Validation exists so
//! callers can surface the mistakes instead.

use std::collections::HashSet;

use crate::config::{EngineConfig, CYCLE_LENGTH};
use crate::models::Agent;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two agents share the same code.
    DuplicateCode,
    /// An agent code is empty after normalisation.
    EmptyCode,
    /// Exit date is on or before the entry date.
    InvalidTenure,
    /// An agent belongs to a group the configuration does not declare.
    UnknownGroup,
    /// A phase offset is not smaller than the cycle length.
    OffsetOutOfRange,
    /// A group is declared twice, or as both fixed and irregular.
    ConflictingGroup,
    /// Irregular codes are not two distinct operational codes.
    InvalidIrregularCodes,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates agent profiles against a configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_agents(agents: &[Agent], config: &EngineConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut codes = HashSet::new();

    for agent in agents {
        if agent.code.as_str().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCode,
                format!("Agent in group '{}' has an empty code", agent.group),
            ));
        } else if !codes.insert(agent.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate agent code: {}", agent.code),
            ));
        }

        if let Some(exit) = agent.exit_date {
            let entry = agent.effective_entry_date(config.fallback_anchor);
            if exit <= entry {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTenure,
                    format!(
                        "Agent '{}' exits on {} but enters on {}",
                        agent.code, exit, entry
                    ),
                ));
            }
        }

        if !config.is_fixed(&agent.group) && !config.is_irregular(&agent.group) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGroup,
                format!("Agent '{}' belongs to unknown group '{}'", agent.code, agent.group),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an engine configuration.
pub fn validate_config(config: &EngineConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut groups = HashSet::new();

    for g in &config.fixed_groups {
        if !groups.insert(&g.group) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ConflictingGroup,
                format!("Fixed group '{}' declared twice", g.group),
            ));
        }
        if g.offset as usize >= CYCLE_LENGTH {
            errors.push(ValidationError::new(
                ValidationErrorKind::OffsetOutOfRange,
                format!(
                    "Group '{}' offset {} is outside 0..{}",
                    g.group, g.offset, CYCLE_LENGTH
                ),
            ));
        }
    }

    if let Some(irregular) = &config.irregular_group {
        if groups.contains(irregular) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ConflictingGroup,
                format!("Group '{irregular}' is both fixed and irregular"),
            ));
        }
    }

    let [first, second] = config.irregular_codes;
    if first == second || !first.is_operational() || !second.is_operational() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidIrregularCodes,
            format!("Irregular codes {first}/{second} must be two distinct operational codes"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
