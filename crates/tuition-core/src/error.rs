//! # Error Types
//!
//! Domain-specific error types for tuition-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                │
//! │                                                                    │
//! │  tuition-core errors (this file)                                   │
//! │  ├── CoreError        - Roster and domain rule violations          │
//! │  └── ValidationError  - Input validation failures                  │
//! │                                                                    │
//! │  Flow: ValidationError → CoreError → frontend message              │
//! │                                                                    │
//! │  The pricing engine itself has NO error path: every state the      │
//! │  auto-correction rules allow to exist has a defined price.         │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (child id, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Roster and domain rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No child with the given id exists in the roster.
    #[error("Child not found: {0}")]
    ChildNotFound(String),

    /// The roster already holds the maximum number of children.
    #[error("Roster cannot have more than {max} children")]
    RosterFull { max: usize },

    /// The roster must always keep at least one child.
    #[error("Roster must keep at least {min} child")]
    LastChild { min: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
