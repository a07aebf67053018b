//! # tuition-core: Pure Pricing Logic for the TSS Enrollment Form
//!
//! This crate is the **heart** of the tuition calculator. It contains all
//! pricing and eligibility rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                     TSS Tuition Architecture                       │
//! │                                                                    │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │                 Enrollment Form (frontend)                   │  │
//! │  │   grade/course selectors ──► add-on toggle ──► fee summary   │  │
//! │  └──────────────────────────────┬───────────────────────────────┘  │
//! │                                 │ generated TS bindings             │
//! │  ┌──────────────────────────────▼───────────────────────────────┐  │
//! │  │                     tuition-roster                           │  │
//! │  │        ids • 1..=3 bound • field mutation • summary          │  │
//! │  └──────────────────────────────┬───────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼───────────────────────────────┐  │
//! │  │                ★ tuition-core (THIS CRATE) ★                 │  │
//! │  │                                                              │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌───────────────┐     │  │
//! │  │  │  types  │ │  money  │ │ pricing  │ │  eligibility  │     │  │
//! │  │  │  Grade  │ │  Money  │ │  tables  │ │  add-on rule  │     │  │
//! │  │  │  Course │ │  (yen)  │ │  summary │ │  normalize    │     │  │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └───────────────┘     │  │
//! │  │                                                              │  │
//! │  │  NO I/O • NO PERSISTENCE • NO CLOCK PRICING • PURE FUNCTIONS │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Grade, CourseCategory, ChildEnrollment, ...)
//! - [`money`] - Money type with integer arithmetic (whole yen)
//! - [`pricing`] - Fee schedule, price tables, summary engine
//! - [`eligibility`] - Add-on rule and auto-correction
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and persistence are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole yen (i64), never floats
//! 4. **Closed Enums**: Missing price-table variants fail at compile time,
//!    not as a silent zero at runtime
//!
//! ## Example Usage
//!
//! ```rust
//! use tuition_core::pricing::compute_summary;
//! use tuition_core::types::{ChildEnrollment, Grade};
//!
//! let first = ChildEnrollment::new("c1");
//! let mut second = ChildEnrollment::new("c2");
//! second.set_grade(Grade::PreKJunior);
//!
//! let summary = compute_summary(&[first, second]);
//!
//! // Second child: reduced rate 3550, sibling discount 1500
//! assert_eq!(summary.lines[1].total_monthly.yen(), 2050);
//! assert_eq!(summary.total_annual_fee.yen(), 8800 + 4400);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod eligibility;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tuition_core::Money` instead of
// `use tuition_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of children on a roster.
///
/// ## Business Reason
/// The enrollment form always shows at least one child; an empty form
/// has nothing to price.
pub const MIN_CHILDREN: usize = 1;

/// Maximum number of children on a roster.
///
/// ## Business Reason
/// The sibling discount schedule is defined for up to three children;
/// larger families enroll through the office, not the form.
pub const MAX_CHILDREN: usize = 3;
