//! # tuition-roster: Enrollment Roster for the TSS Tuition Calculator
//!
//! The collection-manager collaborator around [`tuition_core`]. It owns
//! child identity, the 1..=3 roster bound, and field mutation, and asks
//! the core for a fresh [`tuition_core::PricingSummary`] on every read.
//!
//! All state is transient, held only for the lifetime of the form session.
//!
//! ## Example
//! ```rust
//! use tuition_roster::Roster;
//! use tuition_core::CourseType;
//!
//! let mut roster = Roster::new();
//! let id = roster.children()[0].id.clone();
//!
//! roster.set_course_type(&id, CourseType::Regular2)?;
//! roster.set_add_on(&id, true)?;
//! roster.add_child()?;
//!
//! let summary = roster.summary();
//! // 12200 + 3500 add-on, then 7100 - 1500 for the sibling
//! assert_eq!(summary.total_monthly.yen(), 15700 + 5600);
//! # Ok::<(), tuition_core::CoreError>(())
//! ```

pub mod roster;

pub use roster::Roster;
