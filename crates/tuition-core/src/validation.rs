//! # Validation Module
//!
//! Input validation for data arriving from outside the core (deserialized
//! form state, roster operations). Selections themselves are drawn from
//! closed enums, so there is little to validate beyond ids, bounds, and
//! the category/type partition.
//!
//! ## Usage
//! ```rust
//! use tuition_core::validation::{validate_child_id, validate_roster_size};
//!
//! validate_child_id("550e8400-e29b-41d4-a716-446655440000").unwrap();
//! validate_roster_size(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::{CourseCategory, CourseType};
use crate::{MAX_CHILDREN, MIN_CHILDREN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a child record id.
///
/// ## Rules
/// - Must not be empty
/// - Must be a valid UUID (the roster issues v4 ids)
pub fn validate_child_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

/// Validates the roster size.
///
/// ## Rules
/// - At least one child (the form always shows one)
/// - At most three children
pub fn validate_roster_size(children: usize) -> ValidationResult<()> {
    if !(MIN_CHILDREN..=MAX_CHILDREN).contains(&children) {
        return Err(ValidationError::OutOfRange {
            field: "children".to_string(),
            min: MIN_CHILDREN as i64,
            max: MAX_CHILDREN as i64,
        });
    }

    Ok(())
}

/// Validates that a course type belongs to a category's partition.
///
/// The enrollment mutators keep this invariant automatically; this check
/// exists for records built from raw deserialized state.
pub fn validate_course_selection(
    category: CourseCategory,
    course_type: CourseType,
) -> ValidationResult<()> {
    if course_type.category() != category {
        return Err(ValidationError::NotAllowed {
            field: "course_type".to_string(),
            allowed: category
                .course_types()
                .iter()
                .map(|ty| format!("{:?}", ty))
                .collect(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
