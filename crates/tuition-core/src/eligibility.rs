//! # Eligibility Rules
//!
//! Pure predicates that decide which grade/category/type/add-on
//! combinations are legal together, plus the auto-correction step that
//! restores a legal state after a field change.
//!
//! ## Rule Order
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  normalize(child)                                                  │
//! │                                                                    │
//! │  1. grade is 年少 AND category is Dreamers?                        │
//! │     └─► force Regular / Regular1, add-on off                       │
//! │        (the cheapest legal state; Dreamers is closed to 年少)      │
//! │                                                                    │
//! │  2. add-on set but no longer eligible?                             │
//! │     └─► clear it                                                   │
//! │                                                                    │
//! │  Applying normalize to an already-valid record changes nothing.    │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reset-on-category-switch rule lives in
//! [`ChildEnrollment::set_course_category`] rather than here: it depends on
//! *which* field the user touched, not on the resulting state, so a pure
//! state-based normalize cannot express it.

use crate::types::{ChildEnrollment, CourseCategory, CourseType};

/// True when the add-on may be selected for the current course selection.
///
/// ## Rules
/// - the 2-subject Regular pack qualifies (multi-sport benefit)
/// - any Weekly-2 enrollment qualifies (multi-sport benefit)
/// - any Dreamers enrollment qualifies (athlete benefit)
/// - the single-subject Regular course is the one combination that does not
///
/// Grade is deliberately not consulted here. Dreamers plus 年少 is the only
/// combination where that could matter, and [`normalize`] makes it
/// unrepresentable before this predicate is ever asked.
pub fn can_select_add_on(child: &ChildEnrollment) -> bool {
    if child.course_type == CourseType::Regular2
        || child.course_category == CourseCategory::Weekly2
    {
        return true;
    }
    child.course_category == CourseCategory::Dreamers
}

/// Restores the enrollment invariants after a field change. Idempotent.
///
/// Called by every `ChildEnrollment` mutator; callers holding a record
/// built by hand (e.g. deserialized form state) can also run it directly.
pub fn normalize(child: &mut ChildEnrollment) {
    // Dreamers is closed to 年少: fall back to the default selection.
    if child.grade.is_pre_k_junior() && child.course_category == CourseCategory::Dreamers {
        child.course_category = CourseCategory::Regular;
        child.course_type = CourseType::Regular1;
        child.add_on = false;
    }

    if child.add_on && !can_select_add_on(child) {
        child.add_on = false;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Grade;

    fn child_with(category: CourseCategory, ty: CourseType) -> ChildEnrollment {
        let mut child = ChildEnrollment::new("test");
        child.course_category = category;
        child.course_type = ty;
        child
    }

    #[test]
    fn test_add_on_truth_table() {
        // False only for Regular / Regular1
        assert!(!can_select_add_on(&child_with(
            CourseCategory::Regular,
            CourseType::Regular1
        )));

        assert!(can_select_add_on(&child_with(
            CourseCategory::Regular,
            CourseType::Regular2
        )));
        assert!(can_select_add_on(&child_with(
            CourseCategory::Weekly2,
            CourseType::Weekly2
        )));
        for ty in CourseCategory::Dreamers.course_types() {
            assert!(can_select_add_on(&child_with(CourseCategory::Dreamers, *ty)));
        }
    }

    #[test]
    fn test_normalize_forces_pre_k_junior_out_of_dreamers() {
        let mut child = child_with(CourseCategory::Dreamers, CourseType::DreamersMini);
        child.grade = Grade::PreKJunior;
        child.add_on = true;

        normalize(&mut child);

        assert_eq!(child.course_category, CourseCategory::Regular);
        assert_eq!(child.course_type, CourseType::Regular1);
        assert!(!child.add_on);
    }

    #[test]
    fn test_normalize_leaves_other_pre_k_tiers_in_dreamers() {
        // Only 年少 is forced out; 年中/年長 keep their selection
        for grade in [Grade::PreKMiddle, Grade::PreKSenior] {
            let mut child = child_with(CourseCategory::Dreamers, CourseType::DreamersDev);
            child.grade = grade;

            normalize(&mut child);

            assert_eq!(child.course_category, CourseCategory::Dreamers);
            assert_eq!(child.course_type, CourseType::DreamersDev);
        }
    }

    #[test]
    fn test_normalize_clears_ineligible_add_on() {
        let mut child = child_with(CourseCategory::Regular, CourseType::Regular1);
        child.add_on = true;

        normalize(&mut child);

        assert!(!child.add_on);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for category in CourseCategory::ALL {
            for ty in category.course_types() {
                for grade in Grade::ALL {
                    for add_on in [false, true] {
                        let mut child = child_with(category, *ty);
                        child.grade = grade;
                        child.add_on = add_on;

                        normalize(&mut child);
                        let once = child.clone();
                        normalize(&mut child);

                        assert_eq!(child.grade, once.grade);
                        assert_eq!(child.course_category, once.course_category);
                        assert_eq!(child.course_type, once.course_type);
                        assert_eq!(child.add_on, once.add_on);
                    }
                }
            }
        }
    }
}
