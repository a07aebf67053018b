//! # Enrollment Roster
//!
//! Manages the ordered collection of enrolled children behind the form.
//!
//! ## Roster Operations Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                    Roster Operations                               │
//! │                                                                    │
//! │  Form Action              Roster Method          State Change      │
//! │  ───────────              ─────────────          ────────────      │
//! │                                                                    │
//! │  "子どもを追加" ─────────► add_child() ─────────► push(default)    │
//! │                                                                    │
//! │  grade selector ─────────► set_grade() ─────────► field + normalize│
//! │                                                                    │
//! │  category selector ──────► set_course_category()► reset-on-switch  │
//! │                                                                    │
//! │  "削除" ─────────────────► remove_child() ──────► retain(others)   │
//! │                                                                    │
//! │  summary panel ──────────► summary() ───────────► (recomputed)     │
//! │                                                                    │
//! │  NOTE: position in `children` is enrollment order. It is the       │
//! │        ordinal key for sibling discounts and annual fees, so       │
//! │        removal keeps the survivors' relative order.                │
//! └────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use tuition_core::pricing::compute_summary;
use tuition_core::{
    ChildEnrollment, CoreError, CoreResult, CourseCategory, CourseType, Grade, PricingSummary,
    MAX_CHILDREN, MIN_CHILDREN,
};

/// The enrollment roster: an ordered list of 1 to 3 children.
///
/// ## Invariants
/// - `children.len()` stays within `MIN_CHILDREN..=MAX_CHILDREN`
/// - every child id is unique (UUID v4, issued here)
/// - child order is enrollment order and survives removals
///
/// The roster is a plain single-threaded value; the embedding form owns
/// it for the lifetime of the session and recomputes the summary after
/// every mutation. Nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    /// Enrolled children, in enrollment order.
    pub children: Vec<ChildEnrollment>,

    /// When the roster was created.
    pub created_at: DateTime<Utc>,
}

impl Roster {
    /// Creates a roster with one child carrying the default selection.
    pub fn new() -> Self {
        Roster {
            children: vec![ChildEnrollment::new(Uuid::new_v4().to_string())],
            created_at: Utc::now(),
        }
    }

    /// Adds a child with the default selection at the end of the roster.
    ///
    /// ## Errors
    /// `RosterFull` when three children are already enrolled.
    pub fn add_child(&mut self) -> CoreResult<&ChildEnrollment> {
        if self.children.len() >= MAX_CHILDREN {
            return Err(CoreError::RosterFull { max: MAX_CHILDREN });
        }

        let child = ChildEnrollment::new(Uuid::new_v4().to_string());
        let position = self.children.len();
        info!(child_id = %child.id, position, "Child added to roster");
        self.children.push(child);
        Ok(&self.children[position])
    }

    /// Removes a child by id, returning the removed record.
    ///
    /// Survivors keep their relative order, so a third child promoted to
    /// second position picks up the second-child discount on the next
    /// summary read.
    ///
    /// ## Errors
    /// - `LastChild` when only one child remains
    /// - `ChildNotFound` for an unknown id
    pub fn remove_child(&mut self, id: &str) -> CoreResult<ChildEnrollment> {
        if self.children.len() <= MIN_CHILDREN {
            return Err(CoreError::LastChild { min: MIN_CHILDREN });
        }

        let index = self.index_of(id)?;
        let removed = self.children.remove(index);
        info!(child_id = %removed.id, position = index, "Child removed from roster");
        Ok(removed)
    }

    /// Returns a child by id.
    pub fn child(&self, id: &str) -> CoreResult<&ChildEnrollment> {
        let index = self.index_of(id)?;
        Ok(&self.children[index])
    }

    /// Returns all children in enrollment order.
    pub fn children(&self) -> &[ChildEnrollment] {
        &self.children
    }

    /// Number of enrolled children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always false by invariant; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Changes a child's grade, auto-correcting the course selection.
    pub fn set_grade(&mut self, id: &str, grade: Grade) -> CoreResult<()> {
        let index = self.index_of(id)?;
        debug!(child_id = %id, grade = ?grade, "set_grade");
        self.children[index].set_grade(grade);
        Ok(())
    }

    /// Changes a child's course category (reset-on-switch applies).
    pub fn set_course_category(&mut self, id: &str, category: CourseCategory) -> CoreResult<()> {
        let index = self.index_of(id)?;
        debug!(child_id = %id, category = ?category, "set_course_category");
        self.children[index].set_course_category(category);
        Ok(())
    }

    /// Changes a child's course type within the current category.
    pub fn set_course_type(&mut self, id: &str, course_type: CourseType) -> CoreResult<()> {
        let index = self.index_of(id)?;
        debug!(child_id = %id, course_type = ?course_type, "set_course_type");
        self.children[index].set_course_type(course_type);
        Ok(())
    }

    /// Sets a child's add-on flag (ignored when ineligible).
    pub fn set_add_on(&mut self, id: &str, add_on: bool) -> CoreResult<()> {
        let index = self.index_of(id)?;
        debug!(child_id = %id, add_on, "set_add_on");
        self.children[index].set_add_on(add_on);
        Ok(())
    }

    /// Computes a fresh pricing summary for the current roster.
    ///
    /// No caching: the previous summary is disposable and the computation
    /// is O(children) with children ≤ 3.
    pub fn summary(&self) -> PricingSummary {
        compute_summary(&self.children)
    }

    fn index_of(&self, id: &str) -> CoreResult<usize> {
        self.children
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CoreError::ChildNotFound(id.to_string()))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn first_id(roster: &Roster) -> String {
        roster.children()[0].id.clone()
    }

    #[test]
    fn test_new_roster_has_one_default_child() {
        let roster = Roster::new();
        assert_eq!(roster.len(), 1);

        let child = &roster.children()[0];
        assert_eq!(child.grade, Grade::Elem1);
        assert_eq!(child.course_category, CourseCategory::Regular);
        assert_eq!(child.course_type, CourseType::Regular1);
        assert!(!child.add_on);
        // Ids are real UUIDs
        assert!(Uuid::parse_str(&child.id).is_ok());
    }

    #[test]
    fn test_roster_bounds() {
        let mut roster = Roster::new();
        roster.add_child().unwrap();
        roster.add_child().unwrap();

        assert!(matches!(
            roster.add_child(),
            Err(CoreError::RosterFull { max: 3 })
        ));

        let id2 = roster.children()[1].id.clone();
        let id3 = roster.children()[2].id.clone();
        roster.remove_child(&id3).unwrap();
        roster.remove_child(&id2).unwrap();

        let last = first_id(&roster);
        assert!(matches!(
            roster.remove_child(&last),
            Err(CoreError::LastChild { min: 1 })
        ));
    }

    #[test]
    fn test_remove_unknown_child() {
        let mut roster = Roster::new();
        roster.add_child().unwrap();
        assert!(matches!(
            roster.remove_child("missing"),
            Err(CoreError::ChildNotFound(_))
        ));
    }

    #[test]
    fn test_removal_reindexes_sibling_discount() {
        let mut roster = Roster::new();
        roster.add_child().unwrap();
        roster.add_child().unwrap();

        // Third child currently gets the ¥2,000 discount
        let summary = roster.summary();
        assert_eq!(summary.lines[2].sibling_discount.yen(), 2000);

        // Remove the second child: the old third child becomes second
        let id2 = roster.children()[1].id.clone();
        let id3 = roster.children()[2].id.clone();
        roster.remove_child(&id2).unwrap();

        assert_eq!(roster.children()[1].id, id3);
        let summary = roster.summary();
        assert_eq!(summary.lines[1].sibling_discount.yen(), 1500);
        assert_eq!(summary.total_sibling_discount.yen(), 1500);
    }

    #[test]
    fn test_grade_change_fires_auto_correction() {
        let mut roster = Roster::new();
        let id = first_id(&roster);

        roster.set_course_category(&id, CourseCategory::Dreamers).unwrap();
        roster.set_add_on(&id, true).unwrap();
        assert!(roster.child(&id).unwrap().add_on);

        // Dropping to 年少 while in Dreamers resets the whole selection
        roster.set_grade(&id, Grade::PreKJunior).unwrap();

        let child = roster.child(&id).unwrap();
        assert_eq!(child.course_category, CourseCategory::Regular);
        assert_eq!(child.course_type, CourseType::Regular1);
        assert!(!child.add_on);
    }

    #[test]
    fn test_category_switch_resets_type_and_add_on() {
        let mut roster = Roster::new();
        let id = first_id(&roster);

        roster.set_course_type(&id, CourseType::Regular2).unwrap();
        roster.set_add_on(&id, true).unwrap();

        // Weekly2 would itself qualify for the add-on, but a category
        // switch clears it regardless
        roster.set_course_category(&id, CourseCategory::Weekly2).unwrap();

        let child = roster.child(&id).unwrap();
        assert_eq!(child.course_type, CourseType::Weekly2);
        assert!(!child.add_on);
    }

    #[test]
    fn test_reselecting_same_category_keeps_selection() {
        let mut roster = Roster::new();
        let id = first_id(&roster);

        roster.set_course_type(&id, CourseType::Regular2).unwrap();
        roster.set_add_on(&id, true).unwrap();

        roster.set_course_category(&id, CourseCategory::Regular).unwrap();

        let child = roster.child(&id).unwrap();
        assert_eq!(child.course_type, CourseType::Regular2);
        assert!(child.add_on);
    }

    #[test]
    fn test_add_on_ignored_when_ineligible() {
        let mut roster = Roster::new();
        let id = first_id(&roster);

        // Default Regular1 is the one ineligible selection
        roster.set_add_on(&id, true).unwrap();
        assert!(!roster.child(&id).unwrap().add_on);
    }

    #[test]
    fn test_summary_recomputes_after_every_mutation() {
        let mut roster = Roster::new();
        let id = first_id(&roster);
        assert_eq!(roster.summary().total_monthly.yen(), 7100);

        roster.set_course_type(&id, CourseType::Regular2).unwrap();
        assert_eq!(roster.summary().total_monthly.yen(), 12200);

        roster.set_add_on(&id, true).unwrap();
        assert_eq!(roster.summary().total_monthly.yen(), 15700);

        roster.add_child().unwrap();
        // Second child: 7100 - 1500 = 5600
        assert_eq!(roster.summary().total_monthly.yen(), 21300);
        assert_eq!(roster.summary().total_annual_fee.yen(), 13200);
    }

    #[test]
    fn test_roster_serializes_with_camel_case_keys() {
        let roster = Roster::new();
        let json = serde_json::to_value(&roster).unwrap();
        assert!(json.get("children").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
