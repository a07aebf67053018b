//! # Domain Types
//!
//! Core domain types for the tuition pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                               │
//! │                                                                    │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐     │
//! │  │     Grade      │   │ CourseCategory │   │   CourseType   │     │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │     │
//! │  │  PreKJunior    │   │  Regular       │   │  Regular1/2    │     │
//! │  │  PreKMiddle    │   │  Weekly2       │   │  Weekly2       │     │
//! │  │  PreKSenior    │   │  Dreamers      │   │  DreamersDev   │     │
//! │  │  Elem1..Elem6  │   └────────────────┘   │  DreamersMini  │     │
//! │  │  JuniorHigh    │                        │  DreamersYouth │     │
//! │  └────────────────┘                        │  DreamersJunior│     │
//! │                                            └────────────────┘     │
//! │                                                                    │
//! │  ChildEnrollment (entity) ──► PricingLine / PricingSummary (output)│
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Partition Invariant
//! Every `CourseType` belongs to exactly one `CourseCategory`, and a
//! `ChildEnrollment` must always carry a matching pair. The mutators on
//! `ChildEnrollment` route through the auto-correction rules in
//! [`crate::eligibility`] so the invariant cannot be broken from outside.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::eligibility;
use crate::money::Money;

// =============================================================================
// Grade
// =============================================================================

/// School grade of an enrolled child.
///
/// Pricing only ever distinguishes two things about a grade:
/// - whether it is the youngest pre-K tier (reduced rates, Dreamers blocked)
/// - whether it is pre-K at all (Dreamers eligibility warning in the form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// 年少 (3歳児)
    PreKJunior,
    /// 年中 (4歳児)
    PreKMiddle,
    /// 年長 (5歳児)
    PreKSenior,
    /// 小学1年生
    Elem1,
    /// 小学2年生
    Elem2,
    /// 小学3年生
    Elem3,
    /// 小学4年生
    Elem4,
    /// 小学5年生
    Elem5,
    /// 小学6年生
    Elem6,
    /// 中学生
    JuniorHigh,
}

impl Grade {
    /// All grades in selector order (youngest first).
    pub const ALL: [Grade; 10] = [
        Grade::PreKJunior,
        Grade::PreKMiddle,
        Grade::PreKSenior,
        Grade::Elem1,
        Grade::Elem2,
        Grade::Elem3,
        Grade::Elem4,
        Grade::Elem5,
        Grade::Elem6,
        Grade::JuniorHigh,
    ];

    /// True for the youngest pre-K tier (年少).
    ///
    /// This is the only grade that pays the reduced rate, and the only
    /// grade for which the Dreamers category is disabled outright.
    #[inline]
    pub const fn is_pre_k_junior(&self) -> bool {
        matches!(self, Grade::PreKJunior)
    }

    /// True for any of the three pre-K tiers (年少・年中・年長).
    #[inline]
    pub const fn is_pre_k(&self) -> bool {
        matches!(self, Grade::PreKJunior | Grade::PreKMiddle | Grade::PreKSenior)
    }

    /// True for junior high (中学生).
    #[inline]
    pub const fn is_junior_high(&self) -> bool {
        matches!(self, Grade::JuniorHigh)
    }

    /// True when the Dreamers track accepts this grade (elementary and up).
    ///
    /// Note the asymmetry with [`Grade::is_pre_k_junior`]: the form only
    /// hard-disables Dreamers for 年少; the middle and senior pre-K tiers
    /// get an eligibility warning but are not forced out of the category.
    #[inline]
    pub const fn is_dreamers_eligible(&self) -> bool {
        !self.is_pre_k()
    }

    /// Japanese display label used by the enrollment form.
    pub const fn label(&self) -> &'static str {
        match self {
            Grade::PreKJunior => "年少 (3歳児)",
            Grade::PreKMiddle => "年中 (4歳児)",
            Grade::PreKSenior => "年長 (5歳児)",
            Grade::Elem1 => "小学1年生",
            Grade::Elem2 => "小学2年生",
            Grade::Elem3 => "小学3年生",
            Grade::Elem4 => "小学4年生",
            Grade::Elem5 => "小学5年生",
            Grade::Elem6 => "小学6年生",
            Grade::JuniorHigh => "中学生",
        }
    }
}

// =============================================================================
// Course Category
// =============================================================================

/// Top-level course selection. Determines the price table and the legal
/// subset of [`CourseType`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CourseCategory {
    /// 通常クラス (体操・サッカー・チア)
    Regular,
    /// 週2回コース (同一種目)
    Weekly2,
    /// チアリーディング選抜・育成 (TSS Dreamers)
    Dreamers,
}

impl CourseCategory {
    /// All categories in selector order.
    pub const ALL: [CourseCategory; 3] = [
        CourseCategory::Regular,
        CourseCategory::Weekly2,
        CourseCategory::Dreamers,
    ];

    /// The canonical default type a category resets to when selected.
    pub const fn default_course_type(&self) -> CourseType {
        match self {
            CourseCategory::Regular => CourseType::Regular1,
            CourseCategory::Weekly2 => CourseType::Weekly2,
            CourseCategory::Dreamers => CourseType::DreamersDev,
        }
    }

    /// The legal course types for this category (the partition).
    pub const fn course_types(&self) -> &'static [CourseType] {
        match self {
            CourseCategory::Regular => &[CourseType::Regular1, CourseType::Regular2],
            CourseCategory::Weekly2 => &[CourseType::Weekly2],
            CourseCategory::Dreamers => &[
                CourseType::DreamersDev,
                CourseType::DreamersMini,
                CourseType::DreamersYouth,
                CourseType::DreamersJunior,
            ],
        }
    }

    /// Japanese display label used by the enrollment form.
    pub const fn label(&self) -> &'static str {
        match self {
            CourseCategory::Regular => "通常クラス (体操・サッカー・チア)",
            CourseCategory::Weekly2 => "週2回コース (同一種目)",
            CourseCategory::Dreamers => "チアリーディング選抜・育成 (TSS Dreamers)",
        }
    }
}

// =============================================================================
// Course Type
// =============================================================================

/// Concrete course within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CourseType {
    /// 1種目
    Regular1,
    /// 2種目パック
    Regular2,
    /// 週2回コース
    Weekly2,
    /// 育成クラス
    DreamersDev,
    /// 選抜Mini
    DreamersMini,
    /// 選抜Youth
    DreamersYouth,
    /// 選抜Junior
    DreamersJunior,
}

impl CourseType {
    /// The category this type belongs to (reverse of the partition).
    pub const fn category(&self) -> CourseCategory {
        match self {
            CourseType::Regular1 | CourseType::Regular2 => CourseCategory::Regular,
            CourseType::Weekly2 => CourseCategory::Weekly2,
            CourseType::DreamersDev
            | CourseType::DreamersMini
            | CourseType::DreamersYouth
            | CourseType::DreamersJunior => CourseCategory::Dreamers,
        }
    }

    /// Japanese display label used by the enrollment form.
    pub const fn label(&self) -> &'static str {
        match self {
            CourseType::Regular1 => "1種目",
            CourseType::Regular2 => "2種目パック",
            CourseType::Weekly2 => "週2回コース",
            CourseType::DreamersDev => "育成クラス",
            CourseType::DreamersMini => "選抜Mini",
            CourseType::DreamersYouth => "選抜Youth",
            CourseType::DreamersJunior => "選抜Junior",
        }
    }
}

// =============================================================================
// Child Enrollment
// =============================================================================

/// One child's enrollment selection.
///
/// ## Invariants
/// - `course_type.category() == course_category`
/// - `add_on` is false unless [`crate::eligibility::can_select_add_on`] holds
///
/// Both invariants are maintained by the `set_*` mutators, which run the
/// auto-correction rules after every change. Construct with
/// [`ChildEnrollment::new`] and mutate only through those methods.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChildEnrollment {
    /// Opaque stable id (UUID v4, issued by the roster). Never priced.
    pub id: String,

    /// School grade.
    pub grade: Grade,

    /// Selected course category.
    pub course_category: CourseCategory,

    /// Selected course within the category.
    pub course_type: CourseType,

    /// Whether the fixed-price add-on is taken.
    pub add_on: bool,

    /// When this child was added to the roster (bookkeeping only).
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl ChildEnrollment {
    /// Creates an enrollment with the form's default selection:
    /// Elem1 / Regular / Regular1 / no add-on.
    pub fn new(id: impl Into<String>) -> Self {
        ChildEnrollment {
            id: id.into(),
            grade: Grade::Elem1,
            course_category: CourseCategory::Regular,
            course_type: CourseType::Regular1,
            add_on: false,
            added_at: Utc::now(),
        }
    }

    /// Changes the grade, then re-validates the rest of the selection.
    ///
    /// Moving to 年少 while enrolled in Dreamers forces the selection back
    /// to the cheapest legal state (Regular / Regular1, add-on off).
    pub fn set_grade(&mut self, grade: Grade) {
        self.grade = grade;
        eligibility::normalize(self);
    }

    /// Changes the course category.
    ///
    /// A switch to a *different* category resets the course type to that
    /// category's default and clears the add-on unconditionally, even when
    /// the new category would itself qualify for the add-on. This is a
    /// deliberate reset-on-switch policy: a category change invalidates
    /// whatever reasoning led to the previous add-on choice. Re-selecting
    /// the current category is a no-op.
    pub fn set_course_category(&mut self, category: CourseCategory) {
        if category != self.course_category {
            self.course_category = category;
            self.course_type = category.default_course_type();
            self.add_on = false;
        }
        eligibility::normalize(self);
    }

    /// Changes the course type within the current category.
    ///
    /// A type belonging to another category also moves the category,
    /// keeping the partition invariant intact. An add-on that is no
    /// longer eligible after the change is cleared.
    pub fn set_course_type(&mut self, course_type: CourseType) {
        self.course_type = course_type;
        self.course_category = course_type.category();
        eligibility::normalize(self);
    }

    /// Sets the add-on flag. Enabling it on an ineligible selection is
    /// ignored; disabling always succeeds.
    pub fn set_add_on(&mut self, add_on: bool) {
        self.add_on = add_on && eligibility::can_select_add_on(self);
    }
}

// =============================================================================
// Pricing Outputs
// =============================================================================

/// Per-child fee breakdown. Derived, never stored: recomputed from a
/// [`ChildEnrollment`] plus its ordinal position on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingLine {
    /// Base monthly fee from the category's price table.
    pub monthly_fee: Money,
    /// Add-on fee (zero when the add-on is off).
    pub add_on_fee: Money,
    /// Positional sibling discount (zero for the first child).
    pub sibling_discount: Money,
    /// Positional annual fee (first child vs. everyone after).
    pub annual_fee: Money,
    /// `monthly_fee + add_on_fee - sibling_discount`.
    pub total_monthly: Money,
}

/// Aggregate pricing for the whole roster, parallel to input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    /// One line per child, in enrollment order.
    pub lines: Vec<PricingLine>,
    /// Sum of per-child `total_monthly`.
    pub total_monthly: Money,
    /// Sum of per-child `annual_fee`.
    pub total_annual_fee: Money,
    /// Sum of per-child `sibling_discount`.
    pub total_sibling_discount: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
