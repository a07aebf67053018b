//! # Pricing Engine
//!
//! The fee schedule and the pure function that turns an ordered roster of
//! enrollments into a priced summary.
//!
//! ## Computation Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  compute_summary(children)                                         │
//! │                                                                    │
//! │  for each (index, child):                                          │
//! │    base      = price table for child's category                    │
//! │    add_on    = ¥3,500 if the add-on flag is set                    │
//! │    discount  = ¥0 / ¥1,500 / ¥2,000 by ordinal (1st/2nd/3rd)       │
//! │    annual    = ¥8,800 for the 1st child, ¥4,400 after              │
//! │    total     = base + add_on - discount                            │
//! │                                                                    │
//! │  aggregates = element-wise sums over all lines                     │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Order Is Load-Bearing
//! The sibling discount and annual fee key off a child's *position* in the
//! roster, independent of course selection. Callers must pass children in
//! enrollment order; the roster crate preserves it across removals.

use crate::money::Money;
use crate::types::{ChildEnrollment, CourseCategory, CourseType, Grade, PricingLine, PricingSummary};
use crate::{MAX_CHILDREN, MIN_CHILDREN};

// =============================================================================
// Fee Schedule
// =============================================================================

/// Fixed monthly fee for the optional add-on.
pub const ADD_ON_FEE: Money = Money::from_yen(3500);

/// Annual facility fee for the first enrolled child.
pub const ANNUAL_FEE_FIRST: Money = Money::from_yen(8800);

/// Annual facility fee for every child after the first.
pub const ANNUAL_FEE_ADDITIONAL: Money = Money::from_yen(4400);

/// Monthly sibling discount for the second enrolled child.
pub const SIBLING_DISCOUNT_SECOND: Money = Money::from_yen(1500);

/// Monthly sibling discount for the third enrolled child.
pub const SIBLING_DISCOUNT_THIRD: Money = Money::from_yen(2000);

// =============================================================================
// Price Tables
// =============================================================================

/// Monthly fee for the Regular category.
///
/// 年少 pays the reduced rate; every other grade pays the standard rate.
/// The two course types carry independently fixed amounts.
///
/// Course types outside the Regular partition have no price here. The
/// partition invariant upstream makes that unreachable, so it is treated
/// as a logic defect (`debug_assert!`) with a zero fallback in release.
pub fn regular_price(grade: Grade, course_type: CourseType) -> Money {
    let junior = grade.is_pre_k_junior();

    match course_type {
        CourseType::Regular1 => Money::from_yen(if junior { 3550 } else { 7100 }),
        CourseType::Regular2 => Money::from_yen(if junior { 6100 } else { 12200 }),
        other => {
            debug_assert!(false, "non-Regular course type {:?} in regular_price", other);
            Money::zero()
        }
    }
}

/// Monthly fee for the Weekly-2 category. Keyed solely on the 年少 flag.
pub fn weekly2_price(grade: Grade) -> Money {
    if grade.is_pre_k_junior() {
        Money::from_yen(5250)
    } else {
        Money::from_yen(10500)
    }
}

/// Monthly fee for the Dreamers category, per selection tier.
///
/// Grade does not affect the price; eligibility is handled before a
/// Dreamers enrollment can exist at all.
pub fn dreamers_price(course_type: CourseType) -> Money {
    match course_type {
        CourseType::DreamersDev => Money::from_yen(10000),
        CourseType::DreamersMini => Money::from_yen(14500),
        CourseType::DreamersYouth => Money::from_yen(18500),
        CourseType::DreamersJunior => Money::from_yen(18500),
        other => {
            debug_assert!(false, "non-Dreamers course type {:?} in dreamers_price", other);
            Money::zero()
        }
    }
}

/// Base monthly fee for an enrollment: dispatches to the category's table.
pub fn base_monthly_fee(child: &ChildEnrollment) -> Money {
    match child.course_category {
        CourseCategory::Regular => regular_price(child.grade, child.course_type),
        CourseCategory::Weekly2 => weekly2_price(child.grade),
        CourseCategory::Dreamers => dreamers_price(child.course_type),
    }
}

// =============================================================================
// Positional Fees
// =============================================================================

/// Sibling discount by 0-based roster position. Strictly positional:
/// the course selection never changes it.
pub fn sibling_discount(index: usize) -> Money {
    match index {
        1 => SIBLING_DISCOUNT_SECOND,
        2 => SIBLING_DISCOUNT_THIRD,
        _ => Money::zero(),
    }
}

/// Annual fee by 0-based roster position: first child vs. everyone after.
pub fn annual_fee(index: usize) -> Money {
    if index == 0 {
        ANNUAL_FEE_FIRST
    } else {
        ANNUAL_FEE_ADDITIONAL
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Prices a single enrollment at a given roster position.
pub fn price_child(child: &ChildEnrollment, index: usize) -> PricingLine {
    let monthly_fee = base_monthly_fee(child);
    let add_on_fee = if child.add_on { ADD_ON_FEE } else { Money::zero() };
    let sibling_discount = sibling_discount(index);
    let annual_fee = annual_fee(index);

    PricingLine {
        monthly_fee,
        add_on_fee,
        sibling_discount,
        annual_fee,
        total_monthly: monthly_fee + add_on_fee - sibling_discount,
    }
}

/// Computes the full pricing summary for an ordered roster.
///
/// The roster crate enforces the 1..=3 bound with typed errors; the engine
/// itself only `debug_assert!`s it, staying total in release builds. Lines
/// come back parallel to the input, and every aggregate is the plain sum of
/// its per-line field.
pub fn compute_summary(children: &[ChildEnrollment]) -> PricingSummary {
    debug_assert!(
        (MIN_CHILDREN..=MAX_CHILDREN).contains(&children.len()),
        "roster size {} outside {}..={}",
        children.len(),
        MIN_CHILDREN,
        MAX_CHILDREN
    );

    let lines: Vec<PricingLine> = children
        .iter()
        .enumerate()
        .map(|(index, child)| price_child(child, index))
        .collect();

    PricingSummary {
        total_monthly: lines.iter().map(|l| l.total_monthly).sum(),
        total_annual_fee: lines.iter().map(|l| l.annual_fee).sum(),
        total_sibling_discount: lines.iter().map(|l| l.sibling_discount).sum(),
        lines,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn child(grade: Grade, category: CourseCategory, ty: CourseType, add_on: bool) -> ChildEnrollment {
        let mut c = ChildEnrollment::new("test");
        c.grade = grade;
        c.course_category = category;
        c.course_type = ty;
        c.add_on = add_on;
        c
    }

    fn regular1(grade: Grade) -> ChildEnrollment {
        child(grade, CourseCategory::Regular, CourseType::Regular1, false)
    }

    #[test]
    fn test_regular_prices() {
        for grade in Grade::ALL {
            let junior = grade.is_pre_k_junior();
            assert_eq!(
                regular_price(grade, CourseType::Regular1).yen(),
                if junior { 3550 } else { 7100 }
            );
            assert_eq!(
                regular_price(grade, CourseType::Regular2).yen(),
                if junior { 6100 } else { 12200 }
            );
        }
    }

    #[test]
    fn test_weekly2_prices() {
        assert_eq!(weekly2_price(Grade::PreKJunior).yen(), 5250);
        for grade in Grade::ALL.into_iter().filter(|g| !g.is_pre_k_junior()) {
            assert_eq!(weekly2_price(grade).yen(), 10500);
        }
    }

    #[test]
    fn test_dreamers_prices() {
        assert_eq!(dreamers_price(CourseType::DreamersDev).yen(), 10000);
        assert_eq!(dreamers_price(CourseType::DreamersMini).yen(), 14500);
        assert_eq!(dreamers_price(CourseType::DreamersYouth).yen(), 18500);
        assert_eq!(dreamers_price(CourseType::DreamersJunior).yen(), 18500);
    }

    #[test]
    fn test_positional_fees() {
        assert_eq!(sibling_discount(0), Money::zero());
        assert_eq!(sibling_discount(1).yen(), 1500);
        assert_eq!(sibling_discount(2).yen(), 2000);

        assert_eq!(annual_fee(0).yen(), 8800);
        assert_eq!(annual_fee(1).yen(), 4400);
        assert_eq!(annual_fee(2).yen(), 4400);
    }

    #[test]
    fn test_discount_ignores_course_selection() {
        // Same position, wildly different courses: identical discount
        let cheap = price_child(&regular1(Grade::PreKJunior), 1);
        let pricey = price_child(
            &child(Grade::Elem6, CourseCategory::Dreamers, CourseType::DreamersYouth, true),
            1,
        );
        assert_eq!(cheap.sibling_discount, pricey.sibling_discount);
    }

    #[test]
    fn test_scenario_single_child_elem1_regular1() {
        let summary = compute_summary(&[regular1(Grade::Elem1)]);

        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].monthly_fee.yen(), 7100);
        assert_eq!(summary.lines[0].annual_fee.yen(), 8800);
        assert_eq!(summary.lines[0].total_monthly.yen(), 7100);
        assert_eq!(summary.total_monthly.yen(), 7100);
    }

    #[test]
    fn test_scenario_single_child_pre_k_junior_reduced_rate() {
        let summary = compute_summary(&[regular1(Grade::PreKJunior)]);

        assert_eq!(summary.lines[0].monthly_fee.yen(), 3550);
        assert_eq!(summary.lines[0].annual_fee.yen(), 8800);
    }

    #[test]
    fn test_scenario_three_siblings() {
        let roster = [
            regular1(Grade::Elem1),
            regular1(Grade::Elem1),
            regular1(Grade::Elem1),
        ];
        let summary = compute_summary(&roster);

        assert_eq!(summary.lines[0].total_monthly.yen(), 7100);
        assert_eq!(summary.lines[1].total_monthly.yen(), 5600); // 7100 - 1500
        assert_eq!(summary.lines[2].total_monthly.yen(), 5100); // 7100 - 2000

        assert_eq!(summary.total_monthly.yen(), 17800);
        assert_eq!(summary.total_annual_fee.yen(), 17600); // 8800 + 4400 + 4400
        assert_eq!(summary.total_sibling_discount.yen(), 3500);
    }

    #[test]
    fn test_scenario_dreamers_mini_with_add_on() {
        let roster = [child(
            Grade::Elem3,
            CourseCategory::Dreamers,
            CourseType::DreamersMini,
            true,
        )];
        let summary = compute_summary(&roster);

        assert_eq!(summary.lines[0].monthly_fee.yen(), 14500);
        assert_eq!(summary.lines[0].add_on_fee.yen(), 3500);
        assert_eq!(summary.lines[0].total_monthly.yen(), 18000);
    }

    #[test]
    fn test_summary_additivity() {
        let roster = [
            child(Grade::PreKJunior, CourseCategory::Weekly2, CourseType::Weekly2, true),
            child(Grade::Elem4, CourseCategory::Regular, CourseType::Regular2, true),
            child(Grade::JuniorHigh, CourseCategory::Dreamers, CourseType::DreamersJunior, false),
        ];
        let summary = compute_summary(&roster);

        let monthly: Money = summary.lines.iter().map(|l| l.total_monthly).sum();
        let annual: Money = summary.lines.iter().map(|l| l.annual_fee).sum();
        let discount: Money = summary.lines.iter().map(|l| l.sibling_discount).sum();

        assert_eq!(summary.total_monthly, monthly);
        assert_eq!(summary.total_annual_fee, annual);
        assert_eq!(summary.total_sibling_discount, discount);
    }

    #[test]
    fn test_every_total_is_positive_with_published_schedule() {
        // The cheapest possible selection at the deepest discount still
        // clears zero: 3550 - 2000 = 1550
        for category in CourseCategory::ALL {
            for ty in category.course_types() {
                for grade in Grade::ALL {
                    for index in 0..MAX_CHILDREN {
                        let c = child(grade, category, *ty, false);
                        let line = price_child(&c, index);
                        assert!(
                            line.total_monthly.is_positive(),
                            "{:?}/{:?}/{:?} at index {} priced {}",
                            grade,
                            category,
                            ty,
                            index,
                            line.total_monthly
                        );
                    }
                }
            }
        }
    }
}
