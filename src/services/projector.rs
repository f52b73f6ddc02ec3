//! Goal projector
//!
//! Estimates how many whole months of a fixed contribution it takes for the
//! profile's current savings to cover a want.

use rust_decimal::prelude::ToPrimitive;

use crate::models::{
    FinancialItem, Money, Profile, Projection, MONTHS_ALREADY_MET, MONTHS_UNREACHABLE,
};

/// Months until `want` is affordable, rounded up
///
/// Returns `0` when the want costs nothing or savings already cover it, and
/// `-1` when `monthly_contribution` is zero or negative. The checks run in
/// that order, so a covered goal reports `0` even with no contribution.
/// Estimates past the range of `i64` saturate to `i64::MAX`.
pub fn estimate_goal_completion_months(
    want: &FinancialItem,
    profile: &Profile,
    monthly_contribution: Money,
) -> i64 {
    if !want.cost.is_positive() {
        return MONTHS_ALREADY_MET;
    }

    // The cost is positive here, so an overflowing difference is a huge shortfall.
    let remaining = want.cost.checked_sub(profile.savings_balance);
    if remaining.is_some_and(|r| !r.is_positive()) {
        return MONTHS_ALREADY_MET;
    }

    if !monthly_contribution.is_positive() {
        return MONTHS_UNREACHABLE;
    }

    remaining
        .and_then(|r| r.amount().checked_div(monthly_contribution.amount()))
        .and_then(|months| months.ceil().to_i64())
        .unwrap_or(i64::MAX)
}

/// Estimate wrapped together with the contribution it assumed
pub fn project_goal(
    want: &FinancialItem,
    profile: &Profile,
    monthly_contribution: Money,
) -> Projection {
    let months = estimate_goal_completion_months(want, profile, monthly_contribution);
    Projection::new(monthly_contribution, months)
}
