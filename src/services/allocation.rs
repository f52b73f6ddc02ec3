//! Allocation engine
//!
//! Turns a profile's allocation settings into currency amounts. Every amount
//! is derived on demand from `income` and the allocation values, so changing
//! either is reflected by the next call without any cache to invalidate.
//!
//! No bounds are checked: negative income, negative allocations, and
//! percentages over 100 are computed literally. Results past the decimal
//! range saturate at `Money::MAX` or `Money::MIN`.

use rust_decimal::Decimal;

use crate::models::{Money, Profile};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

fn allocated_amount(profile: &Profile, value: Decimal) -> Money {
    if profile.allocation.is_by_percentage() {
        profile.income * (value / ONE_HUNDRED)
    } else {
        Money::new(value)
    }
}

/// Amount set aside for needs
pub fn calculate_needs_amount(profile: &Profile) -> Money {
    allocated_amount(profile, profile.allocation.needs)
}

/// Amount set aside for wants
pub fn calculate_wants_amount(profile: &Profile) -> Money {
    allocated_amount(profile, profile.allocation.wants)
}

/// Preview of the savings contribution; the balance is left untouched
pub fn calculate_projected_savings(profile: &Profile) -> Money {
    allocated_amount(profile, profile.allocation.savings)
}

/// Add the projected savings to the profile's balance and return the amount added
pub fn apply_savings_to_profile(profile: &mut Profile) -> Money {
    let savings = calculate_projected_savings(profile);
    let balance = profile.savings_balance + savings;
    profile.set_savings_balance(balance);
    savings
}

/// All three category amounts for one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSummary {
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
    /// needs + wants + savings
    pub total: Money,
    /// income - total; negative when the split exceeds income
    pub unallocated: Money,
}

impl AllocationSummary {
    pub fn is_over_allocated(&self) -> bool {
        self.unallocated.is_negative()
    }
}

/// Compute every category amount at once
pub fn summarize(profile: &Profile) -> AllocationSummary {
    let needs = calculate_needs_amount(profile);
    let wants = calculate_wants_amount(profile);
    let savings = calculate_projected_savings(profile);
    let total = needs + wants + savings;

    AllocationSummary {
        needs,
        wants,
        savings,
        total,
        unallocated: profile.income - total,
    }
}
