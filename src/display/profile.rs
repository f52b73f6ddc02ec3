//! Profile display formatting
//!
//! Formats profiles and their budget split for terminal output.

use crate::models::{Money, Profile};
use crate::services::AllocationSummary;

/// Format a list of profiles as a table
pub fn format_profile_list(profiles: &[Profile], symbol: &str) -> String {
    if profiles.is_empty() {
        return "No profiles found.\n\nRun 'econome profile create <name>' to get started."
            .to_string();
    }

    let name_width = profiles
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>6}  {:>6}  {:>5}\n",
        "Name",
        "Income",
        "Savings",
        "Needs",
        "Wants",
        "Done",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->6}  {:->6}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for profile in profiles {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>6}  {:>6}  {:>5}\n",
            profile.name,
            profile.income.format_with_symbol(symbol),
            profile.savings_balance.format_with_symbol(symbol),
            profile.needs().len(),
            profile.wants().len(),
            profile.completed_count(),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single profile's details
pub fn format_profile_details(profile: &Profile, symbol: &str) -> String {
    let allocation = &profile.allocation;
    let unit = |value: rust_decimal::Decimal| {
        if allocation.is_by_percentage() {
            format!("{}%", value.normalize())
        } else {
            Money::new(value).format_with_symbol(symbol)
        }
    };

    let mut output = String::new();
    output.push_str(&format!("Profile: {}\n", profile.name));
    output.push_str(&format!(
        "  Income:          {}\n",
        profile.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Savings Balance: {}\n",
        profile.savings_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Allocation Mode: {}\n", allocation.mode));
    output.push_str(&format!("  Needs:           {}\n", unit(allocation.needs)));
    output.push_str(&format!("  Wants:           {}\n", unit(allocation.wants)));
    output.push_str(&format!("  Savings:         {}\n", unit(allocation.savings)));
    output.push_str(&format!(
        "  Items:           {} need(s), {} want(s), {} complete\n",
        profile.needs().len(),
        profile.wants().len(),
        profile.completed_count()
    ));
    output.push_str(&format!(
        "  Updated:         {}\n",
        profile.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// Format the computed needs/wants/savings split for a profile
pub fn format_budget_summary(
    profile: &Profile,
    summary: &AllocationSummary,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget for {} ({} income, {} mode)\n",
        profile.name,
        profile.income.format_with_symbol(symbol),
        profile.allocation.mode
    ));
    output.push_str(&format!("{:-<36}\n", ""));

    let rows = [
        ("Needs", summary.needs),
        ("Wants", summary.wants),
        ("Savings", summary.savings),
    ];
    for (label, amount) in rows {
        output.push_str(&format!(
            "  {:<14}{:>20}\n",
            label,
            amount.format_with_symbol(symbol)
        ));
    }

    output.push_str(&format!("{:-<36}\n", ""));
    output.push_str(&format!(
        "  {:<14}{:>20}\n",
        "Total",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  {:<14}{:>20}\n",
        "Unallocated",
        summary.unallocated.format_with_symbol(symbol)
    ));

    if summary.is_over_allocated() {
        output.push_str("\nWarning: allocations exceed income.\n");
    }

    output
}
