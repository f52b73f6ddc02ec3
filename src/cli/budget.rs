//! Budget CLI commands
//!
//! Allocation settings, the computed needs/wants/savings split, and goal
//! projections for wants.

use clap::Args;

use super::{ensure_saved, find_profile, parse_decimal, parse_money};
use crate::config::Settings;
use crate::display::item::format_projection;
use crate::display::profile::format_budget_summary;
use crate::error::{EconomeError, EconomeResult};
use crate::models::AllocationMode;
use crate::services::{
    apply_savings_to_profile, calculate_projected_savings, project_goal, summarize,
};
use crate::storage::ProfileStore;

/// Arguments for `econome allocate`
#[derive(Args)]
pub struct AllocateArgs {
    /// Profile name
    pub profile: String,
    /// Needs allocation (percent of income, or an amount with --fixed)
    #[arg(long)]
    pub needs: String,
    /// Wants allocation
    #[arg(long)]
    pub wants: String,
    /// Savings allocation
    #[arg(long)]
    pub savings: String,
    /// Treat the three values as fixed amounts instead of percentages
    #[arg(long)]
    pub fixed: bool,
}

/// Set a profile's needs/wants/savings split
///
/// The three values are stored as given; they are not required to add up
/// to 100% or to the income.
pub fn handle_allocate_command(
    store: &mut ProfileStore,
    settings: &Settings,
    args: AllocateArgs,
) -> EconomeResult<()> {
    let needs = parse_decimal("needs allocation", &args.needs)?;
    let wants = parse_decimal("wants allocation", &args.wants)?;
    let savings = parse_decimal("savings allocation", &args.savings)?;
    let mode = if args.fixed {
        AllocationMode::Fixed
    } else {
        AllocationMode::Percentage
    };

    let output = store
        .with_profile(&args.profile, |p| {
            p.set_allocations(needs, wants, savings, mode);
            format_budget_summary(p, &summarize(p), &settings.currency_symbol)
        })
        .ok_or_else(|| EconomeError::profile_not_found(&args.profile))?;
    ensure_saved(store)?;

    print!("{}", output);
    Ok(())
}

/// Show the computed split, optionally moving the savings amount into the
/// profile's savings balance
pub fn handle_budget_command(
    store: &mut ProfileStore,
    settings: &Settings,
    profile: &str,
    apply: bool,
) -> EconomeResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let found = find_profile(store, profile)?;
    print!("{}", format_budget_summary(found, &summarize(found), symbol));

    if !apply {
        return Ok(());
    }

    let (applied, balance) = store
        .with_profile(profile, |p| {
            let applied = apply_savings_to_profile(p);
            (applied, p.savings_balance)
        })
        .ok_or_else(|| EconomeError::profile_not_found(profile))?;
    ensure_saved(store)?;

    println!();
    println!(
        "Applied {} to savings. New balance: {}",
        applied.format_with_symbol(symbol),
        balance.format_with_symbol(symbol)
    );
    Ok(())
}

/// Estimate how many months until a want is covered
///
/// Without `--monthly` the profile's projected savings amount is used as
/// the contribution.
pub fn handle_project_command(
    store: &ProfileStore,
    settings: &Settings,
    profile: &str,
    number: usize,
    monthly: Option<String>,
) -> EconomeResult<()> {
    let found = find_profile(store, profile)?;
    let want = number
        .checked_sub(1)
        .and_then(|index| found.wants().get(index))
        .ok_or_else(|| {
            EconomeError::item_not_found("Want", format!("#{} in profile '{}'", number, found.name))
        })?;

    let contribution = match monthly {
        Some(amount) => parse_money("monthly contribution", &amount)?,
        None => calculate_projected_savings(found),
    };

    let projection = project_goal(want, found, contribution);
    print!(
        "{}",
        format_projection(want, found, &projection, &settings.currency_symbol)
    );
    Ok(())
}
