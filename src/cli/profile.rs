//! Profile CLI commands
//!
//! Implements CLI commands for profile management.

use clap::Subcommand;

use super::{ensure_saved, parse_money};
use crate::config::Settings;
use crate::display::profile::{format_profile_details, format_profile_list};
use crate::error::{EconomeError, EconomeResult};
use crate::models::Profile;
use crate::storage::ProfileStore;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create a new profile
    Create {
        /// Profile name (unique, case-insensitive)
        name: String,
        /// Monthly income (e.g., "4000.00" or "4000")
        #[arg(short, long, default_value = "0")]
        income: String,
        /// Current savings balance
        #[arg(short, long, default_value = "0")]
        savings: String,
    },
    /// List all profiles
    List,
    /// Show profile details
    Show {
        /// Profile name
        name: String,
    },
    /// Delete a profile and all of its needs and wants
    Delete {
        /// Profile name
        name: String,
    },
    /// Change a profile's monthly income
    SetIncome {
        /// Profile name
        name: String,
        /// New income
        amount: String,
    },
    /// Overwrite a profile's savings balance
    SetSavings {
        /// Profile name
        name: String,
        /// New savings balance
        amount: String,
    },
}

/// Handle a profile command
pub fn handle_profile_command(
    store: &mut ProfileStore,
    settings: &Settings,
    cmd: ProfileCommands,
) -> EconomeResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ProfileCommands::Create {
            name,
            income,
            savings,
        } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(EconomeError::Validation(
                    "Profile name cannot be empty".to_string(),
                ));
            }
            if store.find_profile_by_name(&name).is_some() {
                return Err(EconomeError::duplicate_profile(&name));
            }

            let income = parse_money("income", &income)?;
            let savings = parse_money("savings", &savings)?;

            let profile = Profile::new(name, income, savings);
            let summary = profile.to_string();
            store.add_profile(profile);
            ensure_saved(store)?;
            println!("Created profile: {}", summary);
        }

        ProfileCommands::List => {
            print!("{}", format_profile_list(store.profiles(), symbol));
        }

        ProfileCommands::Show { name } => {
            let profile = store
                .find_profile_by_name(&name)
                .ok_or_else(|| EconomeError::profile_not_found(&name))?;
            print!("{}", format_profile_details(profile, symbol));
        }

        ProfileCommands::Delete { name } => {
            if !store.delete_profile(&name) {
                return Err(EconomeError::profile_not_found(&name));
            }
            ensure_saved(store)?;
            println!("Deleted profile: {}", name);
        }

        ProfileCommands::SetIncome { name, amount } => {
            let income = parse_money("income", &amount)?;
            let updated = store
                .with_profile(&name, |p| {
                    p.set_income(income);
                    p.to_string()
                })
                .ok_or_else(|| EconomeError::profile_not_found(&name))?;
            ensure_saved(store)?;
            println!("Updated profile: {}", updated);
        }

        ProfileCommands::SetSavings { name, amount } => {
            let balance = parse_money("savings balance", &amount)?;
            let profile_name = store
                .with_profile(&name, |p| {
                    p.set_savings_balance(balance);
                    p.name.clone()
                })
                .ok_or_else(|| EconomeError::profile_not_found(&name))?;
            ensure_saved(store)?;
            println!(
                "Savings balance for {} is now {}",
                profile_name,
                balance.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
