//! Need and want CLI commands
//!
//! Items are addressed by their 1-based position in the profile's need or
//! want list, as printed by `need list` / `want list`.

use clap::Subcommand;

use super::{ensure_saved, find_profile, parse_date, parse_money};
use crate::config::Settings;
use crate::display::item::{format_item_list, format_task_list};
use crate::error::{EconomeError, EconomeResult};
use crate::models::{FinancialItem, ItemCategory, ItemId, Money, Profile};
use crate::storage::ProfileStore;

/// Need subcommands
#[derive(Subcommand)]
pub enum NeedCommands {
    /// Add a need (bill, obligation) to a profile
    Add {
        /// Profile name
        profile: String,
        /// What the need is for
        description: String,
        /// Cost (e.g., "1200.00")
        cost: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
    },
    /// List a profile's needs
    List {
        /// Profile name
        profile: String,
    },
    /// Mark a need as paid
    Complete {
        /// Profile name
        profile: String,
        /// Need number from `need list`
        number: usize,
    },
    /// Remove a need
    Remove {
        /// Profile name
        profile: String,
        /// Need number from `need list`
        number: usize,
    },
}

/// Want subcommands
#[derive(Subcommand)]
pub enum WantCommands {
    /// Add a want (savings goal) to a profile
    Add {
        /// Profile name
        profile: String,
        /// What the want is
        description: String,
        /// Cost (e.g., "1500.00")
        cost: String,
        /// Target date (YYYY-MM-DD)
        #[arg(short, long)]
        target: String,
    },
    /// List a profile's wants
    List {
        /// Profile name
        profile: String,
    },
    /// Mark a want as achieved
    Complete {
        /// Profile name
        profile: String,
        /// Want number from `want list`
        number: usize,
    },
    /// Remove a want
    Remove {
        /// Profile name
        profile: String,
        /// Want number from `want list`
        number: usize,
    },
    /// Edit a want's description, cost, or target date
    Edit {
        /// Profile name
        profile: String,
        /// Want number from `want list`
        number: usize,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New cost
        #[arg(short, long)]
        cost: Option<String>,
        /// New target date (YYYY-MM-DD)
        #[arg(short, long)]
        target: Option<String>,
    },
}

/// Handle a need command
pub fn handle_need_command(
    store: &mut ProfileStore,
    settings: &Settings,
    cmd: NeedCommands,
) -> EconomeResult<()> {
    let category = ItemCategory::Need;
    match cmd {
        NeedCommands::Add {
            profile,
            description,
            cost,
            due,
        } => add_item(store, settings, category, &profile, description, &cost, &due),
        NeedCommands::List { profile } => list_items(store, settings, category, &profile),
        NeedCommands::Complete { profile, number } => {
            complete_item(store, category, &profile, number)
        }
        NeedCommands::Remove { profile, number } => remove_item(store, category, &profile, number),
    }
}

/// Handle a want command
pub fn handle_want_command(
    store: &mut ProfileStore,
    settings: &Settings,
    cmd: WantCommands,
) -> EconomeResult<()> {
    let category = ItemCategory::Want;
    match cmd {
        WantCommands::Add {
            profile,
            description,
            cost,
            target,
        } => add_item(store, settings, category, &profile, description, &cost, &target),
        WantCommands::List { profile } => list_items(store, settings, category, &profile),
        WantCommands::Complete { profile, number } => {
            complete_item(store, category, &profile, number)
        }
        WantCommands::Remove { profile, number } => remove_item(store, category, &profile, number),
        WantCommands::Edit {
            profile,
            number,
            description,
            cost,
            target,
        } => edit_want(store, settings, &profile, number, description, cost, target),
    }
}

/// Print the combined need and want list for a profile
pub fn handle_tasks_command(
    store: &ProfileStore,
    settings: &Settings,
    profile: &str,
) -> EconomeResult<()> {
    let found = find_profile(store, profile)?;
    print!("{}", format_task_list(found, &settings.currency_symbol));
    println!();
    Ok(())
}

/// Map a 1-based list position to the item's id
fn resolve_item(
    profile: &Profile,
    category: ItemCategory,
    number: usize,
) -> EconomeResult<ItemId> {
    number
        .checked_sub(1)
        .and_then(|index| profile.items(category).get(index))
        .map(|item| item.id)
        .ok_or_else(|| {
            EconomeError::item_not_found(
                category.name(),
                format!("#{} in profile '{}'", number, profile.name),
            )
        })
}

fn check_cost(cost: Money) -> EconomeResult<Money> {
    if cost.is_negative() {
        return Err(EconomeError::Validation(
            "Cost cannot be negative".to_string(),
        ));
    }
    Ok(cost)
}

fn add_item(
    store: &mut ProfileStore,
    settings: &Settings,
    category: ItemCategory,
    profile: &str,
    description: String,
    cost: &str,
    date: &str,
) -> EconomeResult<()> {
    find_profile(store, profile)?;

    let cost = check_cost(parse_money("cost", cost)?)?;
    let date = parse_date(date, &settings.date_format)?;
    let item = FinancialItem::new(category, description.trim(), cost, date);
    item.validate()
        .map_err(|e| EconomeError::Validation(e.to_string()))?;

    let summary = item.to_string();
    store.with_profile(profile, |p| p.add_item(item));
    ensure_saved(store)?;

    println!("Added {}: {}", category.name().to_lowercase(), summary);
    Ok(())
}

fn list_items(
    store: &ProfileStore,
    settings: &Settings,
    category: ItemCategory,
    profile: &str,
) -> EconomeResult<()> {
    let found = find_profile(store, profile)?;
    print!(
        "{}",
        format_item_list(found.items(category), category, &settings.currency_symbol)
    );
    println!();
    Ok(())
}

fn complete_item(
    store: &mut ProfileStore,
    category: ItemCategory,
    profile: &str,
    number: usize,
) -> EconomeResult<()> {
    let found = find_profile(store, profile)?;
    let id = resolve_item(found, category, number)?;

    if let Some(item) = found.item(id).filter(|i| i.is_complete()) {
        println!("Already complete: {}", item.description);
        return Ok(());
    }

    let description = store
        .with_profile(profile, |p| {
            p.mark_item_complete(id);
            p.item(id).map(|i| i.description.clone()).unwrap_or_default()
        })
        .unwrap_or_default();
    ensure_saved(store)?;

    println!("Marked complete: {}", description);
    Ok(())
}

fn remove_item(
    store: &mut ProfileStore,
    category: ItemCategory,
    profile: &str,
    number: usize,
) -> EconomeResult<()> {
    let found = find_profile(store, profile)?;
    let id = resolve_item(found, category, number)?;

    let removed = store
        .with_profile(profile, |p| p.remove_item(id))
        .flatten()
        .ok_or_else(|| EconomeError::item_not_found(category.name(), id.to_string()))?;
    ensure_saved(store)?;

    println!("Removed {}: {}", category.name().to_lowercase(), removed);
    Ok(())
}

fn edit_want(
    store: &mut ProfileStore,
    settings: &Settings,
    profile: &str,
    number: usize,
    description: Option<String>,
    cost: Option<String>,
    target: Option<String>,
) -> EconomeResult<()> {
    let found = find_profile(store, profile)?;
    let id = resolve_item(found, ItemCategory::Want, number)?;

    if description.is_none() && cost.is_none() && target.is_none() {
        println!("No changes specified. Use --description, --cost, or --target.");
        return Ok(());
    }

    let description = description.map(|d| d.trim().to_string());
    if description.as_deref().is_some_and(str::is_empty) {
        return Err(EconomeError::Validation(
            "Description cannot be empty".to_string(),
        ));
    }
    let cost = cost
        .map(|c| parse_money("cost", &c).and_then(check_cost))
        .transpose()?;
    let target = target
        .map(|t| parse_date(&t, &settings.date_format))
        .transpose()?;

    let updated = store
        .with_profile(profile, |p| {
            let item = p.item_mut(id)?;
            if let Some(description) = description {
                item.set_description(description);
            }
            if let Some(cost) = cost {
                item.set_cost(cost);
            }
            if let Some(target) = target {
                item.set_due_date(target);
            }
            Some(item.to_string())
        })
        .flatten()
        .ok_or_else(|| EconomeError::item_not_found("Want", id.to_string()))?;
    ensure_saved(store)?;

    println!("Updated want: {}", updated);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_store() -> (ProfileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ProfileStore::new(temp_dir.path().join("profiles.json"));
        store.add_profile(Profile::new("Alice", Money::new(dec!(4000)), Money::zero()));
        (store, temp_dir)
    }

    fn add_want(store: &mut ProfileStore, description: &str, cost: &str) -> EconomeResult<()> {
        handle_want_command(
            store,
            &Settings::default(),
            WantCommands::Add {
                profile: "alice".into(),
                description: description.into(),
                cost: cost.into(),
                target: "2026-03-01".into(),
            },
        )
    }

    #[test]
    fn test_add_need_and_want() {
        let (mut store, _temp) = create_test_store();
        let settings = Settings::default();

        handle_need_command(
            &mut store,
            &settings,
            NeedCommands::Add {
                profile: "Alice".into(),
                description: "Rent".into(),
                cost: "1200".into(),
                due: "2025-11-01".into(),
            },
        )
        .unwrap();
        add_want(&mut store, "Laptop", "$1,500").unwrap();

        let alice = store.find_profile_by_name("Alice").unwrap();
        assert_eq!(alice.needs()[0].description, "Rent");
        assert_eq!(alice.needs()[0].category, ItemCategory::Need);
        assert_eq!(alice.wants()[0].cost, Money::new(dec!(1500)));
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (mut store, _temp) = create_test_store();

        assert!(add_want(&mut store, "", "10").unwrap_err().is_validation());
        assert!(add_want(&mut store, "Laptop", "-10").unwrap_err().is_validation());
        assert!(add_want(&mut store, "Laptop", "ten").unwrap_err().is_validation());
        assert!(store.find_profile_by_name("Alice").unwrap().wants().is_empty());
    }

    #[test]
    fn test_complete_by_number() {
        let (mut store, _temp) = create_test_store();
        add_want(&mut store, "Laptop", "1500").unwrap();
        add_want(&mut store, "Trip", "800").unwrap();

        handle_want_command(
            &mut store,
            &Settings::default(),
            WantCommands::Complete {
                profile: "Alice".into(),
                number: 2,
            },
        )
        .unwrap();

        let wants = store.find_profile_by_name("Alice").unwrap().wants();
        assert!(!wants[0].is_complete());
        assert!(wants[1].is_complete());
    }

    #[test]
    fn test_out_of_range_number_is_not_found() {
        let (mut store, _temp) = create_test_store();
        add_want(&mut store, "Laptop", "1500").unwrap();

        for number in [0, 2] {
            let err = handle_want_command(
                &mut store,
                &Settings::default(),
                WantCommands::Remove {
                    profile: "Alice".into(),
                    number,
                },
            )
            .unwrap_err();
            assert!(err.is_not_found());
        }
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let (mut store, _temp) = create_test_store();
        add_want(&mut store, "Laptop", "1500").unwrap();
        add_want(&mut store, "Trip", "800").unwrap();
        add_want(&mut store, "Bike", "400").unwrap();

        handle_want_command(
            &mut store,
            &Settings::default(),
            WantCommands::Remove {
                profile: "Alice".into(),
                number: 2,
            },
        )
        .unwrap();

        let names: Vec<_> = store
            .find_profile_by_name("Alice")
            .unwrap()
            .wants()
            .iter()
            .map(|w| w.description.as_str())
            .collect();
        assert_eq!(names, vec!["Laptop", "Bike"]);
    }

    #[test]
    fn test_edit_want() {
        let (mut store, _temp) = create_test_store();
        add_want(&mut store, "Laptop", "1500").unwrap();

        handle_want_command(
            &mut store,
            &Settings::default(),
            WantCommands::Edit {
                profile: "Alice".into(),
                number: 1,
                description: Some("Gaming laptop".into()),
                cost: Some("1800".into()),
                target: None,
            },
        )
        .unwrap();

        let want = &store.find_profile_by_name("Alice").unwrap().wants()[0];
        assert_eq!(want.description, "Gaming laptop");
        assert_eq!(want.cost, Money::new(dec!(1800)));
        assert_eq!(want.due_date.to_string(), "2026-03-01");
    }

    #[test]
    fn test_unknown_profile() {
        let (mut store, _temp) = create_test_store();
        let err = handle_need_command(
            &mut store,
            &Settings::default(),
            NeedCommands::List {
                profile: "Bob".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
