//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the profile store and the calculations in
//! `services`. Raw user input (amounts, dates, item numbers) is parsed and
//! checked here; the core below only ever sees typed values.

pub mod audit;
pub mod budget;
pub mod item;
pub mod profile;

pub use audit::handle_audit_command;
pub use budget::{
    handle_allocate_command, handle_budget_command, handle_project_command, AllocateArgs,
};
pub use item::{
    handle_need_command, handle_tasks_command, handle_want_command, NeedCommands, WantCommands,
};
pub use profile::{handle_profile_command, ProfileCommands};

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EconomeError, EconomeResult};
use crate::models::{Money, Profile};
use crate::storage::{ProfileStore, StoreEvent};

/// Parse a user-entered amount such as "1200", "$1,200.50" or "-40"
pub(crate) fn parse_money(field: &str, input: &str) -> EconomeResult<Money> {
    Money::parse(input).map_err(|e| {
        EconomeError::Validation(format!(
            "Invalid {}: '{}'. Use format like '1000.00' or '1000'. Error: {}",
            field, input, e
        ))
    })
}

/// Parse an allocation value (a percentage or a plain amount)
pub(crate) fn parse_decimal(field: &str, input: &str) -> EconomeResult<Decimal> {
    let cleaned = input.trim().trim_end_matches('%').trim();
    Decimal::from_str(cleaned).map_err(|_| {
        EconomeError::Validation(format!("Invalid {}: '{}'. Expected a number.", field, input))
    })
}

pub(crate) fn parse_date(input: &str, format: &str) -> EconomeResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), format).map_err(|_| {
        EconomeError::Validation(format!(
            "Invalid date: '{}'. Expected format {}",
            input, format
        ))
    })
}

pub(crate) fn find_profile<'a>(store: &'a ProfileStore, name: &str) -> EconomeResult<&'a Profile> {
    store
        .find_profile_by_name(name)
        .ok_or_else(|| EconomeError::profile_not_found(name))
}

/// Turn a failed save into an error so the command exits non-zero
pub(crate) fn ensure_saved(store: &ProfileStore) -> EconomeResult<()> {
    if !store.last_save_failed() {
        return Ok(());
    }

    let reason = store
        .events()
        .iter()
        .rev()
        .find_map(|e| match e {
            StoreEvent::SaveFailed { reason, .. } => Some(reason.clone()),
            _ => None,
        })
        .unwrap_or_default();

    Err(EconomeError::Storage(format!(
        "Change applied but not saved to {}: {}",
        store.path().display(),
        reason
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("cost", "$1,200.50").unwrap(), Money::new(dec!(1200.50)));

        let err = parse_money("cost", "abc").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid cost"));
    }

    #[test]
    fn test_parse_decimal_accepts_percent_sign() {
        assert_eq!(parse_decimal("needs", "50%").unwrap(), dec!(50));
        assert_eq!(parse_decimal("needs", " 12.5 ").unwrap(), dec!(12.5));
        assert!(parse_decimal("needs", "half").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-11-01", "%Y-%m-%d").unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
        );
        assert!(parse_date("11/01/2025", "%Y-%m-%d").unwrap_err().is_validation());
        assert!(parse_date("2025-02-30", "%Y-%m-%d").is_err());
    }

    #[test]
    fn test_find_profile_ignores_case() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ProfileStore::new(temp_dir.path().join("profiles.json"));
        store.add_profile(Profile::new("Alice", Money::zero(), Money::zero()));

        assert_eq!(find_profile(&store, "ALICE").unwrap().name, "Alice");
        let err = find_profile(&store, "Bob").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Profile not found: Bob");
    }

    #[test]
    fn test_ensure_saved_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profiles.json");
        std::fs::create_dir(&path).unwrap();

        let mut store = ProfileStore::new(path);
        store.add_profile(Profile::new("Alice", Money::zero(), Money::zero()));

        let err = ensure_saved(&store).unwrap_err();
        assert!(matches!(err, EconomeError::Storage(_)));
    }
}
