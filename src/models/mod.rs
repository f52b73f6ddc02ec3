//! Core data models for EconoMe
//!
//! This module contains the data structures of the budgeting domain:
//! money, needs and wants, profiles, and goal projections.

pub mod item;
pub mod money;
pub mod profile;
pub mod projection;

pub use item::{FinancialItem, ItemCategory, ItemId, ItemValidationError};
pub use money::{Money, MoneyParseError};
pub use profile::{AllocationMode, AllocationSettings, Profile};
pub use projection::{GoalOutcome, Projection, MONTHS_ALREADY_MET, MONTHS_UNREACHABLE};
