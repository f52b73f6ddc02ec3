//! EconoMe - personal budgeting core
//!
//! This library splits a monthly income into needs, wants, and savings,
//! tracks bills and savings goals per profile, estimates how many months a
//! goal takes at a given contribution, and persists every profile to a
//! single JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, profiles, needs and wants, projections)
//! - `storage`: JSON file storage and the profile store
//! - `services`: Allocation and goal projection calculations
//! - `audit`: Budget history (income, savings, allocation, and item events)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `econome` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use econome::config::EconomePaths;
//! use econome::models::{Money, Profile};
//! use econome::storage::ProfileStore;
//!
//! let paths = EconomePaths::new()?;
//! let mut store = ProfileStore::open(&paths);
//! store.add_profile(Profile::new("Alice", Money::from_cents(400_000), Money::zero()));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::EconomeError;
