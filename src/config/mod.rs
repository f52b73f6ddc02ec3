//! Configuration module for EconoMe
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EconomePaths;
pub use settings::Settings;
