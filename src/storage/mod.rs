//! Storage layer for EconoMe
//!
//! Provides JSON file storage with atomic writes and the profile store,
//! which is the only component that touches the profiles file.

pub mod file_io;
pub mod profiles;

use std::fmt;
use std::path::PathBuf;

pub use file_io::{read_json, write_json_atomic};
pub use profiles::{ProfileStore, UpsertOutcome};

/// Outcome of a load or save attempt against the profiles file
///
/// Storage failures never cross the store boundary as errors; they are
/// recorded here so callers can still tell a fresh start from a corrupt
/// file, or a saved change from one that only lives in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Loaded { path: PathBuf, count: usize },
    LoadFailed { path: PathBuf, reason: String },
    Saved { path: PathBuf, count: usize },
    SaveFailed { path: PathBuf, reason: String },
}

impl StoreEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            StoreEvent::LoadFailed { .. } | StoreEvent::SaveFailed { .. }
        )
    }
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEvent::Loaded { path, count } => {
                write!(f, "loaded {} profile(s) from {}", count, path.display())
            }
            StoreEvent::LoadFailed { path, reason } => {
                write!(f, "could not load {}: {}", path.display(), reason)
            }
            StoreEvent::Saved { path, count } => {
                write!(f, "saved {} profile(s) to {}", count, path.display())
            }
            StoreEvent::SaveFailed { path, reason } => {
                write!(f, "could not save {}: {}", path.display(), reason)
            }
        }
    }
}
