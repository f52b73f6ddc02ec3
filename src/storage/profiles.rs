//! Profile store backed by profiles.json
//!
//! Owns the in-memory list of every profile and rewrites the whole file on
//! each mutation. Load and save failures are fail-soft: a bad file reads as
//! "no profiles" and a failed write leaves the in-memory change in place.
//! Both are reported through [`StoreEvent`] and `tracing`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::audit::{AuditLog, AuditRecord, BudgetEvent};
use crate::config::EconomePaths;
use crate::error::EconomeResult;
use crate::models::Profile;

use super::file_io::{read_json, write_json_atomic};
use super::StoreEvent;

const SCHEMA_VERSION: u32 = 1;

/// On-disk layout of profiles.json
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    profiles: Vec<Profile>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            profiles: Vec::new(),
        }
    }
}

/// Whether an upsert replaced an existing profile or appended a new one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// The authoritative collection of profiles
pub struct ProfileStore {
    path: PathBuf,
    profiles: Vec<Profile>,
    events: Vec<StoreEvent>,
    history: Option<AuditLog>,
}

impl ProfileStore {
    /// Create a store over `path` and load whatever it holds
    pub fn new(path: PathBuf) -> Self {
        let mut store = Self {
            path,
            profiles: Vec::new(),
            events: Vec::new(),
            history: None,
        };
        store.load();
        store
    }

    /// Create a store over the standard profiles file
    pub fn open(paths: &EconomePaths) -> Self {
        Self::new(paths.profiles_file())
    }

    /// Append a [`BudgetEvent`] record to `log` for every change that is saved
    pub fn with_audit(mut self, log: AuditLog) -> Self {
        self.history = Some(log);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory collection with what is on disk
    ///
    /// A missing file loads as empty. A file that cannot be read or parsed
    /// also loads as empty and records [`StoreEvent::LoadFailed`].
    pub fn load(&mut self) -> &[Profile] {
        match Self::try_load(&self.path) {
            Ok(profiles) => {
                debug!(path = %self.path.display(), count = profiles.len(), "loaded profiles");
                self.events.push(StoreEvent::Loaded {
                    path: self.path.clone(),
                    count: profiles.len(),
                });
                self.profiles = profiles;
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to load profiles, starting empty"
                );
                self.events.push(StoreEvent::LoadFailed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
                self.profiles = Vec::new();
            }
        }
        &self.profiles
    }

    fn try_load(path: &Path) -> EconomeResult<Vec<Profile>> {
        let data: ProfileData = read_json(path)?;
        Ok(data.profiles)
    }

    /// Write the full collection to disk
    ///
    /// On failure the in-memory collection is kept as is and a
    /// [`StoreEvent::SaveFailed`] is recorded.
    pub fn save(&mut self) {
        match self.try_save() {
            Ok(()) => {
                debug!(path = %self.path.display(), count = self.profiles.len(), "saved profiles");
                self.events.push(StoreEvent::Saved {
                    path: self.path.clone(),
                    count: self.profiles.len(),
                });
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to save profiles, changes kept in memory only"
                );
                self.events.push(StoreEvent::SaveFailed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    fn try_save(&self) -> EconomeResult<()> {
        let data = ProfileData {
            schema_version: SCHEMA_VERSION,
            profiles: self.profiles.clone(),
        };
        write_json_atomic(&self.path, &data)
    }

    /// All profiles in insertion order
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// First profile whose name matches, ignoring case
    pub fn find_profile_by_name(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.matches_name(name))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.matches_name(name))
    }

    /// Append a profile and persist
    ///
    /// No uniqueness check is made here; use [`save_profile`](Self::save_profile)
    /// for insert-or-replace by name.
    pub fn add_profile(&mut self, profile: Profile) {
        info!(profile = %profile.name, "adding profile");
        let events = BudgetEvent::created(&profile);
        let name = profile.name.clone();
        self.profiles.push(profile);
        self.persist(&name, events);
    }

    /// Remove the profile with the given name and persist
    ///
    /// Returns false, without touching disk, if no profile matches.
    pub fn delete_profile(&mut self, name: &str) -> bool {
        let Some(index) = self.position(name) else {
            debug!(profile = name, "delete requested for unknown profile");
            return false;
        };

        let removed = self.profiles.remove(index);
        info!(profile = %removed.name, "deleted profile");
        self.persist(&removed.name, vec![BudgetEvent::deleted(&removed)]);
        true
    }

    /// Insert or replace a profile by case-insensitive name, then persist
    pub fn save_profile(&mut self, profile: &Profile) -> UpsertOutcome {
        match self.position(&profile.name) {
            Some(index) => {
                let before = std::mem::replace(&mut self.profiles[index], profile.clone());
                debug!(profile = %profile.name, "replacing existing profile");
                self.persist(&profile.name, BudgetEvent::between(&before, profile));
                UpsertOutcome::Replaced
            }
            None => {
                debug!(profile = %profile.name, "inserting new profile");
                self.profiles.push(profile.clone());
                self.persist(&profile.name, BudgetEvent::created(profile));
                UpsertOutcome::Inserted
            }
        }
    }

    /// Mutate a stored profile in place, then persist
    ///
    /// Returns `None` without calling `f` if no profile matches `name`.
    pub fn with_profile<R>(&mut self, name: &str, f: impl FnOnce(&mut Profile) -> R) -> Option<R> {
        let index = self.position(name)?;

        let before = self.profiles[index].clone();
        let result = f(&mut self.profiles[index]);
        let after = &self.profiles[index];
        let (name, events) = (after.name.clone(), BudgetEvent::between(&before, after));
        self.persist(&name, events);

        Some(result)
    }

    /// Every load/save outcome recorded so far, oldest first
    pub fn events(&self) -> &[StoreEvent] {
        &self.events
    }

    /// Drain the recorded events
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether the most recent save attempt failed
    pub fn last_save_failed(&self) -> bool {
        self.events
            .iter()
            .rev()
            .find(|e| matches!(e, StoreEvent::Saved { .. } | StoreEvent::SaveFailed { .. }))
            .is_some_and(|e| matches!(e, StoreEvent::SaveFailed { .. }))
    }

    /// Save, then record `events` for `profile` if the save reached disk
    fn persist(&mut self, profile: &str, events: Vec<BudgetEvent>) {
        self.save();
        if self.last_save_failed() || events.is_empty() {
            return;
        }

        let Some(log) = &self.history else {
            return;
        };
        let records: Vec<_> = events
            .into_iter()
            .map(|event| AuditRecord::new(profile, event))
            .collect();
        if let Err(e) = log.append(&records) {
            warn!(path = %log.path().display(), error = %e, "failed to record budget history");
        }
    }
}
