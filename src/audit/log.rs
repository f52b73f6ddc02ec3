//! Append-only budget history file
//!
//! One [`AuditRecord`] per line as JSON. Lines that no longer parse are
//! skipped on read so a damaged line never hides the rest of the history.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{EconomeError, EconomeResult};

use super::event::AuditRecord;

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `records` in order with a single flush
    pub fn append(&self, records: &[AuditRecord]) -> EconomeResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                EconomeError::Audit(format!("cannot open {}: {}", self.path.display(), e))
            })?;

        let mut writer = BufWriter::new(file);
        for record in records {
            serde_json::to_writer(&mut writer, record)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Every readable record, oldest first; a missing file has none
    pub fn read(&self) -> EconomeResult<Vec<AuditRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let records = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "skipping unreadable history line"
                    );
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// The last `limit` records, optionally for one profile, oldest first
    pub fn recent(&self, limit: usize, profile: Option<&str>) -> EconomeResult<Vec<AuditRecord>> {
        let mut records = self.read()?;
        if let Some(name) = profile {
            records.retain(|r| r.concerns(name));
        }

        let skip = records.len().saturating_sub(limit);
        records.drain(..skip);
        Ok(records)
    }
}
