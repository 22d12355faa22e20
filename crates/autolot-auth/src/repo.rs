//! # JSON User Repository
//!
//! Persists user records as a flat JSON list.
//!
//! ## Persistence Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    JsonUserStore Lifecycle                          │
//! │                                                                     │
//! │  open(path)                                                         │
//! │    ├── parent dir created if missing                                │
//! │    ├── file created as "[]" if missing                              │
//! │    └── whole list loaded into an ordered map                        │
//! │                                                                     │
//! │  every mutation (add/update/delete)                                 │
//! │    ├── mutate the in-memory map                                     │
//! │    └── save: write users.json.tmp, then rename over users.json      │
//! │              ▲                                                      │
//! │              └── atomic replace: a crash mid-save leaves the old    │
//! │                  file intact, never a half-written one              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads are served from memory; the file is only reread on `open`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::user::UserRecord;

/// JSON-file-backed user repository.
#[derive(Debug)]
pub struct JsonUserStore {
    path: PathBuf,
    users: BTreeMap<String, UserRecord>,
}

impl JsonUserStore {
    /// Opens (creating if necessary) the store at `path`.
    ///
    /// An unreadable or corrupt file is treated as empty rather than
    /// fatal, with a warning: the interactive session must always be able
    /// to start.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            fs::write(&path, "[]")?;
        }

        let users = match Self::load(&path) {
            Ok(users) => users,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "User file unreadable, starting empty");
                BTreeMap::new()
            }
        };

        info!(path = %path.display(), count = users.len(), "User store opened");
        Ok(JsonUserStore { path, users })
    }

    fn load(path: &Path) -> StoreResult<BTreeMap<String, UserRecord>> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<UserRecord> = serde_json::from_str(&raw)?;
        Ok(records
            .into_iter()
            .map(|r| (r.username.clone(), r))
            .collect())
    }

    /// Atomic save: serialize to a sibling tmp file, then rename over the
    /// real one so the record file is never half-written.
    fn save(&self) -> StoreResult<()> {
        let records: Vec<&UserRecord> = self.users.values().collect();
        let json = serde_json::to_string_pretty(&records)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), count = records.len(), "User store saved");
        Ok(())
    }

    /// Where this store persists to.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up one user.
    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// Snapshot of every record, ordered by username.
    pub fn list_all(&self) -> Vec<UserRecord> {
        self.users.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Adds a new record and persists.
    ///
    /// ## Returns
    /// * `Err(StoreError::AlreadyExists)` - the username is taken
    pub fn add(&mut self, record: UserRecord) -> StoreResult<()> {
        if self.users.contains_key(&record.username) {
            return Err(StoreError::already_exists(&record.username));
        }
        debug!(username = %record.username, role = %record.role, "Adding user");
        self.users.insert(record.username.clone(), record);
        self.save()
    }

    /// Replaces an existing record and persists.
    ///
    /// ## Returns
    /// * `Err(StoreError::NotFound)` - the username was never registered
    pub fn update(&mut self, record: UserRecord) -> StoreResult<()> {
        if !self.users.contains_key(&record.username) {
            return Err(StoreError::not_found(&record.username));
        }
        debug!(username = %record.username, "Updating user");
        self.users.insert(record.username.clone(), record);
        self.save()
    }

    /// Removes a record and persists.
    ///
    /// ## Returns
    /// * `Ok(false)` - the username was absent (no-op, not an error)
    pub fn delete(&mut self, username: &str) -> StoreResult<bool> {
        if self.users.remove(username).is_none() {
            return Ok(false);
        }
        debug!(username = %username, "Deleting user");
        self.save()?;
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
