use crate::error::{LedgerError, LedgerResult};
use crate::models::Participant;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the participant list is stored
pub const PARTICIPANTS_KEY: &str = "participants";

/// Key-value storage for locally cached state
pub trait KeyValueStore {
    /// Read a value; `None` when the key has never been written
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON document per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, key: &str) -> LedgerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LedgerError::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.file_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        let path = self.file_path(key)?;
        fs::create_dir_all(&self.root)?;
        fs::write(path, value)?;
        Ok(())
    }
}

/// Participant list bound to [`PARTICIPANTS_KEY`]
#[derive(Debug)]
pub struct ParticipantStore<S> {
    store: S,
}

impl<S: KeyValueStore> ParticipantStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the cached participants.
    ///
    /// A missing key, a read failure or an unparsable value all start the
    /// session with an empty list.
    pub fn load(&self) -> Vec<Participant> {
        let raw = match self.store.get(PARTICIPANTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to read participant list, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(participants) => participants,
            Err(error) => {
                tracing::warn!(%error, "stored participant list is malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full list and write it back
    ///
    /// # Errors
    ///
    /// Returns the underlying store's error when the write fails.
    pub fn save(&mut self, participants: &[Participant]) -> LedgerResult<()> {
        let raw = serde_json::to_string(participants)?;
        self.store.set(PARTICIPANTS_KEY, &raw)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}
