use std::error::Error;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fixed collection names; one JSON array file per collection.
pub const USERS: &str = "users";
pub const BOOKINGS: &str = "bookings";
pub const DOCUMENTS: &str = "documents";
pub const BUDGET_DATA: &str = "budget_data";

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Store I/O error: {}", err),
            StoreError::Serde(err) => write!(f, "Store serialization error: {}", err),
        }
    }
}

impl Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err)
    }
}

/// JSON document store with whole-value semantics: a collection is read and
/// replaced as one array, no partial updates, no schema versioning. A mutex
/// serializes writers inside this process; across processes the last writer
/// wins, which is accepted for this single-user data.
pub struct JsonStore {
    root: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            lock: Mutex::new(()),
        })
    }

    /// Reads `DATA_DIR` from the environment, defaulting to ./data.
    pub fn from_env() -> Result<Self, StoreError> {
        let root = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self::new(root)
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }

    /// Whole-collection read. A collection that was never written is empty,
    /// not an error.
    pub fn read_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock().unwrap();
        let path = self.path_for(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Whole-collection replace; the previous value is discarded.
    pub fn replace_all<T: Serialize>(
        &self,
        collection: &str,
        items: &[T],
    ) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap();
        let raw = serde_json::to_string_pretty(items)?;
        fs::write(self.path_for(collection), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        body: String,
    }

    fn note(id: u32, body: &str) -> Note {
        Note {
            id,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_unwritten_collection_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        let notes: Vec<Note> = store.read_all("nothing_here").unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn test_replace_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        let notes = vec![note(1, "pack sunscreen"), note(2, "print tickets")];
        store.replace_all(BOOKINGS, &notes).unwrap();
        let read: Vec<Note> = store.read_all(BOOKINGS).unwrap();
        assert_eq!(read, notes);
    }

    #[test]
    fn test_last_writer_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        store.replace_all(DOCUMENTS, &[note(1, "first")]).unwrap();
        store.replace_all(DOCUMENTS, &[note(2, "second")]).unwrap();
        let read: Vec<Note> = store.read_all(DOCUMENTS).unwrap();
        assert_eq!(read, vec![note(2, "second")]);
    }

    #[test]
    fn test_collections_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        store.replace_all(BOOKINGS, &[note(1, "a")]).unwrap();
        store.replace_all(BUDGET_DATA, &[note(2, "b")]).unwrap();
        let bookings: Vec<Note> = store.read_all(BOOKINGS).unwrap();
        let budget: Vec<Note> = store.read_all(BUDGET_DATA).unwrap();
        assert_eq!(bookings[0].id, 1);
        assert_eq!(budget[0].id, 2);
    }
}
