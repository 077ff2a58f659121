//! Roster persistence behind a small key-value store trait.

use crate::models::{is_valid_rating, Player, RosterSnapshot, TeamManager};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Key the roster is stored under.
pub const ROSTER_KEY: &str = "footballPlayers";

/// Errors from reading or writing a store.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    /// A thread panicked while holding the store lock.
    Poisoned,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Store I/O error: {}", e),
            StoreError::Serialize(e) => write!(f, "Store serialization error: {}", e),
            StoreError::Poisoned => write!(f, "Store lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serialize(e) => Some(e),
            StoreError::Poisoned => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialize(e)
    }
}

/// String values by string key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store; contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let g = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(g.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut g = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        g.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write then rename so a crash never leaves a half-written roster behind.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Load the roster. Missing, unreadable or malformed data gives an empty roster.
pub fn load_roster<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Player> {
    let raw = match store.get(ROSTER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Could not read stored roster, starting empty: {}", e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(players) => valid_players(players),
        Err(e) => {
            log::warn!("Stored roster is malformed, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Keep records with an in-range rating, a non-empty name and an id not seen earlier.
fn valid_players(players: Vec<Player>) -> Vec<Player> {
    let mut seen = HashSet::new();
    players
        .into_iter()
        .filter(|p| {
            if !is_valid_rating(p.rating) {
                log::warn!("Dropping stored player {} with out-of-range rating {}", p.id, p.rating);
                false
            } else if p.name.trim().is_empty() {
                log::warn!("Dropping stored player {} with an empty name", p.id);
                false
            } else if !seen.insert(p.id) {
                log::warn!("Dropping stored player {} with a duplicate id", p.id);
                false
            } else {
                true
            }
        })
        .collect()
}

/// Overwrite the stored roster with `players`.
pub fn save_roster<S: KeyValueStore + ?Sized>(store: &S, players: &[Player]) -> Result<(), StoreError> {
    let json = serde_json::to_string(players)?;
    store.set(ROSTER_KEY, &json)
}

/// Persist the roster after an edit. If the write fails, the roster and selection go back to
/// `before` so memory never holds players the store does not.
pub fn commit_roster<S: KeyValueStore + ?Sized>(
    store: &S,
    manager: &mut TeamManager,
    before: RosterSnapshot,
) -> Result<(), StoreError> {
    if let Err(e) = save_roster(store, &manager.players) {
        manager.restore_roster(before);
        return Err(e);
    }
    Ok(())
}
