use crate::store::{StoreError, WorkoutStore};
use log::info;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for slot `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Per-origin nøkkel/verdi-lager (tilsvarer localStorage i nettleseren).
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Minnelager. Kloner deler samme slots, slik at en ny `App` over samme
/// handle ser det forrige skrev (som en reload i samme nettleser).
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// Én fil per nøkkel: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
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

fn io_err(key: &str) -> impl FnOnce(io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(key)(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(io_err(key))?;
        fs::write(self.path_for(key), value).map_err(io_err(key))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(key)(e)),
        }
    }
}

/// Leser inn workouts fra lageret.
/// Mangler slot, eller lar den seg ikke lese, returneres en tom store.
pub fn load_store(storage: &dyn KeyValueStorage, key: &str) -> WorkoutStore {
    let snapshot = match storage.get(key) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("⚠️ Kunne ikke lese `{}`: {} (starter tomt)", key, e);
            None
        }
    };
    let store = WorkoutStore::restore(snapshot.as_deref());
    info!("📂 {} workouts lastet fra `{}`", store.len(), key);
    store
}

/// Lagrer hele store som snapshot i én slot.
pub fn save_store(
    storage: &mut dyn KeyValueStorage,
    key: &str,
    store: &WorkoutStore,
) -> Result<(), StorageError> {
    let json = store.serialize()?;
    storage.set(key, &json)?;
    info!("✅ {} workouts lagret til `{}`", store.len(), key);
    Ok(())
}
