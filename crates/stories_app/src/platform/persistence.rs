use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use engine_logging::{engine_info, engine_warn};
use stories_engine::{AtomicFileWriter, KeyValueStore, PersistError};

const STORE_FILENAME: &str = ".stories_state.ron";

/// Key-value store kept as a RON map in the state directory. The whole map is
/// rewritten atomically on every change.
pub struct FileKeyValueStore {
    writer: AtomicFileWriter,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    /// Opens the store in `dir`. Unreadable state is logged and treated as empty.
    pub fn open(dir: &Path) -> Self {
        let writer = AtomicFileWriter::new(dir.to_path_buf());
        let entries = load_entries(dir);
        Self { writer, entries }
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&self.entries, pretty)
            .map_err(|err| PersistError::Encode(err.to_string()))?;
        self.writer.write(STORE_FILENAME, &content)?;
        Ok(())
    }
}

fn load_entries(dir: &Path) -> BTreeMap<String, String> {
    let path = dir.join(STORE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        }
        Err(err) => {
            engine_warn!("Failed to read stored values from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    match ron::from_str(&content) {
        Ok(entries) => {
            engine_info!("Loaded stored values from {:?}", path);
            entries
        }
        Err(err) => {
            engine_warn!("Failed to parse stored values from {:?}: {}", path, err);
            BTreeMap::new()
        }
    }
}
