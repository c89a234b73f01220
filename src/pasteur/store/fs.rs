use super::PrefStore;
use crate::error::{PasteurError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const PREFS_FILENAME: &str = "prefs.json";

/// File-backed store: a single `prefs.json` map in the data directory.
///
/// Each operation is read-modify-write on the whole file. Fine for a
/// handful of small keys; this is not a database.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn prefs_path(&self) -> PathBuf {
        self.dir.join(PREFS_FILENAME)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let path = self.prefs_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(PasteurError::Io)?;
        serde_json::from_str(&content).map_err(PasteurError::Json)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(PasteurError::Io)?;
        }
        let content = serde_json::to_string_pretty(map).map_err(PasteurError::Json)?;
        fs::write(self.prefs_path(), content).map_err(PasteurError::Io)
    }
}

impl PrefStore for FileStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }
}
