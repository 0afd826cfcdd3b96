// Read-through cache of loaded score tables, keyed by path and mtime
use nbhdfit_core::{Result, ScoreTable};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};

/// Load a score table, failing with the name of any missing dimension column
pub fn load_scores<P: AsRef<Path>>(path: P) -> Result<ScoreTable> {
    let table = ScoreTable::read_from_path(path.as_ref())?;
    info!("Loaded {} neighbourhoods from {:?}", table.len(), path.as_ref());
    Ok(table)
}

#[derive(Debug, Clone)]
struct CachedTable {
    modified: SystemTime,
    table: Arc<ScoreTable>,
}

/// Serves a table from memory until the file's modification time changes
#[derive(Debug, Default)]
pub struct ScoreTableCache {
    entries: RwLock<HashMap<PathBuf, CachedTable>>,
}

impl ScoreTableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, reloading it if the file changed
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Result<Arc<ScoreTable>> {
        let key = std::fs::canonicalize(path.as_ref())?;
        let modified = std::fs::metadata(&key)?.modified()?;

        if let Some(entry) = self.entries.read().get(&key) {
            if entry.modified == modified {
                debug!("Score table cache hit for {:?}", key);
                return Ok(entry.table.clone());
            }
        }

        debug!("Score table cache miss for {:?}", key);
        let table = Arc::new(load_scores(&key)?);
        self.entries.write().insert(
            key,
            CachedTable {
                modified,
                table: table.clone(),
            },
        );
        Ok(table)
    }

    /// Drop the entry for `path`; returns whether one existed
    pub fn invalidate<P: AsRef<Path>>(&self, path: P) -> bool {
        match std::fs::canonicalize(path.as_ref()) {
            Ok(key) => self.entries.write().remove(&key).is_some(),
            Err(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
