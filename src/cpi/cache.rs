//! Series cache keyed by inclusive year range.
//!
//! Entries never expire. A key is only ever read or overwritten wholesale,
//! and the cache grows by one entry per distinct year range fetched.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::SeriesPayload;

/// An inclusive year range identifying a cached payload.
///
/// ```
/// use salary_inflation::cpi::CacheKey;
///
/// assert_eq!(CacheKey::new(1985, 2024).to_string(), "1985_2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    /// First year of the range.
    pub start_year: i32,
    /// Last year of the range.
    pub end_year: i32,
}

impl CacheKey {
    /// Creates a key for the inclusive range `start_year..=end_year`.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.start_year, self.end_year)
    }
}

/// Storage for fetched series payloads.
///
/// Implementations must return exactly what was last stored under a key.
pub trait SeriesCache: Send + Sync {
    /// Returns the payload stored under `key`, if any.
    fn get(&self, key: &CacheKey) -> Option<SeriesPayload>;

    /// Stores `payload` under `key`, replacing any previous value.
    fn put(&self, key: &CacheKey, payload: &SeriesPayload) -> EngineResult<()>;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns true when nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A process-local cache with no durable storage.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<BTreeMap<String, SeriesPayload>>,
}

impl InMemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeriesCache for InMemoryCache {
    fn get(&self, key: &CacheKey) -> Option<SeriesPayload> {
        self.entries.lock().get(&key.to_string()).cloned()
    }

    fn put(&self, key: &CacheKey, payload: &SeriesPayload) -> EngineResult<()> {
        self.entries.lock().insert(key.to_string(), payload.clone());
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

/// A cache persisted as a single JSON object file.
///
/// The file is read on first access and rewritten in full on every `put`, so
/// entries survive process restarts. A missing or unreadable file starts the
/// cache empty rather than failing.
#[derive(Debug)]
pub struct JsonFileCache {
    path: PathBuf,
    entries: Mutex<Option<BTreeMap<String, SeriesPayload>>>,
}

impl JsonFileCache {
    /// Creates a cache backed by the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Mutex::new(None),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut BTreeMap<String, SeriesPayload>) -> R) -> R {
        let mut guard = self.entries.lock();
        let entries = guard.get_or_insert_with(|| Self::read_file(&self.path));
        f(entries)
    }

    fn read_file(path: &Path) -> BTreeMap<String, SeriesPayload> {
        if !path.exists() {
            return BTreeMap::new();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<BTreeMap<String, SeriesPayload>>(&content)
                    .map_err(|e| e.to_string())
            });

        match parsed {
            Ok(entries) => {
                debug!(path = %path.display(), entries = entries.len(), "Loaded series cache");
                entries
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "Ignoring unreadable series cache");
                BTreeMap::new()
            }
        }
    }

    fn write_file(&self, entries: &BTreeMap<String, SeriesPayload>) -> EngineResult<()> {
        let io_error = |message: String| EngineError::CacheIo {
            path: self.path.display().to_string(),
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries).map_err(|e| io_error(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| io_error(e.to_string()))
    }
}

impl SeriesCache for JsonFileCache {
    fn get(&self, key: &CacheKey) -> Option<SeriesPayload> {
        self.with_entries(|entries| entries.get(&key.to_string()).cloned())
    }

    fn put(&self, key: &CacheKey, payload: &SeriesPayload) -> EngineResult<()> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), payload.clone());
            self.write_file(entries)
        })
    }

    fn len(&self) -> usize {
        self.with_entries(|entries| entries.len())
    }
}
