// Cache store for time-bounded API responses.
// All entries live in one JSON slot file. Reads are best effort: a corrupt
// or missing slot is an empty cache, never an error.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// TTL for directory listings: 5 minutes.
pub const LISTING_TTL: Duration = Duration::from_secs(5 * 60);

/// TTL for build status: 1 minute.
pub const STATUS_TTL: Duration = Duration::from_secs(60);

/// Soft cap on resident entries. Exceeding it evicts a single entry.
pub const MAX_ENTRIES: usize = 20;

/// A cached value plus its capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached data, kept as raw JSON so one slot holds mixed types.
    pub data: serde_json::Value,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(data: serde_json::Value) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Check whether this entry is still within its TTL.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);
        elapsed < ttl
    }
}

/// Keyed cache with fixed expiry and a soft size cap, persisted to one slot.
#[derive(Debug)]
pub struct CacheStore {
    slot: Option<PathBuf>,
    entries: BTreeMap<String, CacheEntry>,
}

impl CacheStore {
    /// Open the store backed by the given slot file.
    /// A missing or corrupt slot yields an empty cache.
    pub fn open(slot: Option<PathBuf>) -> Self {
        let entries = slot
            .as_deref()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();

        Self { slot, entries }
    }

    /// A store with no backing slot, for tests and cache-less environments.
    pub fn in_memory() -> Self {
        Self {
            slot: None,
            entries: BTreeMap::new(),
        }
    }

    /// Look up a value, treating expired entries as absent.
    /// The caller cannot distinguish "never cached" from "expired".
    pub fn get<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<T> {
        let entry = self.entries.get(key)?;
        if !entry.is_fresh(ttl) {
            return None;
        }
        serde_json::from_value(entry.data.clone()).ok()
    }

    /// Insert or overwrite a value with the current timestamp.
    /// If the map then exceeds the cap, one other entry is evicted (which
    /// one is implementation-defined, not LRU). The slot is rewritten best
    /// effort; write failures are swallowed.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        let Ok(data) = serde_json::to_value(value) else {
            return;
        };
        self.entries.insert(key.to_string(), CacheEntry::new(data));

        if self.entries.len() > MAX_ENTRIES {
            let victim = self
                .entries
                .keys()
                .find(|k| k.as_str() != key)
                .cloned();
            if let Some(victim) = victim {
                self.entries.remove(&victim);
            }
        }

        self.persist();
    }

    /// Number of resident entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and rewrite the slot.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Write the whole map back to the slot, atomically via temp rename.
    /// Best effort: any failure leaves the in-memory cache authoritative.
    fn persist(&self) {
        let Some(path) = self.slot.as_deref() else {
            return;
        };
        let Ok(json) = serde_json::to_string(&self.entries) else {
            return;
        };

        let _ = (|| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let temp_path = path.with_extension("tmp");
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, path)?;
            Ok(())
        })();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_set_then_get() {
        let mut store = CacheStore::in_memory();
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        store.set("contents/packages", &data);

        let got: Option<TestData> = store.get("contents/packages", LISTING_TTL);
        assert_eq!(got, Some(data));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let store = CacheStore::in_memory();
        let got: Option<TestData> = store.get("nope", LISTING_TTL);
        assert!(got.is_none());
    }

    #[test]
    fn test_expired_entry_is_absent() {
        let mut store = CacheStore::in_memory();
        store.set("k", &"v".to_string());

        // Backdate the entry past the TTL
        store.entries.get_mut("k").unwrap().cached_at = Utc::now() - chrono::Duration::seconds(600);

        let got: Option<String> = store.get("k", LISTING_TTL);
        assert!(got.is_none());

        // Still resident, just invisible
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_zero_ttl_always_absent() {
        let mut store = CacheStore::in_memory();
        store.set("k", &1u32);
        let got: Option<u32> = store.get("k", Duration::ZERO);
        assert!(got.is_none());
    }

    #[test]
    fn test_overwrite_refreshes_value() {
        let mut store = CacheStore::in_memory();
        store.set("k", &1u32);
        store.set("k", &2u32);

        assert_eq!(store.get::<u32>("k", LISTING_TTL), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_size_cap_evicts_single_entry() {
        let mut store = CacheStore::in_memory();

        for i in 0..30 {
            store.set(&format!("key-{i:02}"), &i);
            assert!(store.len() <= MAX_ENTRIES);
        }
        assert_eq!(store.len(), MAX_ENTRIES);
    }

    #[test]
    fn test_just_set_key_survives_eviction() {
        let mut store = CacheStore::in_memory();

        for i in 0..25 {
            let key = format!("key-{i:02}");
            store.set(&key, &i);
            assert_eq!(store.get::<i32>(&key, LISTING_TTL), Some(i));
        }
    }

    #[test]
    fn test_wrong_type_is_absent() {
        let mut store = CacheStore::in_memory();
        store.set("k", &"not a number".to_string());
        let got: Option<u64> = store.get("k", LISTING_TTL);
        assert!(got.is_none());
    }

    #[test]
    fn test_persistence_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let slot = temp_dir.path().join("api_cache.json");

        let mut store = CacheStore::open(Some(slot.clone()));
        store.set("k", &TestData {
            name: "persisted".to_string(),
            value: 7,
        });

        let reopened = CacheStore::open(Some(slot));
        let got: Option<TestData> = reopened.get("k", LISTING_TTL);
        assert_eq!(got.map(|d| d.value), Some(7));
    }

    #[test]
    fn test_corrupt_slot_is_empty_cache() {
        let temp_dir = TempDir::new().unwrap();
        let slot = temp_dir.path().join("api_cache.json");
        fs::write(&slot, "{ this is not json").unwrap();

        let store = CacheStore::open(Some(slot));
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_empties_slot() {
        let temp_dir = TempDir::new().unwrap();
        let slot = temp_dir.path().join("api_cache.json");

        let mut store = CacheStore::open(Some(slot.clone()));
        store.set("k", &1u32);
        store.clear();
        assert!(store.is_empty());

        let reopened = CacheStore::open(Some(slot));
        assert!(reopened.is_empty());
    }
}
