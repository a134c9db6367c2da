//! A keyed, TTL-aware cache of fetched review-service collections.
//!
//! [`Cache`] wraps a cache directory, TTL, and timestamp so that callers
//! don't need to thread those values through every load/save call. Keys are
//! derived from the request that produced the data (property id plus the
//! projected query string for review listings), which is what makes explicit
//! invalidation possible: when a moderation action succeeds, every cached
//! collection that could mention the affected property is removed so that
//! statistics are recomputed from fresh data on the next read.

use crate::Result;
use crate::filter::ReviewFilter;
use chrono::{DateTime, Utc};
use core::time::Duration;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "     cache";

/// Cache key for the full property list.
pub const PROPERTIES_KEY: &str = "properties/all.json";

/// Cache key for the admin property list.
pub const PROPERTIES_ADMIN_KEY: &str = "properties/admin.json";

/// Cache key for the channel catalog.
pub const CHANNELS_KEY: &str = "channels.json";

/// Cache key for one property record.
#[must_use]
pub fn property_key(property_id: &str) -> String {
    format!("properties/{}.json", sanitize_path_component(property_id))
}

/// Cache key for a review listing: one file per (property, filter) pair.
#[must_use]
pub fn reviews_key(property_id: &str, filter: &ReviewFilter) -> String {
    let query = filter
        .to_query_params(property_id)
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "reviews/{}/{}.json",
        sanitize_path_component(property_id),
        sanitize_path_component(&query)
    )
}

/// Result of loading an entry from the cache.
#[derive(Debug, Clone)]
pub enum CacheResult<T> {
    /// Cached data was found and is still fresh.
    Data(T),

    /// No usable cache entry exists (miss, expired, corrupt, or `ignore_cache` is set).
    Miss,
}

/// On-disk representation of a cache entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct Envelope<T> {
    timestamp: DateTime<Utc>,
    payload: T,
}

/// A TTL-aware, directory-backed JSON cache.
#[derive(Debug, Clone)]
pub struct Cache {
    dir: PathBuf,
    ttl: Duration,
    now: DateTime<Utc>,
    ignore: bool,
}

impl Cache {
    /// Create a new cache.
    #[must_use]
    pub fn new(cache_dir: impl Into<PathBuf>, cache_ttl: Duration, now: DateTime<Utc>, ignore_cache: bool) -> Self {
        Self {
            dir: cache_dir.into(),
            ttl: cache_ttl,
            now,
            ignore: ignore_cache,
        }
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load a cache entry by key (a path relative to the cache directory).
    #[must_use]
    pub fn load<T>(&self, key: &str) -> CacheResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        if self.ignore {
            return CacheResult::Miss;
        }

        let path = self.dir.join(key);

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Cache miss for {key}: {e:#}");
                return CacheResult::Miss;
            }
        };

        let reader = BufReader::new(file);
        let envelope: Envelope<T> = match serde_json::from_reader(reader) {
            Ok(data) => data,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Cache miss for {key}: {e:#}");
                return CacheResult::Miss;
            }
        };

        // Handle future timestamps (clock skew) - treat as fresh data
        let age = self.now.signed_duration_since(envelope.timestamp);
        if age.num_seconds() < 0 {
            log::debug!(target: LOG_TARGET, "Cache timestamp is in the future for {key} (clock skew detected), treating as fresh");
        } else {
            let age_duration = age.to_std().unwrap_or(Duration::MAX);

            if age_duration >= self.ttl {
                log::debug!(
                    target: LOG_TARGET,
                    "Cache expired for {key} (age: {:.0}s, TTL: {:.0}s)",
                    age_duration.as_secs_f64(),
                    self.ttl.as_secs_f64()
                );
                return CacheResult::Miss;
            }

            log::debug!(target: LOG_TARGET, "Cache hit for {key} (age: {:.0}s)", age_duration.as_secs_f64());
        }

        CacheResult::Data(envelope.payload)
    }

    /// Save data to the cache under the given key.
    pub fn save<T>(&self, key: &str, data: &T) -> Result<()>
    where
        T: Serialize,
    {
        let envelope = Envelope {
            timestamp: self.now,
            payload: data,
        };

        let path = self.dir.join(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).into_app_err_with(|| format!("creating directory '{}'", parent.display()))?;
        }

        let file = File::create(&path).into_app_err_with(|| format!("creating cache file '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &envelope).into_app_err_with(|| format!("writing cache file '{}'", path.display()))?;
        writer
            .flush()
            .into_app_err_with(|| format!("flushing cache file '{}'", path.display()))?;
        Ok(())
    }

    /// Remove every cached collection that could mention `property_id`.
    ///
    /// Called after a successful moderation action: the property's review
    /// listings, its property record, and the (review-embedding) property
    /// lists all go, so the next read recomputes statistics from fresh data.
    pub fn invalidate_property(&self, property_id: &str) -> Result<()> {
        let reviews_dir = self.dir.join("reviews").join(sanitize_path_component(property_id));
        remove_dir_if_present(&reviews_dir)?;

        remove_file_if_present(&self.dir.join(property_key(property_id)))?;
        remove_file_if_present(&self.dir.join(PROPERTIES_KEY))?;
        remove_file_if_present(&self.dir.join(PROPERTIES_ADMIN_KEY))?;

        log::debug!(target: LOG_TARGET, "Invalidated cached data for property '{property_id}'");
        Ok(())
    }
}

fn remove_dir_if_present(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).into_app_err_with(|| format!("removing cache directory '{}'", path.display())),
    }
}

fn remove_file_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).into_app_err_with(|| format!("removing cache file '{}'", path.display())),
    }
}

/// Sanitize a string for use as a path component.
///
/// Removes path traversal sequences and dangerous characters so that a
/// hostile property id or query string cannot escape the cache directory.
#[must_use]
fn sanitize_path_component(s: &str) -> String {
    let s = s.replace("..", "__");
    s.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|', '&', '='], "_")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
    struct TestData {
        name: String,
        value: u64,
    }

    fn make_cache(dir: &Path, ttl_secs: u64) -> Cache {
        Cache::new(dir, Duration::from_secs(ttl_secs), Utc::now(), false)
    }

    #[test]
    fn save_and_load_data() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = make_cache(tmp.path(), 3600);

        let data = TestData { name: "test".to_string(), value: 42 };
        cache.save("item.json", &data).unwrap();

        match cache.load::<TestData>("item.json") {
            CacheResult::Data(loaded) => assert_eq!(loaded, data),
            CacheResult::Miss => panic!("expected Data, got Miss"),
        }
    }

    #[test]
    fn load_nonexistent_key() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = make_cache(tmp.path(), 3600);

        assert!(matches!(cache.load::<TestData>("nope.json"), CacheResult::Miss));
    }

    #[test]
    fn load_invalid_json() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("bad.json"), "not valid json").unwrap();
        let cache = make_cache(tmp.path(), 3600);

        assert!(matches!(cache.load::<TestData>("bad.json"), CacheResult::Miss));
    }

    #[test]
    fn load_expired_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let old_time = Utc::now() - chrono::Duration::hours(2);

        // Write an envelope with an old timestamp directly
        let envelope = Envelope {
            timestamp: old_time,
            payload: TestData { name: "old".to_string(), value: 1 },
        };
        let path = tmp.path().join("old.json");
        let file = File::create(&path).unwrap();
        serde_json::to_writer(file, &envelope).unwrap();

        let cache = make_cache(tmp.path(), 3600);
        assert!(matches!(cache.load::<TestData>("old.json"), CacheResult::Miss));
    }

    #[test]
    fn load_future_timestamp_treated_as_fresh() {
        let tmp = tempfile::tempdir().unwrap();
        let future_time = Utc::now() + chrono::Duration::hours(1);

        let envelope = Envelope {
            timestamp: future_time,
            payload: TestData { name: "future".to_string(), value: 1 },
        };
        let path = tmp.path().join("future.json");
        let file = File::create(&path).unwrap();
        serde_json::to_writer(file, &envelope).unwrap();

        let cache = make_cache(tmp.path(), 3600);
        match cache.load::<TestData>("future.json") {
            CacheResult::Data(d) => assert_eq!(d.name, "future"),
            CacheResult::Miss => panic!("expected Data, got Miss"),
        }
    }

    #[test]
    fn ignore_cache_returns_miss() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = Cache::new(tmp.path(), Duration::from_secs(3600), Utc::now(), true);

        let data = TestData { name: "ignored".to_string(), value: 1 };
        // Save via a non-ignoring cache so the file actually exists
        make_cache(tmp.path(), 3600).save("item.json", &data).unwrap();

        assert!(matches!(cache.load::<TestData>("item.json"), CacheResult::Miss));
    }

    #[test]
    fn save_creates_parent_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = make_cache(tmp.path(), 3600);

        let data = TestData { name: "nested".to_string(), value: 123 };
        cache.save("reviews/p1/item.json", &data).unwrap();

        match cache.load::<TestData>("reviews/p1/item.json") {
            CacheResult::Data(loaded) => assert_eq!(loaded, data),
            CacheResult::Miss => panic!("expected Data, got Miss"),
        }
    }

    #[test]
    fn invalidate_property_removes_its_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = make_cache(tmp.path(), 3600);

        let data = TestData { name: "x".to_string(), value: 1 };
        cache.save("reviews/p1/a.json", &data).unwrap();
        cache.save("reviews/p2/b.json", &data).unwrap();
        cache.save(&property_key("p1"), &data).unwrap();
        cache.save(PROPERTIES_KEY, &data).unwrap();
        cache.save(PROPERTIES_ADMIN_KEY, &data).unwrap();
        cache.save(CHANNELS_KEY, &data).unwrap();

        cache.invalidate_property("p1").unwrap();

        assert!(matches!(cache.load::<TestData>("reviews/p1/a.json"), CacheResult::Miss));
        assert!(matches!(cache.load::<TestData>(&property_key("p1")), CacheResult::Miss));
        assert!(matches!(cache.load::<TestData>(PROPERTIES_KEY), CacheResult::Miss));
        assert!(matches!(cache.load::<TestData>(PROPERTIES_ADMIN_KEY), CacheResult::Miss));

        // Other properties and the channel catalog survive.
        assert!(matches!(cache.load::<TestData>("reviews/p2/b.json"), CacheResult::Data(_)));
        assert!(matches!(cache.load::<TestData>(CHANNELS_KEY), CacheResult::Data(_)));
    }

    #[test]
    fn invalidate_missing_property_is_a_no_op() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = make_cache(tmp.path(), 3600);

        cache.invalidate_property("ghost").unwrap();
    }

    #[test]
    fn reviews_key_varies_with_filter() {
        use crate::filter::ReviewFilter;

        let a = reviews_key("p1", &ReviewFilter::default());
        let b = reviews_key("p1", &ReviewFilter::listing_defaults());
        assert_ne!(a, b);
        assert!(a.starts_with("reviews/p1/"));
    }

    #[test]
    fn keys_are_sanitized() {
        use crate::filter::ReviewFilter;

        let key = reviews_key("../../etc", &ReviewFilter::default());
        assert!(!key.contains(".."));

        let key = property_key("a/b:c");
        assert_eq!(key, "properties/a_b_c.json");
    }
}
