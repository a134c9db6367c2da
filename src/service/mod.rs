//! Review service access: typed client, caching, and degraded-mode fallback
//!
//! This module is responsible for getting review and property collections
//! into the process. The [`ReviewsClient`] speaks the remote service's HTTP
//! API; the [`Cache`] keeps fetched collections on disk keyed by the request
//! that produced them; and [`ReviewService`] composes the two, falling back
//! to the embedded sample dataset when the service is unreachable so the
//! dashboard keeps working in a degraded mode.
//!
//! # Implementation Model
//!
//! Reads follow a cache-first pipeline: cache hit, else fetch (with retry),
//! else sample fallback. Mutations (approve/reject) go straight to the
//! service exactly once; on success the affected property's cached
//! collections are invalidated so statistics are recomputed from fresh data.
//!
//! Every read is stamped with a monotonically increasing generation number.
//! A caller that issues overlapping fetches keeps only the result whose
//! generation is still current ([`ReviewService::is_current`]) and discards
//! the rest; a newer filter state supersedes, but does not cancel, an
//! in-flight request.

mod cache;
mod client;
mod resilient_http;
pub mod sample;

pub use cache::{Cache, CacheResult};
pub use client::ReviewsClient;

use crate::Result;
use crate::filter::ReviewFilter;
use crate::model::{Channel, Property, Review};
use chrono::{DateTime, Utc};
use core::time::Duration;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

const LOG_TARGET: &str = "   service";

/// A fetched collection stamped with its generation.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    /// Generation number of the fetch that produced this value. Stale
    /// generations must be discarded by the caller, not rendered.
    pub generation: u64,

    /// True when the value came from the sample dataset because the review
    /// service could not be reached.
    pub degraded: bool,

    pub value: T,
}

/// Cache-backed, fallback-capable access to the review service.
#[derive(Debug)]
pub struct ReviewService {
    client: ReviewsClient,
    reviews_cache: Cache,
    properties_cache: Cache,
    channels_cache: Cache,
    offline: bool,
    generation: AtomicU64,
}

impl ReviewService {
    /// Create a new service.
    ///
    /// The three caches share `cache_dir` but carry their own TTLs, since
    /// review listings go stale much faster than the channel catalog.
    #[must_use]
    pub fn new(
        client: ReviewsClient,
        cache_dir: &Path,
        reviews_cache_ttl: Duration,
        properties_cache_ttl: Duration,
        channels_cache_ttl: Duration,
        now: DateTime<Utc>,
        ignore_cached: bool,
        offline: bool,
    ) -> Self {
        Self {
            client,
            reviews_cache: Cache::new(cache_dir, reviews_cache_ttl, now, ignore_cached),
            properties_cache: Cache::new(cache_dir, properties_cache_ttl, now, ignore_cached),
            channels_cache: Cache::new(cache_dir, channels_cache_ttl, now, ignore_cached),
            offline,
            generation: AtomicU64::new(0),
        }
    }

    /// Whether a fetched generation is still the latest one issued.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation.load(Ordering::Acquire)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Reviews of a property matching the given filter.
    pub async fn reviews(&self, property_id: &str, filter: &ReviewFilter) -> Result<Fetched<Vec<Review>>> {
        let generation = self.next_generation();

        if self.offline {
            let reviews = sample::reviews_for_property(property_id, filter)?;
            return Ok(Fetched { generation, degraded: false, value: reviews });
        }

        let key = cache::reviews_key(property_id, filter);
        if let CacheResult::Data(reviews) = self.reviews_cache.load(&key) {
            return Ok(Fetched { generation, degraded: false, value: reviews });
        }

        match self.client.reviews(property_id, filter).await {
            Ok(reviews) => {
                self.store(&self.reviews_cache, &key, &reviews);
                Ok(Fetched { generation, degraded: false, value: reviews })
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Review service unavailable, using sample data: {e:#}");
                let reviews = sample::reviews_for_property(property_id, filter)?;
                Ok(Fetched { generation, degraded: true, value: reviews })
            }
        }
    }

    /// A single property record with its embedded reviews.
    pub async fn property(&self, property_id: &str) -> Result<Fetched<Property>> {
        let generation = self.next_generation();

        if self.offline {
            let property = sample::property(property_id)?
                .ok_or_else(|| ohno::app_err!("property '{property_id}' not found in sample data"))?;
            return Ok(Fetched { generation, degraded: false, value: property });
        }

        let key = cache::property_key(property_id);
        if let CacheResult::Data(property) = self.properties_cache.load(&key) {
            return Ok(Fetched { generation, degraded: false, value: property });
        }

        match self.client.property(property_id).await {
            Ok(property) => {
                self.store(&self.properties_cache, &key, &property);
                Ok(Fetched { generation, degraded: false, value: property })
            }
            Err(e) => match sample::property(property_id)? {
                Some(property) => {
                    log::warn!(target: LOG_TARGET, "Review service unavailable, using sample data: {e:#}");
                    Ok(Fetched { generation, degraded: true, value: property })
                }
                None => Err(e),
            },
        }
    }

    /// The property list.
    pub async fn properties(&self) -> Result<Fetched<Vec<Property>>> {
        self.property_list(cache::PROPERTIES_KEY, |client| async move { client.properties().await })
            .await
    }

    /// The admin property list, with full review embeds.
    pub async fn properties_admin(&self) -> Result<Fetched<Vec<Property>>> {
        self.property_list(cache::PROPERTIES_ADMIN_KEY, |client| async move { client.properties_admin().await })
            .await
    }

    async fn property_list<F, Fut>(&self, key: &str, fetch: F) -> Result<Fetched<Vec<Property>>>
    where
        F: FnOnce(ReviewsClient) -> Fut,
        Fut: Future<Output = Result<Vec<Property>>>,
    {
        let generation = self.next_generation();

        if self.offline {
            return Ok(Fetched { generation, degraded: false, value: sample::properties()? });
        }

        if let CacheResult::Data(properties) = self.properties_cache.load(key) {
            return Ok(Fetched { generation, degraded: false, value: properties });
        }

        match fetch(self.client.clone()).await {
            Ok(properties) => {
                self.store(&self.properties_cache, key, &properties);
                Ok(Fetched { generation, degraded: false, value: properties })
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Review service unavailable, using sample data: {e:#}");
                Ok(Fetched { generation, degraded: true, value: sample::properties()? })
            }
        }
    }

    /// The channel catalog.
    pub async fn channels(&self) -> Result<Fetched<Vec<Channel>>> {
        let generation = self.next_generation();

        if self.offline {
            return Ok(Fetched { generation, degraded: false, value: sample::channels()? });
        }

        if let CacheResult::Data(channels) = self.channels_cache.load(cache::CHANNELS_KEY) {
            return Ok(Fetched { generation, degraded: false, value: channels });
        }

        match self.client.channels().await {
            Ok(channels) => {
                self.store(&self.channels_cache, cache::CHANNELS_KEY, &channels);
                Ok(Fetched { generation, degraded: false, value: channels })
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Review service unavailable, using sample data: {e:#}");
                Ok(Fetched { generation, degraded: true, value: sample::channels()? })
            }
        }
    }

    /// Approve a review, then invalidate the property's cached collections.
    ///
    /// Mutations never fall back to sample data: a failure is returned and
    /// prior state (including the cache) is left unchanged.
    pub async fn approve(&self, review_id: &str, property_id: &str) -> Result<()> {
        self.client.approve(review_id).await?;
        self.invalidate(property_id);
        Ok(())
    }

    /// Reject a review, then invalidate the property's cached collections.
    pub async fn reject(&self, review_id: &str, property_id: &str) -> Result<()> {
        self.client.reject(review_id).await?;
        self.invalidate(property_id);
        Ok(())
    }

    fn invalidate(&self, property_id: &str) {
        if let Err(e) = self.reviews_cache.invalidate_property(property_id) {
            log::debug!(target: LOG_TARGET, "Could not invalidate cache for '{property_id}': {e:#}");
        }
    }

    fn store<T: serde::Serialize>(&self, cache: &Cache, key: &str, data: &T) {
        if let Err(e) = cache.save(key, data) {
            log::debug!(target: LOG_TARGET, "Could not save cache entry '{key}': {e:#}");
        }
    }
}
