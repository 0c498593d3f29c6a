//! Caching layer for loaded facilities and geocoder lookups.
//!
//! Facilities are loaded as one set and kept for a TTL; the next request
//! after expiry triggers a full reload (fresh ratings and open status).
//! Geocoder results are cached per normalized query, including "not found".

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::geocode::{GeocodeError, GeocodedPlace, Geocoder};
use crate::normalize::{RandomRating, RatingSource};
use crate::opendata::{DatasetSource, FacilityLoader, LoadOutcome, OpenDataClient};

/// Configuration for the caches.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a loaded facility set is served before reloading.
    pub facilities_ttl: Duration,

    /// How long a geocoder answer is kept.
    pub geocode_ttl: Duration,

    /// Maximum number of cached geocoder answers.
    pub geocode_capacity: u64,
}

impl CacheConfig {
    /// Set the facility TTL.
    pub fn with_facilities_ttl(mut self, ttl: Duration) -> Self {
        self.facilities_ttl = ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            facilities_ttl: Duration::from_secs(600),
            geocode_ttl: Duration::from_secs(60 * 60),
            geocode_capacity: 1000,
        }
    }
}

/// Loaded facilities, reloaded on expiry.
pub struct FacilityStore<S = OpenDataClient, R = RandomRating> {
    loader: FacilityLoader<S, R>,
    cache: MokaCache<(), Arc<LoadOutcome>>,
}

impl<S, R> FacilityStore<S, R>
where
    S: DatasetSource,
    R: RatingSource,
{
    /// Create a store around a loader.
    pub fn new(loader: FacilityLoader<S, R>, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.facilities_ttl)
            .max_capacity(1)
            .build();

        Self { loader, cache }
    }

    /// The current facility set, loading it if absent or expired.
    ///
    /// Concurrent callers during a load wait for the same result.
    pub async fn current(&self) -> Arc<LoadOutcome> {
        self.cache
            .get_with((), async { Arc::new(self.loader.load().await) })
            .await
    }

    /// Drop the cached set so the next call reloads.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&()).await;
    }
}

/// Geocoder with a result cache.
pub struct CachedGeocoder {
    geocoder: Geocoder,
    cache: MokaCache<String, Option<GeocodedPlace>>,
}

impl CachedGeocoder {
    /// Wrap a geocoder.
    pub fn new(geocoder: Geocoder, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.geocode_ttl)
            .max_capacity(config.geocode_capacity)
            .build();

        Self { geocoder, cache }
    }

    /// Resolve a query, using a cached answer when available.
    ///
    /// Errors are not cached.
    pub async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, Arc<GeocodeError>> {
        let key = cache_key(query);
        if key.is_empty() {
            return Ok(None);
        }

        self.cache
            .try_get_with(key, self.geocoder.geocode(query))
            .await
    }
}

/// Case- and whitespace-insensitive cache key.
fn cache_key(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
