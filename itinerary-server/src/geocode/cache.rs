//! Caching layer for location searches.
//!
//! The editor searches as the operator types, so the same prefixes repeat.
//! Queries are cached by their trimmed, lowercased text and the result
//! limit.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Coordinate, InvalidCoordinate};

use super::error::GeocodeError;
use super::resolver::{LocationCandidate, LocationResolver, MapClick};

/// Cache key: (normalized query, limit).
type SearchKey = (String, usize);

/// Cached search result.
type SearchEntry = Arc<Vec<LocationCandidate>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// A resolver wrapper that caches successful searches.
///
/// Failures are not cached.
pub struct CachedResolver<R> {
    inner: R,
    searches: MokaCache<SearchKey, SearchEntry>,
}

impl<R: LocationResolver> CachedResolver<R> {
    /// Wrap `inner` with a cache.
    pub fn new(inner: R, config: &CacheConfig) -> Self {
        let searches = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, searches }
    }

    /// Access the underlying resolver for operations that bypass cache.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Get cache statistics.
    pub fn entry_count(&self) -> u64 {
        self.searches.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.searches.invalidate_all();
    }

    async fn cached_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LocationCandidate>, GeocodeError> {
        let key = (normalize(query), limit);

        if let Some(cached) = self.searches.get(&key).await {
            debug!(query = %key.0, "location search cache hit");
            return Ok(cached.as_ref().clone());
        }

        let candidates = self.inner.search(query, limit).await?;
        self.searches
            .insert(key, Arc::new(candidates.clone()))
            .await;

        Ok(candidates)
    }
}

impl<R: LocationResolver> LocationResolver for CachedResolver<R> {
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<LocationCandidate>, GeocodeError>> {
        self.cached_search(query, limit).boxed()
    }

    fn resolve_click(&self, click: MapClick) -> Result<Coordinate, InvalidCoordinate> {
        self.inner.resolve_click(click)
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
