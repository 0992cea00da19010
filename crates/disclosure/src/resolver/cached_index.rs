//! Corp-code index resolver backed by a process-wide, time-bounded cache.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{info, warn};

use super::corp_index::CorpCodeIndex;
use super::traits::{ResolvedCompany, Resolver};
use crate::errors::DisclosureError;
use crate::provider::CorpCodeSource;

/// Default lifetime of a downloaded index.
pub const DEFAULT_INDEX_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct CachedIndex {
    index: CorpCodeIndex,
    loaded_at: Instant,
}

impl CachedIndex {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.loaded_at.elapsed() < ttl
    }
}

/// Resolver over the full DART corporation-code index.
///
/// The index is downloaded on first use and kept for `ttl`. An expired index
/// is rebuilt by exactly one caller; concurrent callers wait for that rebuild
/// instead of starting their own. The new index is assembled without holding
/// the read lock and swapped in at once, so readers always see a complete
/// index.
pub struct CachedIndexResolver {
    source: Arc<dyn CorpCodeSource>,
    ttl: Duration,
    cache: RwLock<Option<Arc<CachedIndex>>>,
    refresh: tokio::sync::Mutex<()>,
}

impl CachedIndexResolver {
    pub fn new(source: Arc<dyn CorpCodeSource>) -> Self {
        Self::with_ttl(source, DEFAULT_INDEX_TTL)
    }

    pub fn with_ttl(source: Arc<dyn CorpCodeSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cache: RwLock::new(None),
            refresh: tokio::sync::Mutex::new(()),
        }
    }

    /// Drop the cached index; the next lookup downloads a new one.
    pub fn invalidate(&self) {
        let mut cache = self.cache.write().unwrap_or_else(|poisoned| {
            warn!("Corp code cache lock was poisoned, recovering");
            poisoned.into_inner()
        });
        *cache = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.current().is_some()
    }

    /// The cached index, if one is loaded and still fresh.
    fn current(&self) -> Option<Arc<CachedIndex>> {
        let cache = self.cache.read().unwrap_or_else(|poisoned| {
            warn!("Corp code cache lock was poisoned, recovering");
            poisoned.into_inner()
        });
        cache
            .as_ref()
            .filter(|cached| cached.is_fresh(self.ttl))
            .cloned()
    }

    fn store(&self, cached: Arc<CachedIndex>) {
        let mut cache = self.cache.write().unwrap_or_else(|poisoned| {
            warn!("Corp code cache lock was poisoned, recovering");
            poisoned.into_inner()
        });
        *cache = Some(cached);
    }

    async fn index(&self) -> Result<Arc<CachedIndex>, DisclosureError> {
        if let Some(cached) = self.current() {
            return Ok(cached);
        }

        let _guard = self.refresh.lock().await;

        // Another caller may have finished a rebuild while we waited.
        if let Some(cached) = self.current() {
            return Ok(cached);
        }

        let started = Instant::now();
        let entries = self.source.load_corp_codes().await?;
        let cached = Arc::new(CachedIndex {
            index: CorpCodeIndex::new(entries),
            loaded_at: Instant::now(),
        });
        info!(
            "Rebuilt corp code index with {} entries in {:?}",
            cached.index.len(),
            started.elapsed()
        );

        self.store(cached.clone());
        Ok(cached)
    }
}

#[async_trait]
impl Resolver for CachedIndexResolver {
    async fn resolve(&self, company_name: &str) -> Option<Result<ResolvedCompany, DisclosureError>> {
        if company_name.trim().is_empty() {
            return None;
        }
        match self.index().await {
            Ok(cached) => cached.index.resolve(company_name).map(Ok),
            Err(err) => Some(Err(err)),
        }
    }
}
