//! Cached access to content bundles.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheService, MemoryCache};
use crate::content::definitions::ContentBundle;
use crate::content::loader::{bundle_files, load_bundle, merge_bundles};
use crate::error::Result;

/// Default time a loaded bundle is served from cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

pub type BundleCache = MemoryCache<Arc<ContentBundle>>;

/// Loads bundles through a TTL cache keyed by canonical path.
pub struct ContentLibrary<C = BundleCache> {
    cache: C,
    ttl: Duration,
}

impl ContentLibrary<BundleCache> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_cache(MemoryCache::new(), ttl)
    }
}

impl Default for ContentLibrary<BundleCache> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl<C: CacheService<Arc<ContentBundle>>> ContentLibrary<C> {
    pub fn with_cache(cache: C, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Load one bundle file, from cache when a live entry exists.
    pub fn load(&mut self, path: &Path) -> Result<Arc<ContentBundle>> {
        let key = cache_key(path);
        if let Some(bundle) = self.cache.get(&key) {
            return Ok(bundle);
        }

        let bundle = Arc::new(load_bundle(path)?);
        self.cache.set(&key, Arc::clone(&bundle), self.ttl);
        Ok(bundle)
    }

    /// Load files and directories of bundle files into one merged bundle.
    pub fn load_all<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<ContentBundle> {
        let mut bundles = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let files = if path.is_dir() {
                bundle_files(path)?
            } else {
                vec![path.to_path_buf()]
            };
            for file in files {
                bundles.push(self.load(&file)?.as_ref().clone());
            }
        }
        Ok(merge_bundles(bundles))
    }

    /// Forget a cached bundle so the next load reads the file again.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.cache.remove(&cache_key(path))
    }

    /// Drop bundles whose TTL has passed.
    pub fn purge_expired(&mut self) -> usize {
        self.cache.purge_expired()
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}

fn cache_key(path: &Path) -> String {
    let canonical: PathBuf = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("bundle:{}", canonical.display())
}
