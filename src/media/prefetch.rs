// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded cache of decoded gallery images.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used images go first
//! - **Memory-bounded**: total decoded size limited by a byte budget
//! - **URL-keyed**: images indexed by their remote URL
//! - **Request tracking**: URLs in flight or known to fail are not requested again
//!
//! # Usage
//!
//! ```ignore
//! let wanted = cache.claim(entry.images());
//! let tasks = wanted.into_iter().map(|url| Task::perform(fetch_image(client.clone(), url, max), Message::ImageLoaded));
//! ```

use super::image::ImageData;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Fallback entry capacity when the configured one is zero.
const FALLBACK_CAPACITY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(15);

/// Limits of the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchConfig {
    pub max_bytes: usize,
    pub max_images: usize,
}

/// What the view should draw for a URL.
#[derive(Debug, Clone, Copy)]
pub enum ImageStatus<'a> {
    Ready(&'a ImageData),
    Loading,
    Failed,
    Unrequested,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefetchStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

/// LRU cache of decoded images plus bookkeeping for pending downloads.
pub struct ImagePrefetchCache {
    cache: LruCache<String, ImageData>,
    config: PrefetchConfig,
    current_bytes: usize,
    pending: HashSet<String>,
    failed: HashSet<String>,
    stats: PrefetchStats,
}

impl ImagePrefetchCache {
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(FALLBACK_CAPACITY);
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            pending: HashSet::new(),
            failed: HashSet::new(),
            stats: PrefetchStats::default(),
        }
    }

    /// Marks every URL that is neither cached, pending nor failed as pending
    /// and returns them, in input order and without duplicates.
    pub fn claim<S: AsRef<str>>(&mut self, urls: &[S]) -> Vec<String> {
        let mut claimed = Vec::new();
        for url in urls {
            let url = url.as_ref();
            if self.cache.contains(url) || self.failed.contains(url) {
                continue;
            }
            if self.pending.insert(url.to_string()) {
                claimed.push(url.to_string());
            }
        }
        claimed
    }

    /// Stores a downloaded image. Returns `false` if it is too large to keep.
    pub fn insert(&mut self, url: String, image: ImageData) -> bool {
        self.pending.remove(&url);
        let size = image.size_bytes();

        if size > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + size > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
                self.stats.evictions += 1;
            }
        }

        // Entry-count eviction done by `push` must be accounted for too.
        if let Some((evicted_url, evicted)) = self.cache.push(url.clone(), image) {
            if evicted_url != url {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
                self.stats.evictions += 1;
            }
        }
        self.current_bytes += size;
        self.stats.insertions += 1;
        true
    }

    /// Records a failed download so it is not retried this session.
    pub fn mark_failed(&mut self, url: String) {
        self.pending.remove(&url);
        self.failed.insert(url);
    }

    /// Looks up an image and refreshes its LRU position.
    pub fn get(&mut self, url: &str) -> Option<&ImageData> {
        let found = self.cache.get(url);
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Read-only lookup for views.
    #[must_use]
    pub fn status(&self, url: &str) -> ImageStatus<'_> {
        if let Some(image) = self.cache.peek(url) {
            ImageStatus::Ready(image)
        } else if self.pending.contains(url) {
            ImageStatus::Loading
        } else if self.failed.contains(url) {
            ImageStatus::Failed
        } else {
            ImageStatus::Unrequested
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> PrefetchStats {
        self.stats
    }
}

impl std::fmt::Debug for ImagePrefetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePrefetchCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
    }

    fn cache(max_bytes: usize, max_images: usize) -> ImagePrefetchCache {
        ImagePrefetchCache::new(PrefetchConfig {
            max_bytes,
            max_images,
        })
    }

    #[test]
    fn claim_skips_pending_and_duplicates() {
        let mut cache = cache(1_000_000, 8);
        let first = cache.claim(&["a", "b", "a"]);
        assert_eq!(first, ["a", "b"]);
        assert!(cache.claim(&["a", "b"]).is_empty());
        assert!(matches!(cache.status("a"), ImageStatus::Loading));
    }

    #[test]
    fn insert_then_status_ready() {
        let mut cache = cache(1_000_000, 8);
        cache.claim(&["a"]);
        assert!(cache.insert("a".into(), image(10, 10)));
        assert!(matches!(cache.status("a"), ImageStatus::Ready(img) if img.width == 10));
        assert!(cache.claim(&["a"]).is_empty());
    }

    #[test]
    fn failed_urls_are_not_reclaimed() {
        let mut cache = cache(1_000_000, 8);
        cache.claim(&["bad"]);
        cache.mark_failed("bad".into());
        assert!(matches!(cache.status("bad"), ImageStatus::Failed));
        assert!(cache.claim(&["bad"]).is_empty());
    }

    #[test]
    fn byte_budget_evicts_least_recent() {
        // Each 50x50 image is 10_000 bytes.
        let mut cache = cache(30_000, 100);
        for url in ["a", "b", "c"] {
            cache.insert(url.into(), image(50, 50));
        }
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a").is_some());
        cache.insert("d".into(), image(50, 50));

        assert!(cache.memory_usage() <= 30_000);
        assert!(matches!(cache.status("b"), ImageStatus::Unrequested));
        assert!(matches!(cache.status("a"), ImageStatus::Ready(_)));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn entry_limit_evicts_and_tracks_bytes() {
        let mut cache = cache(1_000_000, 2);
        for url in ["a", "b", "c"] {
            cache.insert(url.into(), image(10, 10));
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.memory_usage(), 2 * 400);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn oversized_image_is_not_kept() {
        let mut cache = cache(10_000, 8);
        assert!(!cache.insert("big".into(), image(50, 50)));
        assert!(cache.is_empty());
        assert!(matches!(cache.status("big"), ImageStatus::Unrequested));
    }

    #[test]
    fn replacing_url_updates_size() {
        let mut cache = cache(1_000_000, 8);
        cache.insert("a".into(), image(10, 10));
        cache.insert("a".into(), image(20, 20));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 20 * 20 * 4);
    }

    #[test]
    fn zero_capacity_falls_back() {
        let mut cache = cache(1_000_000, 0);
        assert!(cache.insert("a".into(), image(1, 1)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_counts_hits_and_misses() {
        let mut cache = cache(1_000_000, 8);
        cache.insert("a".into(), image(1, 1));
        let _ = cache.get("a");
        let _ = cache.get("z");
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }
}
