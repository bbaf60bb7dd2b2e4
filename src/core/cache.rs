//! In-memory lyrics cache
//!
//! Process-local memoization table for successful lookups. Entries live for
//! the lifetime of the owning lookup service and are never evicted or
//! persisted.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

/// Cache keyed by normalized artist/song pairs. Only successful, non-empty
/// lyric responses are ever inserted.
#[derive(Debug, Default)]
pub struct LyricsCache {
    entries: HashMap<String, String>,
    total_requests: u64,
    cache_hits: u64,
}

/// Snapshot of cache usage counters.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub total_requests: u64,
    pub cache_hits: u64,
    pub hit_rate_percent: f64,
}

impl LyricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized cache key: trimmed and lowercased so that "Adele"/"adele"
    /// or trailing whitespace map to the same entry.
    pub fn cache_key(artist: &str, song: &str) -> String {
        format!(
            "{}-{}",
            artist.trim().to_lowercase(),
            song.trim().to_lowercase()
        )
    }

    /// Look up cached lyrics. Takes `&mut self` because hit/miss counters
    /// are updated on every call.
    pub fn get(&mut self, artist: &str, song: &str) -> Option<String> {
        let key = Self::cache_key(artist, song);
        self.total_requests += 1;

        match self.entries.get(&key) {
            Some(lyrics) => {
                self.cache_hits += 1;
                debug!("Cache hit for: {} - {}", artist, song);
                Some(lyrics.clone())
            }
            None => {
                debug!("Cache miss for: {} - {}", artist, song);
                None
            }
        }
    }

    /// Store lyrics under the normalized key. A later insert for the same
    /// pair overwrites the previous entry.
    pub fn insert(&mut self, artist: &str, song: &str, lyrics: String) {
        let key = Self::cache_key(artist, song);
        self.entries.insert(key, lyrics);
    }

    pub fn stats(&self) -> CacheStats {
        let hit_rate_percent = if self.total_requests > 0 {
            (self.cache_hits as f64 / self.total_requests as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            total_entries: self.entries.len(),
            total_requests: self.total_requests,
            cache_hits: self.cache_hits,
            hit_rate_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_case_insensitive_and_trimmed() {
        assert_eq!(
            LyricsCache::cache_key("Adele", "Hello"),
            LyricsCache::cache_key("  adele ", "HELLO  ")
        );
        assert_eq!(LyricsCache::cache_key("Adele", "Hello"), "adele-hello");
    }

    #[test]
    fn distinct_pairs_get_distinct_keys() {
        assert_ne!(
            LyricsCache::cache_key("Adele", "Hello"),
            LyricsCache::cache_key("Lionel Richie", "Hello")
        );
    }

    #[test]
    fn get_returns_inserted_lyrics_for_equivalent_spelling() {
        let mut cache = LyricsCache::new();
        cache.insert("Adele", "Hello", "Hello, it's me".to_string());

        assert_eq!(
            cache.get("  ADELE", "hello  "),
            Some("Hello, it's me".to_string())
        );
        assert_eq!(cache.stats().total_entries, 1);
    }

    #[test]
    fn miss_returns_none_and_counts_request() {
        let mut cache = LyricsCache::new();
        assert_eq!(cache.get("Adele", "Hello"), None);

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.total_requests, 1);
        assert_eq!(stats.cache_hits, 0);
        assert_eq!(stats.hit_rate_percent, 0.0);
    }

    #[test]
    fn insert_overwrites_existing_entry() {
        let mut cache = LyricsCache::new();
        cache.insert("Adele", "Hello", "first".to_string());
        cache.insert("adele", "hello", "second".to_string());

        assert_eq!(cache.stats().total_entries, 1);
        assert_eq!(cache.get("Adele", "Hello"), Some("second".to_string()));
    }

    #[test]
    fn stats_track_hit_rate() {
        let mut cache = LyricsCache::new();
        cache.insert("Adele", "Hello", "text".to_string());

        cache.get("Adele", "Hello");
        cache.get("Queen", "Bohemian Rhapsody");

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.hit_rate_percent, 50.0);
    }
}
