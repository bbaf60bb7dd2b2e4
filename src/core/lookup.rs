//! Lyric lookup service
//!
//! Ties the provider client and the in-memory cache together. Every lookup
//! follows the same path: validate, check the cache, fetch on a miss, cache
//! only successful non-empty results.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::cache::{CacheStats, LyricsCache};
use crate::core::provider::LyricsProvider;
use crate::error::{LyrfindError, Result};

/// Where the lyric text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricsSource {
    Cache,
    Provider,
}

impl LyricsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LyricsSource::Cache => "cache",
            LyricsSource::Provider => "provider",
        }
    }
}

/// A successful lookup: the lyric text plus where it was found.
#[derive(Debug, Clone)]
pub struct LyricsResult {
    pub text: String,
    pub source: LyricsSource,
}

/// Lookup service owning its own cache instance. The cache lives exactly as
/// long as the service and is shared by nothing else.
pub struct LyricLookup {
    provider: Arc<dyn LyricsProvider>,
    cache: RwLock<LyricsCache>,
}

impl LyricLookup {
    pub fn new(provider: Arc<dyn LyricsProvider>) -> Self {
        Self {
            provider,
            cache: RwLock::new(LyricsCache::new()),
        }
    }

    /// Look up lyrics for an artist/song pair.
    ///
    /// Returns `Ok(Some(result))` when lyrics were found (cached or fetched),
    /// `Ok(None)` when the provider has no lyrics for the song, and `Err(_)`
    /// on invalid input or a failed fetch. Failed fetches and not-found
    /// answers are never cached, so repeating the call fetches again.
    pub async fn lookup(&self, artist: &str, song: &str) -> Result<Option<LyricsResult>> {
        let artist = artist.trim();
        let song = song.trim();

        if artist.is_empty() || song.is_empty() {
            return Err(LyrfindError::Validation(
                "Artist and song must both be non-empty".to_string(),
            ));
        }

        // Need a write lock even for the hit check because get() updates
        // usage counters. The lock is released before any network call.
        {
            let mut cache = self.cache.write().await;
            if let Some(text) = cache.get(artist, song) {
                return Ok(Some(LyricsResult {
                    text,
                    source: LyricsSource::Cache,
                }));
            }
        }

        info!("Fetching lyrics for: {} - {}", artist, song);
        let fetched = self.provider.fetch(artist, song).await?;

        match fetched {
            Some(text) => {
                let mut cache = self.cache.write().await;
                cache.insert(artist, song, text.clone());
                Ok(Some(LyricsResult {
                    text,
                    source: LyricsSource::Provider,
                }))
            }
            None => {
                debug!("Provider has no lyrics for: {} - {}", artist, song);
                Ok(None)
            }
        }
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum StubOutcome {
        Lyrics(String),
        NotFound,
        Failure,
    }

    /// Provider double that records how it was called.
    struct StubProvider {
        outcome: StubOutcome,
        calls: AtomicUsize,
        last_args: Mutex<Option<(String, String)>>,
    }

    impl StubProvider {
        fn lyrics(text: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: StubOutcome::Lyrics(text.to_string()),
                calls: AtomicUsize::new(0),
                last_args: Mutex::new(None),
            })
        }

        fn not_found() -> Arc<Self> {
            Arc::new(Self {
                outcome: StubOutcome::NotFound,
                calls: AtomicUsize::new(0),
                last_args: Mutex::new(None),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                outcome: StubOutcome::Failure,
                calls: AtomicUsize::new(0),
                last_args: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_args(&self) -> Option<(String, String)> {
            self.last_args.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LyricsProvider for StubProvider {
        // Spelled out because this module imports the crate-wide Result alias.
        async fn fetch(
            &self,
            artist: &str,
            song: &str,
        ) -> std::result::Result<Option<String>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_args.lock().unwrap() = Some((artist.to_string(), song.to_string()));

            match &self.outcome {
                StubOutcome::Lyrics(text) => Ok(Some(text.clone())),
                StubOutcome::NotFound => Ok(None),
                StubOutcome::Failure => Err(ProviderError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                }),
            }
        }
    }

    #[tokio::test]
    async fn repeated_lookup_fetches_only_once() {
        let provider = StubProvider::lyrics("Is this the real life?");
        let lookup = LyricLookup::new(provider.clone());

        let first = lookup.lookup("Queen", "Bohemian Rhapsody").await.unwrap();
        let second = lookup.lookup("Queen", "Bohemian Rhapsody").await.unwrap();

        let first = first.unwrap();
        let second = second.unwrap();
        assert_eq!(first.text, "Is this the real life?");
        assert_eq!(first.source, LyricsSource::Provider);
        assert_eq!(second.text, first.text);
        assert_eq!(second.source, LyricsSource::Cache);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn equivalent_spellings_share_one_cache_entry() {
        let provider = StubProvider::lyrics("Hello, it's me");
        let lookup = LyricLookup::new(provider.clone());

        lookup.lookup("Adele", "Hello").await.unwrap();
        let cached = lookup.lookup("  ADELE ", "hello  ").await.unwrap().unwrap();

        assert_eq!(cached.source, LyricsSource::Cache);
        assert_eq!(provider.calls(), 1);

        let stats = lookup.cache_stats().await;
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn empty_artist_is_rejected_without_any_fetch() {
        let provider = StubProvider::lyrics("never seen");
        let lookup = LyricLookup::new(provider.clone());

        let result = lookup.lookup("", "Hello").await;

        assert!(matches!(result, Err(LyrfindError::Validation(_))));
        assert_eq!(provider.calls(), 0);
        // Validation short-circuits before the cache is consulted.
        assert_eq!(lookup.cache_stats().await.total_requests, 0);
    }

    #[tokio::test]
    async fn whitespace_only_song_is_rejected() {
        let provider = StubProvider::lyrics("never seen");
        let lookup = LyricLookup::new(provider.clone());

        let result = lookup.lookup("Adele", "   ").await;

        assert!(matches!(result, Err(LyrfindError::Validation(_))));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let provider = StubProvider::failing();
        let lookup = LyricLookup::new(provider.clone());

        let first = lookup.lookup("Adele", "Hello").await;
        let second = lookup.lookup("Adele", "Hello").await;

        assert!(matches!(first, Err(LyrfindError::Provider(_))));
        assert!(matches!(second, Err(LyrfindError::Provider(_))));
        // Each attempt reached the provider again.
        assert_eq!(provider.calls(), 2);
        assert_eq!(lookup.cache_stats().await.total_entries, 0);
    }

    #[tokio::test]
    async fn not_found_is_not_cached() {
        let provider = StubProvider::not_found();
        let lookup = LyricLookup::new(provider.clone());

        let first = lookup.lookup("Adele", "Hello").await.unwrap();
        let second = lookup.lookup("Adele", "Hello").await.unwrap();

        assert!(first.is_none());
        assert!(second.is_none());
        assert_eq!(provider.calls(), 2);
        assert_eq!(lookup.cache_stats().await.total_entries, 0);
    }

    #[tokio::test]
    async fn provider_receives_trimmed_original_case() {
        let provider = StubProvider::lyrics("Yesterday, all my troubles...");
        let lookup = LyricLookup::new(provider.clone());

        lookup.lookup("  The Beatles ", " Yesterday  ").await.unwrap();

        assert_eq!(
            provider.last_args(),
            Some(("The Beatles".to_string(), "Yesterday".to_string()))
        );
    }

    #[tokio::test]
    async fn stats_reflect_full_lookup_flow() {
        let provider = StubProvider::lyrics("text");
        let lookup = LyricLookup::new(provider.clone());

        lookup.lookup("Queen", "Bohemian Rhapsody").await.unwrap();
        lookup.lookup("queen", "bohemian rhapsody").await.unwrap();

        let stats = lookup.cache_stats().await;
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.hit_rate_percent, 50.0);
    }
}
