//! Core functionality modules
//!
//! This module contains the lookup pipeline and its supporting pieces:
//! - `provider`: lyrics API client and the provider trait seam
//! - `cache`: in-memory memoization of successful lookups
//! - `lookup`: the lookup service tying provider and cache together
//! - `recent`: recent search history for interactive sessions

pub mod cache;
pub mod lookup;
pub mod provider;
pub mod recent;

// Re-export commonly used types for convenience
pub use cache::CacheStats;
pub use lookup::{LyricLookup, LyricsResult, LyricsSource};
pub use provider::{LyricsOvhClient, LyricsProvider};
pub use recent::{Query, RecentSearches, RECENT_SEARCH_LIMIT};
