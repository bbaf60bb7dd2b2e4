//! Recent search history
//!
//! Session-scoped list of the last few artist/song pairs a user asked for,
//! newest first. Held in memory only and discarded when the session ends.

use std::fmt;

/// Maximum number of entries kept in the history.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// An artist/song pair exactly as the user entered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub artist: String,
    pub song: String,
}

impl Query {
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            song: song.into(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.song)
    }
}

/// Fixed-capacity search history. Every attempted search is recorded,
/// including ones that later fail validation or fetching, and duplicates
/// are kept as separate entries.
#[derive(Debug, Default)]
pub struct RecentSearches {
    entries: Vec<Query>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a query and drop anything beyond the capacity.
    pub fn record(&mut self, query: Query) {
        self.entries.insert(0, query);
        self.entries.truncate(RECENT_SEARCH_LIMIT);
    }

    /// Entry by position, `0` being the most recent.
    pub fn get(&self, index: usize) -> Option<&Query> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Query> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
