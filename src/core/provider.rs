//! Lyrics provider client
//!
//! Defines the provider seam used by the lookup service and the HTTP client
//! for the lyrics.ovh public API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::ProviderError;

/// Source of lyric text for the lookup service.
///
/// `fetch` distinguishes three outcomes:
/// - `Ok(Some(text))`: the provider returned lyrics
/// - `Ok(None)`: the provider answered but has no lyrics for this song
/// - `Err(_)`: the request itself failed (transport, non-success status,
///   unparseable body)
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    async fn fetch(&self, artist: &str, song: &str) -> Result<Option<String>, ProviderError>;
}

/// Response body of `GET /v1/{artist}/{song}`. The `lyrics` field is absent
/// when the provider has no match.
#[derive(Debug, Deserialize)]
struct LyricsPayload {
    lyrics: Option<String>,
}

impl LyricsPayload {
    /// An empty lyrics string is treated the same as a missing field.
    fn into_lyrics(self) -> Option<String> {
        self.lyrics.filter(|text| !text.is_empty())
    }
}

/// Client for the lyrics.ovh API.
#[derive(Debug, Clone)]
pub struct LyricsOvhClient {
    client: reqwest::Client,
    base_url: String,
}

impl LyricsOvhClient {
    pub fn new(base_url: &str) -> Self {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("lyrfind v{}", version);

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request URL with artist and song as percent-encoded path segments.
    /// Encoding covers `/` as well, so names like "AC/DC" stay one segment.
    fn endpoint(&self, artist: &str, song: &str) -> String {
        format!(
            "{}/v1/{}/{}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(song)
        )
    }
}

#[async_trait]
impl LyricsProvider for LyricsOvhClient {
    async fn fetch(&self, artist: &str, song: &str) -> Result<Option<String>, ProviderError> {
        let url = self.endpoint(artist, song);
        debug!("Requesting lyrics: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status { status });
        }

        let payload: LyricsPayload =
            response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        Ok(payload.into_lyrics())
    }
}
