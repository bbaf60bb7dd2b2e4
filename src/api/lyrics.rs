use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};

use crate::core::LyricLookup;
use crate::error::LyrfindError;

/// Both parameters are optional at the HTTP layer so that missing ones get
/// the same JSON error shape as blank ones instead of actix's default
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct LyricsQuery {
    pub artist: Option<String>,
    pub song: Option<String>,
}

/// GET /api/lyrics?artist=Adele&song=Hello
pub async fn get_lyrics(
    query: web::Query<LyricsQuery>,
    lookup: web::Data<LyricLookup>,
) -> HttpResponse {
    let artist = query.artist.as_deref().unwrap_or("");
    let song = query.song.as_deref().unwrap_or("");

    match lookup.lookup(artist, song).await {
        Ok(Some(result)) => {
            info!(
                "Lyrics served for {} - {} ({})",
                artist.trim(),
                song.trim(),
                result.source.as_str()
            );
            HttpResponse::Ok().json(serde_json::json!({
                "lyrics": result.text
            }))
        }
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("No lyrics found for {} - {}", artist.trim(), song.trim())
        })),
        Err(LyrfindError::Validation(reason)) => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": reason
            }))
        }
        Err(e) => {
            error!("Lyrics lookup failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to fetch lyrics"
            }))
        }
    }
}
