//! HTTP API handlers for the serve command
//!
//! - `health`: service health endpoint
//! - `lyrics`: lyric lookup endpoint backed by a shared lookup service

pub mod health;
pub mod lyrics;

use actix_web::web;

/// Route table shared by the server and handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/api/lyrics", web::get().to(lyrics::get_lyrics));
}
