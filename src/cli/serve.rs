use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Args;
use std::sync::Arc;
use tracing::info;

use crate::api;
use crate::config::Config;
use crate::core::{LyricLookup, LyricsOvhClient, LyricsProvider};
use crate::error::Result;

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

pub async fn execute(args: ServeArgs, config: &Config) -> Result<()> {
    let host = args.host.unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);

    let provider: Arc<dyn LyricsProvider> = Arc::new(LyricsOvhClient::new(&config.provider_url));
    // One lookup service for the whole server. Its cache is process-local
    // and dies with the process.
    let lookup = web::Data::new(LyricLookup::new(provider));

    info!("🌐 Serving lyric lookups on http://{}:{}", host, port);
    info!("   GET /api/lyrics?artist=...&song=...");
    info!("   GET /health");

    HttpServer::new(move || {
        App::new()
            .app_data(lookup.clone())
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
