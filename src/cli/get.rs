use clap::Args;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::core::{LyricLookup, LyricsOvhClient, LyricsProvider, LyricsResult};
use crate::error::Result;

#[derive(Args)]
pub struct GetArgs {
    /// Artist name
    #[arg(value_name = "ARTIST")]
    artist: String,

    /// Song title
    #[arg(value_name = "SONG")]
    song: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,
}

pub async fn execute(args: GetArgs, config: &Config) -> Result<()> {
    let provider: Arc<dyn LyricsProvider> = Arc::new(LyricsOvhClient::new(&config.provider_url));
    let lookup = LyricLookup::new(provider);

    info!("🔍 Looking up lyrics for: {} - {}", args.artist, args.song);

    let result = lookup.lookup(&args.artist, &args.song).await?;

    match args.format.as_str() {
        "json" => output_json(&args, result.as_ref())?,
        _ => output_text(&args, result.as_ref()),
    }

    Ok(())
}

fn output_text(args: &GetArgs, result: Option<&LyricsResult>) {
    match result {
        Some(found) => {
            println!("🎤 {} - {}", args.artist.trim(), args.song.trim());
            println!();
            println!("{}", found.text);
        }
        None => {
            println!(
                "❌ No lyrics found for {} - {}",
                args.artist.trim(),
                args.song.trim()
            );
        }
    }
}

fn output_json(args: &GetArgs, result: Option<&LyricsResult>) -> Result<()> {
    let payload = serde_json::json!({
        "artist": args.artist.trim(),
        "song": args.song.trim(),
        "lyrics": result.map(|r| r.text.as_str()),
        "source": result.map(|r| r.source.as_str()),
    });

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
