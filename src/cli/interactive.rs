use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::core::{
    CacheStats, LyricLookup, LyricsOvhClient, LyricsProvider, LyricsSource, Query, RecentSearches,
    RECENT_SEARCH_LIMIT,
};
use crate::error::{LyrfindError, Result};

pub async fn execute(config: &Config) -> Result<()> {
    let provider: Arc<dyn LyricsProvider> = Arc::new(LyricsOvhClient::new(&config.provider_url));
    let lookup = LyricLookup::new(provider);
    let mut recent = RecentSearches::new();

    println!("🎵 lyrfind interactive session");
    println!("Type an artist and song title to look up lyrics.");
    println!(
        "Commands: /recent to list the last {} searches, /N to repeat entry N,",
        RECENT_SEARCH_LIMIT
    );
    println!("          /stats for cache statistics, /quit to exit.");
    println!();

    loop {
        let artist = match prompt("Artist: ")? {
            Some(line) => line,
            None => break,
        };

        if let Some(command) = artist.trim().strip_prefix('/') {
            if handle_command(command, &lookup, &mut recent).await {
                break;
            }
            continue;
        }

        let song = match prompt("Song:   ")? {
            Some(line) => line,
            None => break,
        };

        run_search(&lookup, &mut recent, &artist, &song).await;
    }

    let stats = lookup.cache_stats().await;
    info!(
        "Session ended: {} lookups, {} cache hits",
        stats.total_requests, stats.cache_hits
    );
    println!("👋 Goodbye!");

    Ok(())
}

/// Read one line, with the label as prompt. `None` means end of input.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut line)?;
    if bytes_read == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(
        line.trim_end_matches('\n').trim_end_matches('\r').to_string(),
    ))
}

/// Returns true when the session should end.
async fn handle_command(command: &str, lookup: &LyricLookup, recent: &mut RecentSearches) -> bool {
    match command {
        "quit" | "q" | "exit" => return true,
        "recent" => show_recent(recent),
        "stats" => show_stats(&lookup.cache_stats().await),
        other => {
            if let Ok(index) = other.parse::<usize>() {
                repeat_recent(index, lookup, recent).await;
            } else {
                println!("⚠️  Unknown command: /{}", other);
            }
        }
    }

    false
}

/// Re-run a numbered entry from the history. The repeat is recorded as a
/// fresh search of its own.
async fn repeat_recent(index: usize, lookup: &LyricLookup, recent: &mut RecentSearches) {
    let query = if index >= 1 {
        recent.get(index - 1).cloned()
    } else {
        None
    };

    match query {
        Some(query) => {
            println!("🔁 {}", query);
            run_search(lookup, recent, &query.artist, &query.song).await;
        }
        None => println!("⚠️  No recent entry #{}", index),
    }
}

async fn run_search(lookup: &LyricLookup, recent: &mut RecentSearches, artist: &str, song: &str) {
    // Record every attempt, even ones that fail validation or fetching.
    recent.record(Query::new(artist, song));

    match lookup.lookup(artist, song).await {
        Ok(Some(result)) => {
            if result.source == LyricsSource::Cache {
                println!("✅ Found (cached)");
            } else {
                println!("✅ Found");
            }
            println!();
            println!("{}", result.text);
            println!();
        }
        Ok(None) => {
            println!(
                "❌ No lyrics found for {} - {}",
                artist.trim(),
                song.trim()
            );
        }
        Err(LyrfindError::Validation(reason)) => {
            println!("⚠️  {}", reason);
        }
        Err(e) => {
            println!("❌ Lookup failed: {}", e);
        }
    }
}

fn show_recent(recent: &RecentSearches) {
    if recent.is_empty() {
        println!("No recent searches yet.");
        return;
    }

    println!("🕘 Recent searches:");
    for (i, query) in recent.iter().enumerate() {
        println!("  {}. {}", i + 1, query);
    }
}

fn show_stats(stats: &CacheStats) {
    println!(
        "📊 Cache: {} entries, {} requests, {} hits ({:.1}% hit rate)",
        stats.total_entries, stats.total_requests, stats.cache_hits, stats.hit_rate_percent
    );
}
