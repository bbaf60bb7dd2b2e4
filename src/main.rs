use clap::{Parser, Subcommand};

mod api;
mod cli;
mod config;
mod core;
mod error;
mod utils;

use config::Config;
use error::Result;

#[derive(Parser)]
#[command(name = "lyrfind")]
#[command(about = "Look up song lyrics, with in-memory caching of results")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up lyrics for an artist and song
    Get(cli::get::GetArgs),

    /// Run an interactive lookup session
    Interactive,

    /// Serve lyric lookups over HTTP
    Serve(cli::serve::ServeArgs),

    /// Show configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    utils::logging::init_logging(cli.verbose)
        .map_err(|e| error::LyrfindError::Internal(e))?;

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Get(args) => cli::get::execute(args, &config).await,
        Commands::Interactive => cli::interactive::execute(&config).await,
        Commands::Serve(args) => cli::serve::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args, &config).await,
    }
}
