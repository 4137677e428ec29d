use anyhow::{Context, Result};
use clap::Parser;
use data_loader::Dataset;
use pipeline::DEFAULT_TOP_N;
use session::{RecommendationSession, StdinInput};
use std::path::PathBuf;
use std::time::Instant;

/// ReelPicks - pick a movie for tonight
#[derive(Parser)]
#[command(name = "reel-picks")]
#[command(about = "Interactive movie picker over the IMDB top-movies table", long_about = None)]
struct Cli {
    /// Path to the movies CSV file
    #[arg(short, long, default_value = "data/imdb_top_1000.csv")]
    data: PathBuf,

    /// Number of picks to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
}

fn main() -> Result<()> {
    // Initialize tracing; stays quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load the dataset before asking anything; without it there is no session
    let start = Instant::now();
    let dataset = Dataset::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load movie dataset from {}", cli.data.display()))?;
    tracing::info!("Loaded dataset in {:?}", start.elapsed());

    let session = RecommendationSession::new(&dataset, cli.top);
    let mut input = StdinInput::new();
    let mut stdout = std::io::stdout();
    session.run(&mut input, &mut stdout)?;

    Ok(())
}
