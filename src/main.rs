use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use tunematch::{
    load_catalog, load_liked_tracks, write_report, OutputFormat, RecommendConfig, Recommender,
};

/// Recommend tracks similar to the ones you like
#[derive(Parser, Debug)]
#[command(name = "tunematch")]
#[command(about = "Content-based music recommender", long_about = None)]
struct Args {
    /// CSV of liked tracks (columns: Name, optional Artist)
    #[arg(short, long, default_value = "liked_songs.csv")]
    liked: PathBuf,

    /// CSV track catalog with audio features
    #[arg(short, long, default_value = "dataset.csv")]
    catalog: PathBuf,

    /// Number of recommendations
    #[arg(short = 'n', long, default_value_t = tunematch::DEFAULT_TOP_N)]
    top_n: usize,

    /// Score bonus for candidates sharing a liked track's genre
    #[arg(long, default_value_t = tunematch::DEFAULT_GENRE_BONUS)]
    genre_bonus: f64,

    /// Output format: table, csv or json
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Score liked tracks in parallel
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout carries only results
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting tunematch v{}", env!("CARGO_PKG_VERSION"));

    let config = RecommendConfig {
        top_n: args.top_n,
        genre_bonus: args.genre_bonus,
        parallel: args.parallel,
    };
    config.validate()?;

    let liked = load_liked_tracks(&args.liked)
        .with_context(|| format!("failed to load liked tracks from {}", args.liked.display()))?;
    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("failed to load catalog from {}", args.catalog.display()))?
        .normalize();

    for feature in catalog.stats().degenerate_features() {
        warn!(
            "Feature '{}' is constant across the catalog and will not affect similarity",
            feature
        );
    }

    let report = Recommender::new(config).recommend(&liked, &catalog)?;
    let stats = &report.stats;
    info!(
        "Resolved {}/{} liked tracks, scored against {} candidates",
        stats.resolved_count, stats.liked_count, stats.candidates_count
    );

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    write_report(&report, args.format, &mut writer)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        info!("Wrote {} recommendations to {}", stats.results_count, path.display());
    }

    if report.is_empty() {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}
