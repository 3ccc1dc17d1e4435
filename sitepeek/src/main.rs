use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use sitepeek::{utils, Analyzer, ArchiveBuilder, ArchiveLimits, FetchConfig, HttpFetcher};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the page to analyze
    #[arg(short, long)]
    url: String,

    /// Where to write the analysis JSON
    #[arg(short, long, default_value = "result.json")]
    output: PathBuf,

    /// Also download the page and its assets into this zip file
    #[arg(short, long)]
    archive: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,

    /// Number of concurrent asset downloads when archiving
    #[arg(short, long, default_value_t = 5)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let fetcher = HttpFetcher::new(&FetchConfig {
        timeout: Duration::from_secs(args.timeout),
        ..FetchConfig::default()
    })?;
    let analyzer = Analyzer::new(Arc::new(fetcher));

    let result = analyzer
        .analyze(&args.url)
        .await
        .with_context(|| format!("analysis of {} failed", args.url))?;
    utils::save_json(&result, &args.output)?;

    println!(
        "{}: {} css, {} js, {} images, {} other files, {} colors, {} fonts",
        args.url,
        result.summary.total_css,
        result.summary.total_js,
        result.summary.total_images,
        result.summary.total_others,
        result.colors.len(),
        result.fonts.len()
    );

    if let Some(path) = args.archive {
        let limits = ArchiveLimits {
            concurrency: args.concurrency,
            ..ArchiveLimits::default()
        };
        let report = ArchiveBuilder::new(analyzer, limits)
            .build_archive(&args.url)
            .await
            .context("building archive failed")?;
        utils::save_bytes(&report.bytes, &path)?;
        println!(
            "{}: {} entries, {} assets skipped",
            path.display(),
            report.written.len(),
            report.omitted.len()
        );
    }

    Ok(())
}
