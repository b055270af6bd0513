//! pubmerge - Entry Point
//!
//! Fetches publications from the configured sources, reconciles them, and
//! writes the canonical JSON list. Exit status 2 means every source came
//! back empty and the previous output file was left untouched.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmerge::config::Config;
use pubmerge::error::ReconcileError;
use pubmerge::sources::{self, InspireSource, SemanticScholarSource, SourceAdapter};
use pubmerge::{engine, formatters};

#[derive(Parser, Debug)]
#[command(name = "pubmerge")]
#[command(about = "Reconcile an author's publication list from INSPIRE-HEP and Semantic Scholar")]
#[command(version)]
struct Cli {
    /// INSPIRE-HEP author identifier (numeric id or BAI such as "J.Doe.1")
    #[arg(long, env = "INSPIRE_AUTHOR_ID")]
    inspire_author: Option<String>,

    /// Semantic Scholar author id
    #[arg(long, env = "S2_AUTHOR_ID")]
    s2_author: Option<String>,

    /// Semantic Scholar API key (optional, raises rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Output JSON path
    #[arg(long, default_value = "data/publications.json")]
    out: PathBuf,

    /// Skip the INSPIRE-HEP source
    #[arg(long)]
    no_inspire: bool,

    /// Skip the Semantic Scholar source
    #[arg(long)]
    no_s2: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout stays clean for shell pipelines.
    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) if error.downcast_ref::<ReconcileError>().is_some() => {
            tracing::error!("no publications fetched from any source; keeping existing output");
            ExitCode::from(2)
        }
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::new(cli.api_key.clone());

    // Priority order: INSPIRE first, so its records anchor merges on ties.
    let mut adapters: Vec<Box<dyn SourceAdapter>> = Vec::new();
    if !cli.no_inspire {
        if let Some(author) = &cli.inspire_author {
            adapters.push(Box::new(InspireSource::new(&config, author)?));
        }
    }
    if !cli.no_s2 {
        if let Some(author) = &cli.s2_author {
            adapters.push(Box::new(SemanticScholarSource::new(&config, author)?));
        }
    }
    anyhow::ensure!(
        !adapters.is_empty(),
        "no sources configured; pass --inspire-author and/or --s2-author"
    );

    let candidates = sources::collect_candidates(&adapters).await;
    let records = engine::reconcile(candidates)?;

    formatters::write_records(&cli.out, &records)?;
    tracing::info!(
        count = records.len(),
        path = %cli.out.display(),
        "wrote reconciled publication list"
    );

    Ok(())
}
