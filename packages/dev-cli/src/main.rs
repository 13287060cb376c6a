//! Developer CLI for running one candidate discovery end-to-end.
//!
//! Loads `PEOPLESEARCH_HOST` and `PEOPLESEARCH_API_KEY` from the
//! environment (or a `.env` file), runs a search, optionally ranks the
//! results against a narrative file, and prints the candidates as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use peoplesearch_client::PeopleSearchClient;
use sourcing::{rank, Discovery, SearchRequest, DEFAULT_RESULT_LIMIT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "discover", about = "Run one candidate discovery search")]
struct Args {
    /// Free-text search keywords
    keywords: String,

    /// Title keyword filter (repeatable)
    #[arg(long = "title")]
    titles: Vec<String>,

    /// Current employer filter (repeatable)
    #[arg(long = "employer")]
    employers: Vec<String>,

    /// Past employer filter (repeatable)
    #[arg(long = "past-employer")]
    past_employers: Vec<String>,

    /// Geographic region code filter (repeatable)
    #[arg(long = "region")]
    regions: Vec<String>,

    /// Maximum number of candidates to request
    #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
    limit: u32,

    /// Narrative text file; mentioned candidates are ranked first
    #[arg(long)]
    narrative: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let client = PeopleSearchClient::from_env()
        .context("people-search credentials missing; set PEOPLESEARCH_HOST and PEOPLESEARCH_API_KEY")?;
    let discovery = Discovery::new(client);

    let request = SearchRequest::new(args.keywords)
        .with_title_keywords(args.titles)
        .with_current_employers(args.employers)
        .with_past_employers(args.past_employers)
        .with_regions(args.regions)
        .with_limit(args.limit);

    let candidates = discovery
        .discover(&request)
        .await
        .context("candidate discovery failed")?;

    let candidates = match &args.narrative {
        Some(path) => {
            let narrative = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read narrative file {}", path.display()))?;
            rank(candidates, Some(&narrative))
        }
        None => candidates,
    };

    println!("{}", serde_json::to_string_pretty(&candidates)?);
    eprintln!("{} candidates", candidates.len());

    Ok(())
}
