use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use github_topic_tracker::{
    GITHUB_SEARCH_ENDPOINT, RepositoryTracker, RestSearcher, SearchQuery, SequentialTracker,
    StdResult, TextReporter,
};

/// Command line arguments for the GitHub topic tracker
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Repository search endpoint queried with the topic keywords
    #[arg(short, long, env = "GITHUB_SEARCH_ENDPOINT", default_value = GITHUB_SEARCH_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let query = read_search_query().await?;
    debug!("Search query: {query}");

    let tracker = build_sequential_tracker(&args)?;
    tracker.track(&query).await?;
    info!("Tracking completed");

    Ok(())
}

async fn read_search_query() -> StdResult<SearchQuery> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"Please enter the keywords for searching repositories:\n")
        .await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .with_context(|| "Failed to read the keywords from the standard input")?;

    Ok(SearchQuery::from_line(&line))
}

fn build_sequential_tracker(args: &Args) -> StdResult<Arc<dyn RepositoryTracker>> {
    let searcher = Arc::new(RestSearcher::try_new(&args.endpoint)?);
    let reporter = Arc::new(TextReporter::new());

    Ok(Arc::new(SequentialTracker::new(searcher, reporter)))
}
