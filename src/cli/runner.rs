//! CLI runner
//!
//! Builds a controller from the parsed arguments, drives it for the
//! requested number of pages and prints the accumulated feed. The CLI stands
//! in for the scrollable screens of a reader app, so pages beyond the first
//! are requested as explicit fetches rather than scroll triggers.

use super::commands::{Cli, Commands};
use crate::cache::AccumulatedFeed;
use crate::client::NewsApiClient;
use crate::config::FeedConfig;
use crate::connectivity::AlwaysOnline;
use crate::controller::FeedController;
use crate::error::{Error, Result};
use crate::pagination::FeedPhase;
use crate::types::FeedQuery;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested command
    pub async fn run(self) -> Result<()> {
        let api_key = self
            .cli
            .api_key
            .clone()
            .or_else(|| std::env::var("NEWSAPI_KEY").ok())
            .ok_or_else(|| Error::config("missing API key: pass --api-key or set NEWSAPI_KEY"))?;

        let mut builder = FeedConfig::builder()
            .api_key(api_key)
            .page_size(self.cli.page_size)
            .request_timeout(Duration::from_secs(self.cli.timeout_secs));
        if let Some(base_url) = self.cli.base_url.clone() {
            builder = builder.base_url(base_url);
        }
        let config = builder.build()?;

        let (query, pages) = match &self.cli.command {
            Commands::Breaking { country, pages } => (FeedQuery::breaking(country.clone()), *pages),
            Commands::Search { query, pages } => (FeedQuery::search(query.clone()), *pages),
        };

        let client = Arc::new(NewsApiClient::new(config.clone())?);
        let mut controller =
            FeedController::new(query, client, Arc::new(AlwaysOnline), config);

        let mut fetched = 0;
        for _ in 0..pages {
            if !controller.fetch_next().await {
                let message = controller
                    .subscribe()
                    .borrow()
                    .error_message()
                    .unwrap_or("fetch suppressed")
                    .to_string();
                return Err(Error::Other(message));
            }
            fetched += 1;
            if controller.phase() == FeedPhase::LoadedLastPage {
                info!("reached last page after {fetched} fetches");
                break;
            }
        }

        let feed = controller
            .feed()
            .ok_or_else(|| Error::Other("no pages fetched".to_string()))?;

        if self.cli.json {
            println!("{}", serde_json::to_string_pretty(feed)?);
        } else {
            print_feed(feed, fetched);
        }

        Ok(())
    }
}

fn print_feed(feed: &AccumulatedFeed, pages: u32) {
    for (index, article) in feed.articles.iter().enumerate() {
        let title = article.title.as_deref().unwrap_or("(untitled)");
        let source = article
            .source
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or("unknown source");
        println!("{:>4}. {title} — {source}", index + 1);
        if let Some(url) = &article.url {
            println!("      {url}");
        }
    }
    println!(
        "\n{} of {} articles across {} page(s)",
        feed.len(),
        feed.total_results,
        pages
    );
}
