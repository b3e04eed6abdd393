//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Newsfeed engine CLI
#[derive(Parser, Debug)]
#[command(name = "newsfeed-engine")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// NewsAPI key (falls back to the NEWSAPI_KEY environment variable)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Articles per page
    #[arg(long, global = true, default_value = "20")]
    pub page_size: u32,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value = "15")]
    pub timeout_secs: u64,

    /// Emit the accumulated feed as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch breaking news headlines
    Breaking {
        /// Two-letter country code
        #[arg(short, long, default_value = "us")]
        country: String,

        /// Number of pages to fetch
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },

    /// Search articles by query
    Search {
        /// Query string
        query: String,

        /// Number of pages to fetch
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },
}
