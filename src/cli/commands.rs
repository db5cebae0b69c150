use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "finbrief", about = "News retrieval service for the finance assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service (/index_articles, /query, /scrape_market_news)
    Serve {
        /// Listen address, overrides FINBRIEF_BIND
        #[arg(long)]
        bind: Option<String>,
    },
    /// Fetch one batch from NewsData and print it
    Scrape,
}
