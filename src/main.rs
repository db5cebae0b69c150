use clap::Parser;
use eyre::{Result, WrapErr};
use finbrief::cli::commands::{Cli, Commands};
use finbrief::config::Settings;
use finbrief::{http, telemetry, FinBrief};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env().wrap_err("Invalid configuration")?;
    telemetry::init_tracing(settings.production);

    let fb = FinBrief::new(&settings).wrap_err("Failed to initialize retrieval service")?;

    match cli.command {
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| settings.bind.clone());
            http::serve(Arc::new(fb), &addr)
                .await
                .wrap_err_with(|| format!("Server failed on {addr}"))?;
        }
        Commands::Scrape => {
            let articles = fb.scrape_market_news().await?;
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
    }
    Ok(())
}
