use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use surf_forecast_scraper::config::Config;
use surf_forecast_scraper::extract_and_save;

#[derive(Parser)]
#[command(name = "surf-scrap")]
#[command(about = "Extract hourly surf forecasts from a forecast page into a CSV file", long_about = None)]
struct Cli {
    /// Forecast page URL
    url: String,

    /// Destination CSV file
    output_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before the filter so RUST_LOG can come from it
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,surf_forecast_scraper=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    info!("Scraping {} with config: {:?}", cli.url, config);

    let summary = extract_and_save(&cli.url, &cli.output_file, &config).inspect_err(|e| {
        error!("Scrape failed: {}", e);
    })?;

    println!("{summary}");
    Ok(())
}
