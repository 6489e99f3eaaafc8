use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, instrument};

use crate::config::Config;
use crate::csv_writer::{self, WriteError};
use crate::fetch_error::FetchError;
use crate::fetcher::ForecastFetcher;
use crate::forecast;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub output_path: PathBuf,
    pub row_count: usize,
}

impl fmt::Display for ScrapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extraction completed. File '{}' generated with {} rows.",
            self.output_path.display(),
            self.row_count
        )
    }
}

/// Fetch → extract → write, once
pub struct ScrapeService {
    fetcher: ForecastFetcher,
}

impl ScrapeService {
    pub fn new(fetcher: ForecastFetcher) -> Self {
        Self { fetcher }
    }

    /// A fetch failure aborts before the output file is touched.
    #[instrument(skip(self))]
    pub fn run(&self, url: &str, output_path: &Path) -> Result<ScrapeSummary, ScrapeError> {
        let html = self.fetcher.fetch_page(url)?;

        let rows = forecast::extract_forecast(&html);
        info!("Extracted {} hourly rows", rows.len());

        let row_count = csv_writer::write_rows_to_path(output_path, &rows)?;

        Ok(ScrapeSummary {
            output_path: output_path.to_path_buf(),
            row_count,
        })
    }
}

/// Scrape `url` into a CSV file at `output_path` using `config` for the HTTP client.
pub fn extract_and_save(
    url: &str,
    output_path: &Path,
    config: &Config,
) -> Result<ScrapeSummary, ScrapeError> {
    let fetcher = ForecastFetcher::new(config)?;
    ScrapeService::new(fetcher).run(url, output_path)
}
