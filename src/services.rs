pub mod scrape_service;

pub use scrape_service::{extract_and_save, ScrapeError, ScrapeService, ScrapeSummary};
