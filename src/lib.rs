pub mod config;
pub mod csv_writer;
pub mod fetch_error;
pub mod fetcher;
pub mod forecast;
pub mod services;
pub mod utils;

pub use services::{extract_and_save, ScrapeError, ScrapeSummary};
