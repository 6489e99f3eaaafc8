use reqwest::blocking::Client;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::fetch_error::FetchError;

/// Blocking HTTP client for the forecast page. One request per call, no retry.
#[derive(Clone)]
pub struct ForecastFetcher {
    client: Client,
}

impl ForecastFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the body text. Any non-2xx status is an error.
    #[instrument(skip(self))]
    pub fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        debug!("Sending HTTP request to forecast page");
        let response = self.client.get(url).send()?;
        let status = response.status();
        debug!("Received HTTP response with status: {}", status);

        if !status.is_success() {
            warn!("Forecast page returned {}", status);
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let html = response.text()?;
        debug!("Retrieved HTML content, size: {} bytes", html.len());

        Ok(html)
    }
}
