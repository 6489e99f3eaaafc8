// Tests for ForecastFetcher
// Uses mockito for HTTP mocking

use mockito::Server;
use surf_forecast_scraper::config::Config;
use surf_forecast_scraper::fetch_error::FetchError;
use surf_forecast_scraper::fetcher::ForecastFetcher;

const PAGE_PATH: &str = "/meteo-surf/lacanau-s1043.html";

fn create_test_fetcher() -> ForecastFetcher {
    ForecastFetcher::new(&Config::default()).expect("Failed to create HTTP client")
}

#[test]
fn test_fetch_page_success() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", PAGE_PATH)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body("<html><body>Météo</body></html>")
        .create();

    let fetcher = create_test_fetcher();
    let result = fetcher.fetch_page(&format!("{}{}", server.url(), PAGE_PATH));

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "<html><body>Météo</body></html>");

    mock.assert();
}

#[test]
fn test_fetch_page_sends_browser_user_agent() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", PAGE_PATH)
        .match_header("user-agent", "Mozilla/5.0")
        .with_status(200)
        .with_body("ok")
        .create();

    let fetcher = create_test_fetcher();
    let result = fetcher.fetch_page(&format!("{}{}", server.url(), PAGE_PATH));

    assert!(result.is_ok());
    mock.assert();
}

#[test]
fn test_fetch_page_custom_user_agent() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", PAGE_PATH)
        .match_header("user-agent", "surf-bot/2.0")
        .with_status(200)
        .with_body("ok")
        .create();

    let config = Config {
        user_agent: "surf-bot/2.0".to_string(),
        ..Config::default()
    };
    let fetcher = ForecastFetcher::new(&config).unwrap();
    let result = fetcher.fetch_page(&format!("{}{}", server.url(), PAGE_PATH));

    assert!(result.is_ok());
    mock.assert();
}

#[test]
fn test_fetch_page_404() {
    let mut server = Server::new();

    let mock = server.mock("GET", PAGE_PATH).with_status(404).create();

    let fetcher = create_test_fetcher();
    let url = format!("{}{}", server.url(), PAGE_PATH);
    let result = fetcher.fetch_page(&url);

    match result {
        Err(FetchError::Status { status, url: failed_url }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(failed_url, url);
        }
        other => panic!("Expected Status error, got: {other:?}"),
    }

    mock.assert();
}

#[test]
fn test_fetch_page_server_error_is_not_retried() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", PAGE_PATH)
        .with_status(503)
        .expect(1)
        .create();

    let fetcher = create_test_fetcher();
    let result = fetcher.fetch_page(&format!("{}{}", server.url(), PAGE_PATH));

    assert!(matches!(result, Err(FetchError::Status { .. })));
    mock.assert();
}

#[test]
fn test_fetch_page_connection_refused() {
    let fetcher = create_test_fetcher();
    let result = fetcher.fetch_page("http://127.0.0.1:1/meteo");

    assert!(matches!(result, Err(FetchError::Request(_))));
}
