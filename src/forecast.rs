// Surf forecast extraction
//
// Turns a forecast page into flat hourly records:
// - day_blocks: finds day labels and the content container for each day
// - hour_rows: turns each line of a content container into an HourRow
// - markers: class selectors and thresholds the page is matched against

pub mod day_blocks;
pub mod hour_rows;
pub mod markers;

pub use day_blocks::{find_day_blocks, DayBlock};
pub use hour_rows::{extract_hour_rows, HourRow};
pub use markers::Markers;

use scraper::Html;
use tracing::{debug, instrument};

/// Extract every hourly row from a forecast page.
///
/// Rows come out grouped by day block in document order. A page without any
/// recognisable day block yields an empty vector; structural mismatches are
/// never errors.
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn extract_forecast(html: &str) -> Vec<HourRow> {
    debug!("Parsing HTML document");
    let document = Html::parse_document(html);
    let markers = Markers::new();

    let blocks = find_day_blocks(&document, &markers);
    debug!("Found {} day blocks", blocks.len());

    let rows: Vec<HourRow> = blocks
        .iter()
        .flat_map(|block| {
            let rows = extract_hour_rows(block, &markers);
            debug!("Day block '{}' produced {} rows", block.label, rows.len());
            rows
        })
        .collect();

    debug!("Extracted {} hourly rows", rows.len());
    rows
}
