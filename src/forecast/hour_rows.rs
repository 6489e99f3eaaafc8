/// Hourly row extraction within a day block
use scraper::ElementRef;
use tracing::trace;

use super::day_blocks::DayBlock;
use super::markers::{all_matches, first_match, Markers, DIRECTION_PHRASE, TIDES_CLASS, WAVE_UNIT};
use crate::utils::clean_text;

/// One hourly forecast record, already formatted for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourRow {
    /// `"{day label}\n\n{time}\n\n{line index}"`
    pub day_hour: String,
    pub waves_size: String,
    pub wind_speed: String,
    pub wind_direction: String,
}

/// Extract hourly rows from one day block.
///
/// Lines are enumerated over every `div.line` in the block, so header, tides
/// and incomplete lines still consume an index even though they emit nothing.
pub fn extract_hour_rows(block: &DayBlock<'_>, markers: &Markers) -> Vec<HourRow> {
    let lines = all_matches(*block.content, &markers.line);
    let mut rows = Vec::with_capacity(lines.len());

    for (index, line) in lines.into_iter().enumerate() {
        if is_header_line(line, markers) {
            trace!("{}: line {} is a header or tides line", block.label, index);
            continue;
        }

        match parse_line(&block.label, index, line, markers) {
            Some(row) => rows.push(row),
            None => trace!("{}: line {} is missing a required cell", block.label, index),
        }
    }

    rows
}

fn is_header_line(line: ElementRef<'_>, markers: &Markers) -> bool {
    first_match(*line, &markers.header).is_some()
        || line.value().classes().any(|class| class == TIDES_CLASS)
}

fn parse_line(
    label: &str,
    index: usize,
    line: ElementRef<'_>,
    markers: &Markers,
) -> Option<HourRow> {
    let time_cell = first_match(*line, &markers.time_cell)?;
    let waves_cell = first_match(*line, &markers.waves_cell)?;
    let wind_cell = first_match(*line, &markers.wind_cell)?;

    let time = element_text(time_cell);

    Some(HourRow {
        day_hour: format!("{label}\n\n{time}\n\n{index}"),
        waves_size: format_waves(&element_text(waves_cell)),
        wind_speed: wind_speed(wind_cell, markers),
        wind_direction: wind_direction(wind_cell, markers),
    })
}

/// Cleaned concatenation of every text node below `element`
fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// "0.8 - 1.3 m" -> "0.8-1.3"
fn format_waves(cleaned: &str) -> String {
    cleaned.replace(WAVE_UNIT, "").replace(' ', "")
}

fn wind_speed(wind_cell: ElementRef<'_>, markers: &Markers) -> String {
    match first_match(*wind_cell, &markers.wind_speed) {
        Some(label) => format!("\n{}\n\n", element_text(label)),
        None => String::new(),
    }
}

fn wind_direction(wind_cell: ElementRef<'_>, markers: &Markers) -> String {
    let raw = first_match(*wind_cell, &markers.wind_direction_img)
        .and_then(|img| img.value().attr("alt"))
        .map(clean_text)
        .unwrap_or_default();

    format_direction(&raw)
}

/// Prefix the direction with the fixed phrase, dropping any copy of the
/// phrase already present in the alt text. Only the exact literal is removed.
fn format_direction(cleaned_alt: &str) -> String {
    let direction = cleaned_alt.replace(DIRECTION_PHRASE, "");
    format!("{DIRECTION_PHRASE} {}", direction.trim())
}
