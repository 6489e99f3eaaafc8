/// Shared text helpers for the surf forecast scraper
///
/// Collapse every whitespace run (spaces, tabs, newlines, non-breaking spaces)
/// into a single space and trim both ends.
///
/// Every text value read from the page goes through this function before it
/// is matched or emitted.
///
/// # Examples
///
/// ```
/// use surf_forecast_scraper::utils::clean_text;
///
/// assert_eq!(clean_text("  Lundi\n   14 \t octobre "), "Lundi 14 octobre");
/// assert_eq!(clean_text("\n\n"), "");
/// ```
pub fn clean_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of characters (not bytes) in a string.
///
/// Day labels carry accented characters ("Févr."), so length bounds are
/// measured in characters.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
