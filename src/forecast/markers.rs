/// Class markers and thresholds the forecast page is matched against
///
/// The page has no schema; these selectors are the whole contract with it.
use ego_tree::NodeRef;
use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Selector};

/// French day names recognised in day labels
pub const DAY_NAMES: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

/// Inclusive bounds on the cleaned length (in characters) of a day label
pub const MIN_LABEL_LEN: usize = 10;
pub const MAX_LABEL_LEN: usize = 40;

/// Upward hops allowed from a label's parent element while looking for its content container
pub const MAX_ANCESTOR_HOPS: usize = 7;

/// Fixed prefix of every wind direction value
pub const DIRECTION_PHRASE: &str = "Orientation vent";

/// Class on a line that carries tide data rather than an hourly forecast
pub const TIDES_CLASS: &str = "tides";

/// Unit letter stripped from wave heights
pub const WAVE_UNIT: &str = "m";

const CONTENT: &str = "div.content";
const LINE: &str = "div.line";
const HEADER: &str = ".entetes";
const TIME_CELL: &str = "div.cell.date";
const WAVES_CELL: &str = "div.cell.waves";
const WIND_CELL: &str = "div.cell.large-bis-bis.with-border";
const WIND_SPEED: &str = "div.wind span";
const WIND_DIRECTION_IMG: &str = "div.wind.img img";

/// Compiled selectors and the day-name pattern, built once per extraction
pub struct Markers {
    pub day_name: Regex,
    pub content: Selector,
    pub line: Selector,
    pub header: Selector,
    pub time_cell: Selector,
    pub waves_cell: Selector,
    pub wind_cell: Selector,
    pub wind_speed: Selector,
    pub wind_direction_img: Selector,
}

impl Markers {
    pub fn new() -> Self {
        // All patterns below are literals; failure here is a programming error.
        let day_name = Regex::new(&format!(r"(?i)\b({})\b", DAY_NAMES.join("|")))
            .expect("day name pattern is valid");

        Self {
            day_name,
            content: selector(CONTENT),
            line: selector(LINE),
            header: selector(HEADER),
            time_cell: selector(TIME_CELL),
            waves_cell: selector(WAVES_CELL),
            wind_cell: selector(WIND_CELL),
            wind_speed: selector(WIND_SPEED),
            wind_direction_img: selector(WIND_DIRECTION_IMG),
        }
    }

    /// True when a cleaned text looks like a day label: a whole-word day name
    /// and a length inside the label bounds.
    pub fn is_day_label(&self, cleaned: &str) -> bool {
        let len = crate::utils::char_len(cleaned);
        (MIN_LABEL_LEN..=MAX_LABEL_LEN).contains(&len) && self.day_name.is_match(cleaned)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new()
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// First element strictly below `node` (document order) matching `selector`
pub fn first_match<'a>(node: NodeRef<'a, Node>, selector: &Selector) -> Option<ElementRef<'a>> {
    node.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| selector.matches(element))
}

/// Every element strictly below `node` matching `selector`, in document order
pub fn all_matches<'a>(node: NodeRef<'a, Node>, selector: &Selector) -> Vec<ElementRef<'a>> {
    node.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|element| selector.matches(element))
        .collect()
}
