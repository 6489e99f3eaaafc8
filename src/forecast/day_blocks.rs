/// Day block discovery
///
/// A day block pairs a day label ("Lundi 14 octobre") with the `div.content`
/// container holding that day's hourly lines. Labels are located by scanning
/// every text node; containers by walking up from the label.
use std::collections::HashSet;

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

use super::markers::{first_match, Markers, MAX_ANCESTOR_HOPS};
use crate::utils::clean_text;

#[derive(Debug, Clone)]
pub struct DayBlock<'a> {
    pub label: String,
    pub content: ElementRef<'a>,
}

/// Find every day block in document order.
///
/// The first occurrence of a label text wins. A label is recorded as seen
/// before its container is searched, so a label whose container cannot be
/// found still suppresses identical labels further down the page.
pub fn find_day_blocks<'a>(document: &'a Html, markers: &Markers) -> Vec<DayBlock<'a>> {
    let mut blocks = Vec::new();
    let mut seen = HashSet::new();
    let mut unrecognized = 0;

    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let label = clean_text(text);
        if !markers.is_day_label(&label) {
            continue;
        }
        if !seen.insert(label.clone()) {
            trace!("Skipping duplicate day label '{}'", label);
            continue;
        }

        match find_content_container(node, markers) {
            Some(content) => {
                debug!("Found day block '{}'", label);
                blocks.push(DayBlock { label, content });
            }
            None => {
                debug!(
                    "No content container within {} levels of day label '{}'",
                    MAX_ANCESTOR_HOPS, label
                );
                unrecognized += 1;
            }
        }
    }

    if unrecognized > 0 {
        debug!("Discarded {} day labels without a content container", unrecognized);
    }

    blocks
}

/// Walk up from the label's parent element looking for an ancestor that
/// contains a content container, then return that ancestor's first one.
///
/// The parent itself is checked, then at most `MAX_ANCESTOR_HOPS` ancestors
/// above it. The walk ends early when it runs off the top of the tree.
fn find_content_container<'a>(
    text_node: NodeRef<'a, Node>,
    markers: &Markers,
) -> Option<ElementRef<'a>> {
    let mut container = text_node.parent();

    for _ in 0..MAX_ANCESTOR_HOPS {
        match container {
            Some(candidate) if first_match(candidate, &markers.content).is_some() => break,
            Some(candidate) => container = candidate.parent(),
            None => break,
        }
    }

    container.and_then(|ancestor| first_match(ancestor, &markers.content))
}
