//! Locator engine: document walk, literal matching, and per-match
//! bookkeeping.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};
use wordfinder_common::{PageCoordinates, ViewportSnapshot};
use wordfinder_config::SearchConfig;

use crate::document::{DocumentHost, NodeId, Resolution};
use crate::filter::ExclusionFilter;

use super::context::context_window;
use super::types::{Occurrence, OccurrenceSet, Query, TextAnchor};

/// Finds every occurrence of a query in a document's visible text.
#[derive(Debug, Clone)]
pub struct Locator {
    filter: ExclusionFilter,
    context_radius: usize,
}

impl Locator {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            filter: ExclusionFilter::new(config),
            context_radius: config.context_radius,
        }
    }

    /// Walk the document in order and collect all matches of `query`.
    pub fn locate<D: DocumentHost + ?Sized>(&self, doc: &D, query: &Query) -> OccurrenceSet {
        let matcher = match literal_matcher(query) {
            Ok(re) => re,
            Err(e) => {
                // Only reachable for queries past the regex size limit.
                warn!("query rejected by matcher: {e}");
                return OccurrenceSet::new(query.clone(), Vec::new());
            }
        };
        let viewport = doc.viewport();
        let mut occurrences = Vec::new();
        let mut scanned = 0usize;

        for node in doc.text_nodes() {
            if self.filter.is_excluded(doc, node) {
                continue;
            }
            let Some(text) = doc.text(node) else {
                continue;
            };
            scanned += 1;
            self.find_in_node(doc, node, text, &matcher, &viewport, &mut occurrences);
        }

        debug!(
            query = query.as_str(),
            nodes = scanned,
            matches = occurrences.len(),
            "document walk complete"
        );
        OccurrenceSet::new(query.clone(), occurrences)
    }

    fn find_in_node<D: DocumentHost + ?Sized>(
        &self,
        doc: &D,
        node: NodeId,
        text: &str,
        matcher: &Regex,
        viewport: &ViewportSnapshot,
        out: &mut Vec<Occurrence>,
    ) {
        // find_iter resumes after each match, so matches never overlap.
        for mat in matcher.find_iter(text) {
            if mat.is_empty() {
                continue;
            }
            let anchor = TextAnchor {
                node,
                start: mat.start(),
                end: mat.end(),
            };
            let page = match doc.range_rect(node, anchor.start, anchor.end) {
                Resolution::Resolved(rect) => {
                    PageCoordinates::from_viewport_rect(&rect, viewport.scroll_x, viewport.scroll_y)
                }
                Resolution::Unresolvable => {
                    warn!(?node, start = anchor.start, "match has no geometry, using origin");
                    PageCoordinates::default()
                }
            };
            out.push(Occurrence {
                matched_text: mat.as_str().to_string(),
                anchor: Some(anchor),
                context: context_window(text, anchor.start, anchor.end, self.context_radius),
                page,
            });
        }
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

/// Case-insensitive matcher for the query taken literally.
fn literal_matcher(query: &Query) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(query.as_str()))
        .case_insensitive(true)
        .build()
}
