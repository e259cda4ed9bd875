//! Visibility classifier -- re-evaluates located occurrences against the
//! current viewport without walking the document again.

use serde::Serialize;
use tracing::debug;
use wordfinder_common::ViewportSnapshot;
use wordfinder_config::VisibilityConfig;

use crate::document::{DocumentHost, Resolution};
use crate::locator::{Occurrence, OccurrenceSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }

    fn from_bool(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

/// Per-occurrence visibility for one pass, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    statuses: Vec<Visibility>,
}

impl Classification {
    pub fn statuses(&self) -> &[Visibility] {
        &self.statuses
    }

    pub fn get(&self, index: usize) -> Option<Visibility> {
        self.statuses.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.statuses.iter().filter(|v| v.is_visible()).count()
    }

    pub fn hidden_count(&self) -> usize {
        self.len() - self.visible_count()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    buffer: f64,
}

impl Classifier {
    pub fn new(config: &VisibilityConfig) -> Self {
        Self {
            buffer: config.buffer_px,
        }
    }

    /// Classify every occurrence against one fresh viewport read.
    pub fn classify_set<D: DocumentHost + ?Sized>(
        &self,
        doc: &D,
        set: &OccurrenceSet,
    ) -> Classification {
        let viewport = doc.viewport();
        let statuses: Vec<Visibility> = set
            .iter()
            .map(|occurrence| self.classify(doc, occurrence, &viewport))
            .collect();
        let classification = Classification { statuses };
        debug!(
            scroll_y = viewport.scroll_y,
            visible = classification.visible_count(),
            hidden = classification.hidden_count(),
            "classified occurrences"
        );
        classification
    }

    /// Live geometry when the anchor resolves, frozen page position otherwise.
    pub fn classify<D: DocumentHost + ?Sized>(
        &self,
        doc: &D,
        occurrence: &Occurrence,
        viewport: &ViewportSnapshot,
    ) -> Visibility {
        let resolution = occurrence
            .anchor
            .map(|a| doc.range_rect(a.node, a.start, a.end))
            .unwrap_or(Resolution::Unresolvable);

        match resolution {
            Resolution::Resolved(rect) => {
                let buffered = viewport.client_rect().expand(self.buffer);
                Visibility::from_bool(buffered.contains_rect(&rect))
            }
            Resolution::Unresolvable => self.classify_by_page_top(occurrence, viewport),
        }
    }

    /// Vertical-band check on the frozen page top.
    pub fn classify_by_page_top(
        &self,
        occurrence: &Occurrence,
        viewport: &ViewportSnapshot,
    ) -> Visibility {
        let (low, high) = viewport.vertical_band(self.buffer);
        let top = occurrence.page.top as f64;
        Visibility::from_bool(top >= low && top <= high)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&VisibilityConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, TextBox};
    use crate::locator::{Locator, Query};
    use wordfinder_common::PageCoordinates;

    fn doc_with_lines(positions: &[f64]) -> MemoryDocument {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        for y in positions {
            doc.append_text_at(root, "a fox here", TextBox::at(0.0, *y));
        }
        doc
    }

    fn fox_set(doc: &MemoryDocument) -> OccurrenceSet {
        Locator::default().locate(doc, &Query::parse("fox").unwrap())
    }

    #[test]
    fn in_viewport_is_visible() {
        let doc = doc_with_lines(&[100.0]);
        let set = fox_set(&doc);
        let c = Classifier::default().classify_set(&doc, &set);
        assert_eq!(c.statuses(), &[Visibility::Visible]);
    }

    #[test]
    fn buffer_admits_near_edge_content() {
        // Bottom of the line box at 600 + 40 = 640 <= 650.
        let doc = doc_with_lines(&[624.0, 640.0]);
        let set = fox_set(&doc);
        let c = Classifier::default().classify_set(&doc, &set);
        assert_eq!(c.statuses(), &[Visibility::Visible, Visibility::Hidden]);
    }

    #[test]
    fn partial_overlap_is_hidden() {
        // Top at -60 sticks out above the buffered viewport.
        let mut doc = doc_with_lines(&[340.0]);
        doc.scroll_to(0.0, 400.0);
        let set = fox_set(&doc);
        let c = Classifier::default().classify_set(&doc, &set);
        assert_eq!(c.get(0), Some(Visibility::Hidden));
    }

    #[test]
    fn horizontal_overflow_is_hidden() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        doc.append_text_at(root, "fox", TextBox::at(830.0, 10.0));
        let set = fox_set(&doc);
        // Right edge 854 > 850.
        assert_eq!(
            Classifier::default().classify_set(&doc, &set).get(0),
            Some(Visibility::Hidden)
        );
    }

    #[test]
    fn scrolling_changes_visibility_without_relocating() {
        let mut doc = doc_with_lines(&[2000.0]);
        let set = fox_set(&doc);
        let classifier = Classifier::default();

        assert_eq!(classifier.classify_set(&doc, &set).visible_count(), 0);
        doc.scroll_to(0.0, 1800.0);
        assert_eq!(classifier.classify_set(&doc, &set).visible_count(), 1);
    }

    #[test]
    fn classification_is_idempotent() {
        let doc = doc_with_lines(&[0.0, 300.0, 900.0, 5000.0]);
        let set = fox_set(&doc);
        let classifier = Classifier::default();
        assert_eq!(
            classifier.classify_set(&doc, &set),
            classifier.classify_set(&doc, &set)
        );
    }

    #[test]
    fn detached_anchor_uses_page_band() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let p = doc.append_element(root, "p", &[]);
        doc.append_text_at(p, "fox", TextBox::at(0.0, 1000.0));
        let set = fox_set(&doc);
        doc.detach(p);
        let classifier = Classifier::default();

        // Band is [scroll_y - 50, scroll_y + 650].
        doc.scroll_to(0.0, 350.0);
        assert_eq!(classifier.classify_set(&doc, &set).get(0), Some(Visibility::Visible));
        doc.scroll_to(0.0, 349.0);
        assert_eq!(classifier.classify_set(&doc, &set).get(0), Some(Visibility::Hidden));
        doc.scroll_to(0.0, 1050.0);
        assert_eq!(classifier.classify_set(&doc, &set).get(0), Some(Visibility::Visible));
        doc.scroll_to(0.0, 1051.0);
        assert_eq!(classifier.classify_set(&doc, &set).get(0), Some(Visibility::Hidden));
    }

    #[test]
    fn anchorless_records_use_page_band() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let occurrences = vec![
            Occurrence::detached("fox", "a fox", PageCoordinates { left: 0, top: -50 }),
            Occurrence::detached("fox", "a fox", PageCoordinates { left: 0, top: -51 }),
            Occurrence::detached("fox", "a fox", PageCoordinates { left: 0, top: 650 }),
            Occurrence::detached("fox", "a fox", PageCoordinates { left: 0, top: 651 }),
        ];
        let set = OccurrenceSet::new(Query::parse("fox").unwrap(), occurrences);

        let c = Classifier::default().classify_set(&doc, &set);
        assert_eq!(
            c.statuses(),
            &[
                Visibility::Visible,
                Visibility::Hidden,
                Visibility::Visible,
                Visibility::Hidden
            ]
        );
        assert_eq!(c.visible_count(), 2);
        assert_eq!(c.hidden_count(), 2);
    }

    #[test]
    fn custom_buffer() {
        let doc = doc_with_lines(&[610.0]);
        let set = fox_set(&doc);
        let tight = Classifier::new(&VisibilityConfig { buffer_px: 0.0 });
        assert_eq!(tight.classify_set(&doc, &set).get(0), Some(Visibility::Hidden));
        assert_eq!(
            Classifier::default().classify_set(&doc, &set).get(0),
            Some(Visibility::Visible)
        );
    }
}
