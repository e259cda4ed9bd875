//! `WordFinder`: owns the current occurrence set and the scroll debounce.

use std::time::Instant;

use tracing::{debug, info};
use wordfinder_config::FinderConfig;
use wordfinder_search::{Classifier, DocumentHost, Locator, OccurrenceSet, Query, Report};

use crate::debounce::Debouncer;

use super::events::{FinderUi, UiEvent};

pub struct WordFinder<D: DocumentHost, U: FinderUi> {
    document: D,
    ui: U,
    locator: Locator,
    classifier: Classifier,
    occurrences: Option<OccurrenceSet>,
    debounce: Debouncer,
}

impl<D: DocumentHost, U: FinderUi> WordFinder<D, U> {
    pub fn new(document: D, ui: U, config: &FinderConfig) -> Self {
        Self {
            document,
            ui,
            locator: Locator::new(&config.search),
            classifier: Classifier::new(&config.visibility),
            occurrences: None,
            debounce: Debouncer::new(config.scroll.debounce()),
        }
    }

    /// Dispatch one UI event.
    pub fn handle(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::FindClicked => self.on_find_clicked(),
            UiEvent::KeyPressed(key) => self.on_key_press(&key),
            UiEvent::Scrolled => self.on_scroll(now),
        }
    }

    pub fn on_find_clicked(&mut self) {
        self.search();
    }

    /// Only Enter submits.
    pub fn on_key_press(&mut self, key: &str) {
        if key == "Enter" {
            self.search();
        }
    }

    /// Arm (or re-arm) the debounced visibility pass.
    pub fn on_scroll(&mut self, now: Instant) {
        self.debounce.schedule(now);
    }

    /// Run the pending visibility pass if its deadline has passed.
    ///
    /// Returns `true` when a pass ran. A due pass with no current result
    /// set is consumed without doing anything.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.debounce.poll(now) {
            return false;
        }
        if self.occurrences.is_none() {
            debug!("scroll settled with no results, skipping reclassification");
            return false;
        }
        self.refresh_visibility();
        true
    }

    /// Read the query field, search, and render. Replaces any prior results.
    pub fn search(&mut self) {
        let raw = self.ui.query_text();
        let query = match Query::parse(&raw) {
            Ok(query) => query,
            Err(e) => {
                debug!("search not run: {e}");
                self.occurrences = None;
                self.ui.show_results(&Report::EmptyQuery.to_html());
                return;
            }
        };

        let set = self.locator.locate(&self.document, &query);
        info!(query = query.as_str(), count = set.len(), "search complete");
        self.occurrences = Some(set);
        self.refresh_visibility();
    }

    /// Reclassify the current set against the live viewport and re-render.
    pub fn refresh_visibility(&mut self) {
        let Some(set) = &self.occurrences else {
            return;
        };
        let classification = self.classifier.classify_set(&self.document, set);
        let report = Report::build(set, &classification);
        self.ui.show_results(&report.to_html());
    }

    pub fn occurrences(&self) -> Option<&OccurrenceSet> {
        self.occurrences.as_ref()
    }

    /// Deadline of the pending visibility pass, if any.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }
}
