//! Locator types: Query, TextAnchor, Occurrence, OccurrenceSet.

use serde::Serialize;
use wordfinder_common::{FinderError, PageCoordinates};

use crate::document::NodeId;

/// A trimmed, non-empty search string, matched literally and
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query(String);

impl Query {
    /// Trim `raw`; whitespace-only input is [`FinderError::EmptyQuery`].
    pub fn parse(raw: &str) -> Result<Self, FinderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FinderError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Live position of a match: byte span `[start, end)` within a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnchor {
    pub node: NodeId,
    pub start: usize,
    pub end: usize,
}

impl TextAnchor {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One located match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    /// Source text of the match, original casing.
    pub matched_text: String,
    /// `None` for records carried over without a live anchor.
    #[serde(skip)]
    pub anchor: Option<TextAnchor>,
    pub context: String,
    /// Frozen page position taken at discovery.
    pub page: PageCoordinates,
}

impl Occurrence {
    /// An occurrence with only a frozen position. Visibility for these
    /// always takes the coordinate fallback.
    pub fn detached(
        matched_text: impl Into<String>,
        context: impl Into<String>,
        page: PageCoordinates,
    ) -> Self {
        Self {
            matched_text: matched_text.into(),
            anchor: None,
            context: context.into(),
            page,
        }
    }
}

/// The result of one search, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccurrenceSet {
    query: Query,
    occurrences: Vec<Occurrence>,
}

impl OccurrenceSet {
    pub fn new(query: Query, occurrences: Vec<Occurrence>) -> Self {
        Self { query, occurrences }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Occurrence> {
        self.occurrences.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.occurrences.iter()
    }

    pub fn as_slice(&self) -> &[Occurrence] {
        &self.occurrences
    }
}

impl<'a> IntoIterator for &'a OccurrenceSet {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
