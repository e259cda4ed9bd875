//! Result report: what the results surface shows after a search or a
//! visibility pass.

use serde::Serialize;

use crate::classifier::{Classification, Visibility};
use crate::locator::OccurrenceSet;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a word to search for.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// 1-based position in discovery order.
    pub index: usize,
    pub visibility: Visibility,
    pub left: i64,
    pub top: i64,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    EmptyQuery,
    NoMatches {
        query: String,
    },
    Found {
        query: String,
        visible: usize,
        hidden: usize,
        entries: Vec<ReportEntry>,
    },
}

impl Report {
    /// Pair each occurrence with its status. Occurrences beyond the
    /// classification's length are reported hidden.
    pub fn build(set: &OccurrenceSet, classification: &Classification) -> Self {
        let query = set.query().to_string();
        if set.is_empty() {
            return Report::NoMatches { query };
        }

        let entries: Vec<ReportEntry> = set
            .iter()
            .enumerate()
            .map(|(i, occurrence)| ReportEntry {
                index: i + 1,
                visibility: classification.get(i).unwrap_or(Visibility::Hidden),
                left: occurrence.page.left,
                top: occurrence.page.top,
                context: occurrence.context.clone(),
            })
            .collect();
        let visible = entries
            .iter()
            .filter(|e| e.visibility.is_visible())
            .count();

        Report::Found {
            query,
            visible,
            hidden: entries.len() - visible,
            entries,
        }
    }

    /// Number of occurrences reported.
    pub fn count(&self) -> usize {
        match self {
            Report::Found { entries, .. } => entries.len(),
            Report::EmptyQuery | Report::NoMatches { .. } => 0,
        }
    }

    /// Markup for the results surface.
    pub fn to_html(&self) -> String {
        match self {
            Report::EmptyQuery => EMPTY_QUERY_MESSAGE.to_string(),
            Report::NoMatches { query } => {
                format!("No occurrences of \"{}\" found.", escape_html(query))
            }
            Report::Found {
                query,
                visible,
                hidden,
                entries,
            } => {
                let mut html = format!(
                    "<strong>Found {} occurrence(s) of \"{}\":</strong><br>",
                    entries.len(),
                    escape_html(query)
                );
                html.push_str(&format!(
                    "<span class=\"visibility-summary\">Visible: {visible} | Hidden: {hidden}</span><br><br>"
                ));
                for entry in entries {
                    html.push_str(&entry_html(entry));
                }
                html
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {e}\"}}"))
    }
}

fn entry_html(entry: &ReportEntry) -> String {
    let (class, marker) = match entry.visibility {
        Visibility::Visible => ("visible", "&#128065; Visible"),
        Visibility::Hidden => ("hidden", "&#128683; Hidden"),
    };
    format!(
        "<div class=\"result-item {class}\">\
         <strong>#{}:</strong> <span class=\"status\">{marker}</span> \
         Left: {}px, Top: {}px<br>\
         <em>Context:</em> {}\
         </div>",
        entry.index,
        entry.left,
        entry.top,
        escape_html(&entry.context)
    )
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
