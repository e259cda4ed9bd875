//! Find-in-page engine: locate every occurrence of a literal query in a
//! document's visible text and classify each against the viewport.

pub mod classifier;
pub mod document;
pub mod filter;
pub mod locator;
pub mod report;

pub use classifier::{Classification, Classifier, Visibility};
pub use document::{DocumentHost, MemoryDocument, NodeId, NodeKind, Resolution, TextBox};
pub use filter::ExclusionFilter;
pub use locator::{Locator, Occurrence, OccurrenceSet, Query, TextAnchor};
pub use report::{Report, ReportEntry};
