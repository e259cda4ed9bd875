//! The coordinating object behind the find panel.

mod core;
mod events;


pub use self::core::WordFinder;
pub use events::{FinderUi, UiEvent};
