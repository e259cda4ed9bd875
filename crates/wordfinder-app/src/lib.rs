//! Word finder coordination: owns the current result set and the scroll
//! debounce, and turns UI events into searches and visibility passes.

pub mod debounce;
pub mod driver;
pub mod finder;
pub mod logging;

pub use debounce::{DebounceState, Debouncer};
pub use driver::run;
pub use finder::{FinderUi, UiEvent, WordFinder};
