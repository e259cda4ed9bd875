//! UI-facing types: the panel's controls and the events they raise.

/// The find panel: one text field in, one results region out.
pub trait FinderUi {
    /// Current content of the query field.
    fn query_text(&self) -> String;

    /// Replace the results region wholesale.
    fn show_results(&mut self, html: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The find button was activated.
    FindClicked,
    /// A key was pressed in the query field.
    KeyPressed(String),
    /// The viewport scrolled.
    Scrolled,
}
