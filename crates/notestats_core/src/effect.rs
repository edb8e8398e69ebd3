use crate::TextStatistics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the host for the active note's text.
    RequestActiveText,
    DisplayStats(TextStatistics),
    /// Replace the current selection with today's date.
    InsertDate { format: String },
}
