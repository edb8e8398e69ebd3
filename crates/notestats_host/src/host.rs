//! Capabilities an editor must provide to run the plugin.
//!
//! The core never sees the editor; it only asks for text and hands back
//! results through these traits.

use notestats_core::TextStatistics;

/// Supplies the currently active or selected text.
pub trait TextSource {
    /// `None` when no note is open.
    fn active_text(&self) -> Option<String>;
}

/// Shows a computed result to the user.
pub trait StatsDisplay {
    fn display_stats(&mut self, stats: &TextStatistics);
}

pub trait SelectionEditor {
    /// Replaces the selection, or inserts at the cursor when nothing is selected.
    fn replace_selection(&mut self, text: &str);
}

/// Everything the effect runner needs from a host.
pub trait EditorHost: TextSource + StatsDisplay + SelectionEditor {}

impl<T: TextSource + StatsDisplay + SelectionEditor> EditorHost for T {}
