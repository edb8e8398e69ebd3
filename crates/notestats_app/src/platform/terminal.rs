use std::io::Write;

use notestats_core::TextStatistics;
use notestats_host::{SelectionEditor, StatsDisplay, TextSource};
use notestats_logging::notes_error;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    words: usize,
    characters: usize,
}

/// Host whose active note is text captured from stdin and whose display is a writer.
pub(crate) struct TerminalHost<W> {
    text: Option<String>,
    out: W,
    format: OutputFormat,
}

impl<W: Write> TerminalHost<W> {
    pub(crate) fn new(text: Option<String>, out: W, format: OutputFormat) -> Self {
        Self { text, out, format }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            notes_error!("Failed to write output: {}", err);
        }
    }
}

impl<W: Write> TextSource for TerminalHost<W> {
    fn active_text(&self) -> Option<String> {
        self.text.clone()
    }
}

impl<W: Write> StatsDisplay for TerminalHost<W> {
    fn display_stats(&mut self, stats: &TextStatistics) {
        let line = match self.format {
            OutputFormat::Plain => format!(
                "words: {}, characters: {}",
                stats.word_count, stats.character_count
            ),
            OutputFormat::Json => {
                let report = StatsReport {
                    words: stats.word_count,
                    characters: stats.character_count,
                };
                match serde_json::to_string(&report) {
                    Ok(json) => json,
                    Err(err) => {
                        notes_error!("Failed to serialize stats: {}", err);
                        return;
                    }
                }
            }
        };
        self.emit(&line);
    }
}

impl<W: Write> SelectionEditor for TerminalHost<W> {
    fn replace_selection(&mut self, text: &str) {
        self.emit(text);
    }
}
