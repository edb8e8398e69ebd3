/// Word and character counts for one block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStatistics {
    /// Whitespace-delimited, non-empty tokens.
    pub word_count: usize,
    /// Raw UTF-8 length of the untrimmed input.
    pub character_count: usize,
}

impl TextStatistics {
    pub const EMPTY: Self = Self {
        word_count: 0,
        character_count: 0,
    };
}

pub trait StatisticsCounter: Send + Sync {
    fn compute(&self, text: &str) -> TextStatistics;
}

/// Stateless counter splitting on runs of ASCII whitespace (space, tab, LF, VT, FF, CR).
#[derive(Debug, Default, Clone, Copy)]
pub struct TextStatsEngine;

impl StatisticsCounter for TextStatsEngine {
    fn compute(&self, text: &str) -> TextStatistics {
        compute_statistics(text)
    }
}

/// Computes statistics for `text`. Total over all inputs.
pub fn compute_statistics(text: &str) -> TextStatistics {
    if text.is_empty() {
        return TextStatistics::EMPTY;
    }

    let word_count = text
        .trim_matches(is_word_separator)
        .split(is_word_separator)
        .filter(|token| !token.is_empty())
        .count();

    TextStatistics {
        word_count,
        character_count: text.len(),
    }
}

/// Absent text counts the same as empty text.
pub fn compute_statistics_opt(text: Option<&str>) -> TextStatistics {
    text.map_or(TextStatistics::EMPTY, compute_statistics)
}

// `char::is_ascii_whitespace` leaves out vertical tab; the C `isspace` class includes it.
fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
