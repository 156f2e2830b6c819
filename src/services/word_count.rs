use serde::Serialize;

/// Words per minute assumed by the reading-time estimate.
const READING_WPM: usize = 200;

/// Counts whitespace-delimited words. Runs of whitespace collapse to a
/// single separator; leading and trailing whitespace contribute nothing.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn reading_time_minutes(words: usize) -> usize {
    words.div_ceil(READING_WPM)
}

/// Live editor stats for the status bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingStats {
    pub characters: usize,
    pub words: usize,
    pub reading_time_minutes: usize,
}

impl WritingStats {
    pub fn of(content: &str) -> Self {
        let words = count_words(content);
        Self {
            characters: content.chars().count(),
            words,
            reading_time_minutes: reading_time_minutes(words),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_zero() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn whitespace_only_counts_zero() {
        assert_eq!(count_words("  "), 0);
        assert_eq!(count_words("\t\n  \r\n"), 0);
    }

    #[test]
    fn counts_tokens() {
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("It was a dark and stormy night."), 7);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(count_words("  one \t two\n\nthree  "), 3);
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(0), 0);
        assert_eq!(reading_time_minutes(1), 1);
        assert_eq!(reading_time_minutes(200), 1);
        assert_eq!(reading_time_minutes(201), 2);
    }

    #[test]
    fn stats_cover_all_fields() {
        let stats = WritingStats::of("two words");
        assert_eq!(stats.characters, 9);
        assert_eq!(stats.words, 2);
        assert_eq!(stats.reading_time_minutes, 1);
    }
}
