//! "Most frequent words" report over the corpus-wide occurrence counts. Not
//! used by the ranking itself.

use serde::Serialize;

use crate::{
    analyzer::CorpusFrequency,
    corpus::CF,
    error::{Error, Result},
};

pub const DEFAULT_TOP_WORDS: usize = 200;
pub const DEFAULT_MIN_WORD_LEN: usize = 4;
pub const DEFAULT_MAX_WORD_LEN: usize = 20;

/// Inclusive bounds on token length, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordLengthFilter {
    min: usize,
    max: usize,
}

impl WordLengthFilter {
    pub const fn new(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidWordLength { min, max });
        }

        Ok(Self { min, max })
    }

    pub const fn min(&self) -> usize {
        self.min
    }

    pub const fn max(&self) -> usize {
        self.max
    }

    pub fn accepts(&self, token: &str) -> bool {
        (self.min..=self.max).contains(&token.chars().count())
    }
}

impl Default for WordLengthFilter {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WORD_LEN,
            max: DEFAULT_MAX_WORD_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCount {
    pub token: String,
    pub count: CF,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    pub filter: WordLengthFilter,
    /// Up to `n` tokens, most frequent first.
    pub most_frequent: Vec<TokenCount>,
    /// Up to `n` tokens accepted by `filter`, most frequent first.
    pub within_length: Vec<TokenCount>,
}

impl FrequencyReport {
    /// Ties keep first-occurrence order. `n` larger than the vocabulary returns
    /// the whole vocabulary.
    pub fn build(frequency: &CorpusFrequency, n: usize, filter: WordLengthFilter) -> Self {
        let mut sorted: Vec<(&str, CF)> = frequency.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));

        let to_token_count = |(token, count): &(&str, CF)| TokenCount {
            token: (*token).to_string(),
            count: *count,
        };

        let most_frequent = sorted.iter().take(n).map(to_token_count).collect();
        let within_length = sorted
            .iter()
            .filter(|(token, _)| filter.accepts(token))
            .take(n)
            .map(to_token_count)
            .collect();

        Self {
            filter,
            most_frequent,
            within_length,
        }
    }
}
