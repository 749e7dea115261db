//! Term counting.
//!
//! Each document gets its own [`TermCounts`]; the corpus-wide
//! [`CorpusFrequency`] is the sum of all of them, i.e. the number of times a
//! token occurs across the concatenated token streams of every document. This
//! is a total-occurrence count, not the number of documents containing the
//! token, and it is the denominator of the IDF factor.

use indexmap::IndexMap;
use serde::Serialize;
use std::ops::AddAssign;

use crate::{
    corpus::document::{CF, TF},
    tokenizer::Tokenizer,
};

/// Token -> count table. Iteration follows first-occurrence order; reads of
/// absent tokens return zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable<C> {
    counts: IndexMap<String, C>,
}

pub type TermCounts = FrequencyTable<TF>;
pub type CorpusFrequency = FrequencyTable<CF>;

impl<C> Default for FrequencyTable<C> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<C: Copy + Default + AddAssign> FrequencyTable<C> {
    pub fn count_of(&self, token: &str) -> C {
        self.counts.get(token).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, C)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn add(&mut self, token: &str, count: C) {
        if let Some(existing) = self.counts.get_mut(token) {
            *existing += count;
        } else {
            self.counts.insert(token.to_string(), count);
        }
    }
}

impl CorpusFrequency {
    /// Adds one document's counts. Summation is commutative, so the totals do
    /// not depend on the order documents are absorbed in.
    pub fn absorb(&mut self, term_counts: &TermCounts) {
        for (token, count) in term_counts.iter() {
            self.add(token, CF::from(count));
        }
    }
}

/// Output of [`FrequencyAnalyzer::analyze`]: one [`TermCounts`] per input
/// text, in input order, plus the corpus-wide totals.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub term_counts: Vec<TermCounts>,
    pub corpus_frequency: CorpusFrequency,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FrequencyAnalyzer {
    tokenizer: Tokenizer,
}

impl FrequencyAnalyzer {
    pub const fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn term_counts(&self, text: &str) -> TermCounts {
        let mut term_counts = TermCounts::default();

        for token in self.tokenizer.tokenize(text) {
            term_counts.add(token, 1);
        }

        term_counts
    }

    pub fn analyze<'a>(&self, texts: impl IntoIterator<Item = &'a str>) -> Analysis {
        let term_counts: Vec<TermCounts> =
            texts.into_iter().map(|text| self.term_counts(text)).collect();

        let corpus_frequency = term_counts
            .iter()
            .fold(CorpusFrequency::default(), |mut acc, counts| {
                acc.absorb(counts);
                acc
            });

        Analysis {
            term_counts,
            corpus_frequency,
        }
    }
}
