//! TF-IDF weighting.
//!
//! `weight(t, d) = tf(t, d) * (log2(N / cf(t)) + 1)` where `N` is the number of
//! documents and `cf(t)` the total number of occurrences of `t` in the corpus.
//! Weights are rounded to [`WEIGHT_DIGITS`] decimal places.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    analyzer::{CorpusFrequency, TermCounts},
    corpus::{Corpus, CF, TF, TFIDF},
};

pub const WEIGHT_DIGITS: i32 = 4;

/// Rounds half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10_f64.powi(digits);
    (value * scale).round() / scale
}

/// `cf` must be non-zero; a token counted in any document always is.
#[allow(clippy::cast_precision_loss)]
pub fn tf_idf(tf: TF, cf: CF, num_docs: usize) -> TFIDF {
    let idf = (num_docs as f64 / cf as f64).log2() + 1.0;
    round_to(f64::from(tf) * idf, WEIGHT_DIGITS)
}

/// Sparse weight vector. Tokens that are not stored weigh zero.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector {
    weights: IndexMap<String, TFIDF>,
}

impl WeightVector {
    pub fn weight(&self, token: &str) -> TFIDF {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TFIDF)> {
        self.weights
            .iter()
            .map(|(token, weight)| (token.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Euclidean norm over all of this vector's tokens.
    pub fn norm(&self) -> f64 {
        self.weights
            .values()
            .fold(0.0, |acc, weight| acc + weight * weight)
            .sqrt()
    }

    /// Sum of products over the tokens present in both vectors.
    ///
    /// Products are summed in token order, so `a.dot(b)` and `b.dot(a)` are
    /// bit-identical.
    pub fn dot(&self, other: &Self) -> f64 {
        let mut products: Vec<(&str, f64)> = self
            .weights
            .iter()
            .filter_map(|(token, weight)| {
                other
                    .weights
                    .get(token)
                    .map(|other_weight| (token.as_str(), weight * other_weight))
            })
            .collect();

        products.sort_unstable_by(|a, b| a.0.cmp(b.0));
        products
            .into_iter()
            .fold(0.0, |acc, (_, product)| acc + product)
    }

    fn from_counts(term_counts: &TermCounts, frequency: &CorpusFrequency, num_docs: usize) -> Self {
        term_counts
            .iter()
            .map(|(token, tf)| {
                let weight = tf_idf(tf, frequency.count_of(token), num_docs);
                (token.to_string(), weight)
            })
            .collect()
    }
}

impl FromIterator<(String, TFIDF)> for WeightVector {
    fn from_iter<I: IntoIterator<Item = (String, TFIDF)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

/// One weight vector per document, in corpus order.
pub fn compute_weights(corpus: &Corpus) -> Vec<WeightVector> {
    let num_docs = corpus.len();

    corpus
        .term_counts()
        .iter()
        .map(|term_counts| {
            WeightVector::from_counts(term_counts, corpus.corpus_frequency(), num_docs)
        })
        .collect()
}
