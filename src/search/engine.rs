use crate::{
    corpus::Corpus,
    error::Result,
    tf_idf::{compute_weights, round_to, WeightVector},
};

use super::{ranker, search_result::SearchResult};

pub const SIMILARITY_DIGITS: i32 = 3;

/// Cosine similarity rounded to [`SIMILARITY_DIGITS`] places. Zero when either
/// vector has zero norm; never negative zero.
pub fn cosine_similarity(a: &WeightVector, b: &WeightVector) -> f64 {
    let denominator = a.norm() * b.norm();

    if denominator == 0.0 {
        return 0.0;
    }

    // -0.0 + 0.0 == +0.0
    round_to(a.dot(b) / denominator, SIMILARITY_DIGITS) + 0.0
}

/// Scores documents of a corpus against one of its own documents.
pub struct SearchEngine {
    corpus: Corpus,
    weights: Vec<WeightVector>,
}

impl SearchEngine {
    pub fn new(corpus: Corpus) -> Self {
        let weights = compute_weights(&corpus);

        Self { corpus, weights }
    }

    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn weights(&self, doc_id: &str) -> Result<&WeightVector> {
        Ok(&self.weights[self.corpus.position(doc_id)?])
    }

    #[cfg(test)]
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        Ok(cosine_similarity(self.weights(a)?, self.weights(b)?))
    }

    /// Similarity of `query` to every document, itself included, in corpus
    /// order.
    pub fn similarities(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query_weights = self.weights(query)?;

        Ok(self
            .corpus
            .documents()
            .iter()
            .zip(&self.weights)
            .map(|(document, weights)| {
                SearchResult::new(
                    document.id.clone(),
                    cosine_similarity(query_weights, weights),
                )
            })
            .collect())
    }

    /// The `k` documents most similar to `query`, best first.
    pub fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        let scores = self.similarities(query)?;

        tracing::debug!(query, candidates = scores.len(), k, "ranking");

        ranker::top_k(scores, k)
    }
}
