pub mod document;

use std::collections::HashMap;

pub use self::document::{DocID, Document, CF, TF, TFIDF};
use crate::{
    analyzer::{Analysis, CorpusFrequency, FrequencyAnalyzer, TermCounts},
    error::{Error, Result},
};

/// Documents in loader order together with their frequency tables. Built once,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    term_counts: Vec<TermCounts>,
    corpus_frequency: CorpusFrequency,
    positions: HashMap<DocID, usize>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        Self::with_analyzer(documents, &FrequencyAnalyzer::default())
    }

    pub fn with_analyzer(documents: Vec<Document>, analyzer: &FrequencyAnalyzer) -> Result<Self> {
        let mut positions = HashMap::with_capacity(documents.len());

        for (position, document) in documents.iter().enumerate() {
            if positions.insert(document.id.clone(), position).is_some() {
                return Err(Error::DuplicateDocument(document.id.clone()));
            }
        }

        let Analysis {
            term_counts,
            corpus_frequency,
        } = analyzer.analyze(documents.iter().map(|document| document.text.as_str()));

        tracing::info!(
            documents = documents.len(),
            vocabulary = corpus_frequency.len(),
            "corpus analyzed"
        );

        Ok(Self {
            documents,
            term_counts,
            corpus_frequency,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Position of `doc_id` in loader order.
    pub fn position(&self, doc_id: &str) -> Result<usize> {
        self.positions
            .get(doc_id)
            .copied()
            .ok_or_else(|| Error::DocumentNotFound(doc_id.to_string()))
    }

    #[cfg(test)]
    pub fn get(&self, doc_id: &str) -> Result<&Document> {
        self.position(doc_id).map(|position| &self.documents[position])
    }

    pub fn term_counts(&self) -> &[TermCounts] {
        &self.term_counts
    }

    pub const fn corpus_frequency(&self) -> &CorpusFrequency {
        &self.corpus_frequency
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Document, &TermCounts)> {
        self.documents.iter().zip(&self.term_counts)
    }
}
