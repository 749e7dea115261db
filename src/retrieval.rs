use serde::Serialize;
use std::{path::PathBuf, time::Instant};

use crate::{
    corpus::{Corpus, DocID},
    error::Result,
    loader::{CorpusLoader, DEFAULT_EXTENSION},
    report::{FrequencyReport, WordLengthFilter, DEFAULT_TOP_WORDS},
    search::{SearchEngine, SearchResult},
};

pub const DEFAULT_K: usize = 10;

#[derive(Debug, Clone)]
pub struct RetrievalOptions {
    pub data_path: PathBuf,
    /// `None` loads every file.
    pub extension: Option<String>,
    pub recursive: bool,
    pub k: usize,
    pub top_words: usize,
    pub word_lengths: WordLengthFilter,
}

impl Default for RetrievalOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data"),
            extension: Some(DEFAULT_EXTENSION.to_string()),
            recursive: false,
            k: DEFAULT_K,
            top_words: DEFAULT_TOP_WORDS,
            word_lengths: WordLengthFilter::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RetrievalReport {
    pub query: DocID,
    pub corpus_size: usize,
    pub frequency: FrequencyReport,
    pub results: Vec<SearchResult>,
}

/// Loads the corpus under `options.data_path` and ranks its documents against
/// the document identified by `query`.
pub fn retrieve_documents(query: &str, options: &RetrievalOptions) -> Result<RetrievalReport> {
    let start = Instant::now();

    let documents = CorpusLoader::new(&options.data_path)
        .with_extension(options.extension.clone())
        .with_recursive(options.recursive)
        .load()?;

    let corpus = Corpus::new(documents)?;
    let frequency = FrequencyReport::build(
        corpus.corpus_frequency(),
        options.top_words,
        options.word_lengths,
    );

    let engine = SearchEngine::new(corpus);
    let results = engine.search(query, options.k)?;

    tracing::info!(query, k = options.k, elapsed = ?start.elapsed(), "retrieval finished");

    Ok(RetrievalReport {
        query: query.to_string(),
        corpus_size: engine.corpus().len(),
        frequency,
        results,
    })
}
