//! Ranks a corpus of plain-text documents against one of its documents by
//! TF-IDF weighted cosine similarity.

pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod loader;
pub mod report;
pub mod retrieval;
pub mod search;
pub mod tf_idf;
pub mod tokenizer;
