#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Document '{0}' not found in corpus")]
    DocumentNotFound(String),

    #[error("Duplicate document identifier '{0}'")]
    DuplicateDocument(String),

    #[error("k must be a positive integer")]
    InvalidK,

    #[error("k = {k} exceeds corpus size of {corpus_size} documents")]
    KExceedsCorpus { k: usize, corpus_size: usize },

    #[error("Invalid word length bounds: min {min} is greater than max {max}")]
    InvalidWordLength { min: usize, max: usize },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
