use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocID,
    pub text: String,
}

impl Document {
    pub const fn new(id: DocID, text: String) -> Self {
        Self { id, text }
    }
}

pub type DocID = String;
/// Occurrences of a token within one document.
pub type TF = u32;
/// Occurrences of a token across the whole corpus.
pub type CF = u64;
pub type TFIDF = f64;
