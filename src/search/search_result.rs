use serde::Serialize;
use std::fmt;

use crate::corpus::DocID;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub doc_id: DocID,
    pub score: f64,
}

impl SearchResult {
    pub const fn new(doc_id: DocID, score: f64) -> Self {
        Self { doc_id, score }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3}", self.doc_id, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_score_with_three_decimals() {
        assert_eq!(
            SearchResult::new("a.txt".to_string(), 1.0).to_string(),
            "a.txt: 1.000"
        );
        assert_eq!(
            SearchResult::new("b.txt".to_string(), 0.5).to_string(),
            "b.txt: 0.500"
        );
        assert_eq!(
            SearchResult::new("c.txt".to_string(), 0.183).to_string(),
            "c.txt: 0.183"
        );
    }
}
