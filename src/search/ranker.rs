use std::cmp::Ordering;

use crate::error::{Error, Result};

use super::search_result::SearchResult;

/// Sorts `scores` best first and keeps the first `k`.
///
/// Scores are compared exactly; equal scores keep their input order. `k` must
/// lie in `1..=scores.len()`.
pub fn top_k(mut scores: Vec<SearchResult>, k: usize) -> Result<Vec<SearchResult>> {
    if k == 0 {
        return Err(Error::InvalidK);
    }

    if k > scores.len() {
        return Err(Error::KExceedsCorpus {
            k,
            corpus_size: scores.len(),
        });
    }

    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scores.truncate(k);

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(scores: &[(&str, f64)]) -> Vec<SearchResult> {
        scores
            .iter()
            .map(|(id, score)| SearchResult::new((*id).to_string(), *score))
            .collect()
    }

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|result| result.doc_id.as_str()).collect()
    }

    #[test]
    fn keeps_highest_scores() {
        let scores = results(&[
            ("1.txt", 0.2),
            ("2.txt", 0.9),
            ("3.txt", 0.05),
            ("4.txt", 0.7),
            ("5.txt", 1.0),
        ]);

        let top = top_k(scores, 3).expect("Failed to rank");

        assert_eq!(ids(&top), vec!["5.txt", "2.txt", "4.txt"]);
        assert_eq!(top[2].score, 0.7);
    }

    #[test]
    fn ties_keep_corpus_order() {
        let scores = results(&[
            ("c.txt", 0.5),
            ("a.txt", 0.8),
            ("b.txt", 0.5),
            ("d.txt", 0.5),
        ]);

        let top = top_k(scores, 4).expect("Failed to rank");

        assert_eq!(ids(&top), vec!["a.txt", "c.txt", "b.txt", "d.txt"]);
    }

    #[test]
    fn k_equal_to_corpus_size_returns_everything() {
        let scores = results(&[("a.txt", 0.1), ("b.txt", 0.3)]);

        let top = top_k(scores, 2).expect("Failed to rank");

        assert_eq!(ids(&top), vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn rejects_zero_k() {
        let scores = results(&[("a.txt", 0.1)]);

        assert!(matches!(top_k(scores, 0), Err(Error::InvalidK)));
    }

    #[test]
    fn rejects_k_beyond_corpus() {
        let scores = results(&[("a.txt", 0.1), ("b.txt", 0.3)]);

        assert!(matches!(
            top_k(scores, 3),
            Err(Error::KExceedsCorpus {
                k: 3,
                corpus_size: 2
            })
        ));
    }

    #[test]
    fn rejects_any_k_on_empty_input() {
        assert!(matches!(
            top_k(Vec::new(), 1),
            Err(Error::KExceedsCorpus {
                k: 1,
                corpus_size: 0
            })
        ));
    }
}
