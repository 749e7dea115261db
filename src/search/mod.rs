pub mod engine;
pub mod ranker;
pub mod search_result;

pub use self::{engine::SearchEngine, search_result::SearchResult};
