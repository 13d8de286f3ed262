// Retrieval module
// Keyword extraction and relevance scoring over the knowledge base

mod keywords;
mod scorer;

pub use keywords::extract_keywords;
pub use scorer::{RelevanceScorer, ScoredEntry, FALLBACK_MESSAGE, MAX_RESULTS};
