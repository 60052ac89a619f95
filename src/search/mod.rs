// Candidate filtering and relevance ranking for ingredient queries

pub mod filter;
pub mod ranker;
pub mod tfidf;

// Re-exports
pub use filter::{CandidateFilter, Preferences};
pub use ranker::{RankedRecipe, RelevanceRanker};
pub use tfidf::{SparseVector, TfidfMatrix, TfidfVectorizer};
