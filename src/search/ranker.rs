use crate::catalog::{Category, Recipe};
use crate::error::Error;
use crate::search::tfidf::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A candidate with its relevance to the user's query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecipe {
    pub name: String,
    pub category: Category,
    pub relevance_score: f64,
}

/// Scores candidates against the query with TF-IDF and cosine similarity.
///
/// The vector space is fitted per call on the candidates plus the query and
/// discarded afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceRanker {
    vectorizer: TfidfVectorizer,
}

impl RelevanceRanker {
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(),
        }
    }

    /// Rank candidates by descending relevance; equal scores keep candidate order
    pub fn rank<S: AsRef<str>>(
        &self,
        candidates: &[&Recipe],
        query_terms: &[S],
    ) -> Vec<RankedRecipe> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let query = query_terms
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(" ");

        let mut documents: Vec<&str> = candidates.iter().map(|r| r.ingredients.as_str()).collect();
        documents.push(&query);

        let scores = match self.vectorizer.fit_transform(&documents) {
            Ok(matrix) => {
                let query_index = matrix.n_rows() - 1;
                let mut scores = matrix.similarities(query_index);
                scores.truncate(query_index);
                scores
            }
            Err(Error::EmptyVocabulary) => {
                warn!(
                    "No usable terms in {} candidates, scoring all as 0",
                    candidates.len()
                );
                vec![0.0; candidates.len()]
            }
            Err(e) => {
                warn!("Ranking failed: {}", e.log_safe());
                vec![0.0; candidates.len()]
            }
        };

        let mut ranked: Vec<RankedRecipe> = candidates
            .iter()
            .zip(scores)
            .map(|(recipe, score)| RankedRecipe {
                name: recipe.name.clone(),
                category: recipe.category,
                relevance_score: score,
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        debug!("Ranked {} candidates for query '{}'", ranked.len(), query);
        ranked
    }
}
