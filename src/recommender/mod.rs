// Content-based recommendations over the whole catalog

use crate::catalog::{CatalogStore, Recipe};
use crate::error::Error;
use crate::search::tfidf::{TfidfMatrix, TfidfVectorizer};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_RECOMMENDATIONS: usize = 3;

/// Text describing a recipe for similarity purposes.
///
/// Only the meat and gluten flags take part; dairy and sugar are left out.
pub fn feature_text(recipe: &Recipe) -> String {
    format!(
        "{} {} {} {}",
        recipe.category,
        recipe.ingredients,
        python_bool(recipe.meat),
        python_bool(recipe.gluten)
    )
}

fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Nearest-neighbour lookup by recipe name over a TF-IDF space fitted once
/// on every recipe in the catalog.
///
/// The space is immutable; a changed catalog needs a new recommender.
#[derive(Debug, Clone)]
pub struct SimilarityRecommender {
    catalog: Arc<CatalogStore>,
    space: TfidfMatrix,
}

impl SimilarityRecommender {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        let features: Vec<String> = catalog.recipes().iter().map(feature_text).collect();

        let space = match TfidfVectorizer::new().fit_transform(&features) {
            Ok(space) => space,
            Err(Error::EmptyVocabulary) => {
                warn!("Catalog has no usable features, recommendations disabled");
                TfidfMatrix::default()
            }
            Err(e) => {
                warn!("Failed to build similarity space: {}", e.log_safe());
                TfidfMatrix::default()
            }
        };

        info!(
            "Similarity space built: {} recipes, {} terms",
            space.n_rows(),
            space.vocabulary_size()
        );

        Self { catalog, space }
    }

    /// Up to `k` recipe names most similar to `name`, most similar first.
    ///
    /// Unknown names yield an empty list. The named recipe is never included.
    pub fn recommend(&self, name: &str, k: usize) -> Vec<String> {
        let Some(target) = self.catalog.position(name) else {
            debug!("No recipe named '{}', nothing to recommend", name);
            return Vec::new();
        };

        let mut scored: Vec<(usize, f64)> = self
            .space
            .similarities(target)
            .into_iter()
            .enumerate()
            .filter(|(row, _)| *row != target)
            .collect();

        // Stable: equal similarity keeps catalog order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(k)
            .map(|(row, _)| self.catalog.recipes()[row].name.clone())
            .collect()
    }
}
