use crate::catalog::recipe::normalize_term;
use crate::catalog::CatalogStore;
use crate::error::{Error, Result};
use crate::recommender::{SimilarityRecommender, DEFAULT_RECOMMENDATIONS};
use crate::search::{CandidateFilter, Preferences, RankedRecipe, RelevanceRanker};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a full search: ranked matches, the best one, and recipes like it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<RankedRecipe>,
    pub best: Option<String>,
    pub recommendations: Vec<String>,
}

/// Sequences filtering, ranking and recommendation over one catalog
#[derive(Debug, Clone)]
pub struct RecipeFinder {
    catalog: Arc<CatalogStore>,
    filter: CandidateFilter,
    ranker: RelevanceRanker,
    recommender: SimilarityRecommender,
    max_results: usize,
    recommendations: usize,
}

impl RecipeFinder {
    pub fn new(
        catalog: Arc<CatalogStore>,
        filter: CandidateFilter,
        ranker: RelevanceRanker,
        recommender: SimilarityRecommender,
    ) -> Self {
        Self {
            catalog,
            filter,
            ranker,
            recommender,
            max_results: usize::MAX,
            recommendations: DEFAULT_RECOMMENDATIONS,
        }
    }

    /// Build the default filter, ranker and recommender for `catalog`
    pub fn from_catalog(catalog: Arc<CatalogStore>) -> Self {
        let filter = CandidateFilter::new(catalog.clone());
        let recommender = SimilarityRecommender::new(catalog.clone());
        Self::new(catalog, filter, RelevanceRanker::new(), recommender)
    }

    /// Cap the number of ranked results returned by [`RecipeFinder::search`]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Number of recommendations per lookup
    pub fn with_recommendations(mut self, k: usize) -> Self {
        self.recommendations = k;
        self
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Filter and rank recipes for the given ingredients and preferences.
    ///
    /// An empty ingredient list is an input error; no matches is an empty list.
    pub fn find_recipes<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        preferences: &Preferences,
    ) -> Result<Vec<RankedRecipe>> {
        let ingredients: Vec<String> = ingredients
            .iter()
            .map(|s| normalize_term(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(Error::InvalidInput(
                "At least one ingredient is required".to_string(),
            ));
        }

        let candidates = self.filter.filter_by_ingredients(&ingredients);
        let candidates = self.filter.apply_restrictions(candidates, preferences);

        if candidates.is_empty() {
            info!("No recipes match {} ingredients", ingredients.len());
            return Ok(Vec::new());
        }

        Ok(self.ranker.rank(&candidates, &ingredients))
    }

    /// Names of recipes similar to `recipe_name`, excluding it
    pub fn get_recommendations(&self, recipe_name: &str) -> Vec<String> {
        self.recommend(recipe_name, self.recommendations)
    }

    /// Like [`RecipeFinder::get_recommendations`] with an explicit `k`
    pub fn recommend(&self, recipe_name: &str, k: usize) -> Vec<String> {
        self.recommender
            .recommend(recipe_name, k)
            .into_iter()
            .filter(|name| name != recipe_name)
            .collect()
    }

    /// Find recipes, then recommend recipes similar to the most relevant one
    pub fn search<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        preferences: &Preferences,
    ) -> Result<SearchOutcome> {
        let mut results = self.find_recipes(ingredients, preferences)?;
        results.truncate(self.max_results);

        let Some(best) = results.first().map(|r| r.name.clone()) else {
            return Ok(SearchOutcome::default());
        };

        let recommendations = self.get_recommendations(&best);
        debug!(
            "Best match '{}' with {} recommendations",
            best,
            recommendations.len()
        );

        Ok(SearchOutcome {
            results,
            best: Some(best),
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Recipe};

    fn finder() -> RecipeFinder {
        let catalog = CatalogStore::from_recipes(vec![
            Recipe::new(
                "Tortilla",
                Category::Principal,
                "huevo, cebolla",
                [false, false, false, false],
            ),
            Recipe::new(
                "Flan",
                Category::Postre,
                "leche, huevo, azucar",
                [false, false, true, true],
            ),
            Recipe::new(
                "Panqueques",
                Category::Postre,
                "harina, leche, huevo",
                [false, true, true, false],
            ),
            Recipe::new(
                "Ensalada",
                Category::Saludable,
                "lechuga, tomate",
                [false, false, false, false],
            ),
        ])
        .unwrap();

        RecipeFinder::from_catalog(Arc::new(catalog))
    }

    #[test]
    fn test_find_recipes_ranks() {
        let results = finder()
            .find_recipes(&["Huevo", " leche"], &Preferences::default())
            .unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(names.last(), Some(&"Tortilla"));
    }

    #[test]
    fn test_empty_ingredients_is_invalid_input() {
        let err = finder()
            .find_recipes(&["", "  "], &Preferences::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let none: [&str; 0] = [];
        assert!(finder().search(&none, &Preferences::default()).is_err());
    }

    #[test]
    fn test_no_match_is_empty() {
        let prefs = Preferences {
            meat: Some(true),
            ..Default::default()
        };
        let results = finder().find_recipes(&["huevo"], &prefs).unwrap();
        assert!(results.is_empty());

        let outcome = finder().search(&["huevo"], &prefs).unwrap();
        assert_eq!(outcome, SearchOutcome::default());
    }

    #[test]
    fn test_search_outcome() {
        let finder = finder().with_max_results(2).with_recommendations(2);
        let outcome = finder
            .search(&["leche", "huevo", "azucar"], &Preferences::default())
            .unwrap();

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.best.as_deref(), Some("Flan"));
        assert_eq!(outcome.recommendations.len(), 2);
        assert!(!outcome.recommendations.contains(&"Flan".to_string()));
    }

    #[test]
    fn test_recommendations_exclude_query() {
        let finder = finder();
        let names = finder.get_recommendations("Flan");

        assert!(names.len() <= 3);
        assert!(!names.iter().any(|n| n == "Flan"));
        assert!(finder.get_recommendations("Unknown Dish").is_empty());
    }
}
