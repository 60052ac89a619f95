use crate::catalog::recipe::normalize_term;
use crate::catalog::{Attribute, CatalogStore, Category, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// User restrictions. `None` means the field is not filtered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, rename = "carne", alias = "meat")]
    pub meat: Option<bool>,
    #[serde(default)]
    pub gluten: Option<bool>,
    #[serde(default, rename = "lacteos", alias = "dairy")]
    pub dairy: Option<bool>,
    #[serde(default, rename = "azucar", alias = "sugar")]
    pub sugar: Option<bool>,
    #[serde(default, rename = "categoria", alias = "category")]
    pub category: Option<Category>,
}

impl Preferences {
    pub fn restriction(&self, attribute: Attribute) -> Option<bool> {
        match attribute {
            Attribute::Meat => self.meat,
            Attribute::Gluten => self.gluten,
            Attribute::Dairy => self.dairy,
            Attribute::Sugar => self.sugar,
        }
    }

    /// Number of restrictions that are set
    pub fn active_count(&self) -> usize {
        Attribute::ALL
            .iter()
            .filter(|a| self.restriction(**a).is_some())
            .count()
            + usize::from(self.category.is_some())
    }

    /// Whether a recipe satisfies every set restriction
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        let flags_ok = Attribute::ALL.iter().all(|&attribute| {
            self.restriction(attribute)
                .map_or(true, |wanted| recipe.attribute(attribute) == wanted)
        });

        flags_ok && self.category.map_or(true, |c| recipe.category == c)
    }
}

/// Ingredient-overlap and restriction filtering over the catalog
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    catalog: Arc<CatalogStore>,
}

impl CandidateFilter {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Recipes with at least one ingredient exactly matching an available one.
    ///
    /// Both sides are trimmed and lower-cased before comparison.
    pub fn filter_by_ingredients<S: AsRef<str>>(&self, available: &[S]) -> Vec<&Recipe> {
        let available: HashSet<String> = available
            .iter()
            .map(|s| normalize_term(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        let candidates: Vec<&Recipe> = self
            .catalog
            .recipes()
            .iter()
            .filter(|recipe| recipe.terms().iter().any(|t| available.contains(t)))
            .collect();

        debug!(
            "{} of {} recipes match {} available ingredients",
            candidates.len(),
            self.catalog.len(),
            available.len()
        );

        candidates
    }

    /// Keep only candidates that satisfy every set restriction
    pub fn apply_restrictions<'a>(
        &self,
        candidates: Vec<&'a Recipe>,
        preferences: &Preferences,
    ) -> Vec<&'a Recipe> {
        let before = candidates.len();
        let kept: Vec<&Recipe> = candidates
            .into_iter()
            .filter(|recipe| preferences.accepts(recipe))
            .collect();

        debug!(
            "{} of {} candidates remain after {} restrictions",
            kept.len(),
            before,
            preferences.active_count()
        );

        kept
    }
}
