use crate::catalog::Category;
use crate::search::{Preferences, RankedRecipe};
use serde::{Deserialize, Serialize};

/// Search request body
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RankedRecipe>,
    pub best: Option<BestMatch>,
    pub recommendations: Vec<String>,
}

/// Most relevant recipe of a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMatch {
    pub name: String,
    pub search_url: String,
}

/// Recommendation query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub k: Option<usize>,
}

/// Recommendations for one recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recipe: String,
    pub recommendations: Vec<String>,
}

/// Full recipe details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub name: String,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub meat: bool,
    pub gluten: bool,
    pub dairy: bool,
    pub sugar: bool,
    pub search_url: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub recipes: usize,
}
