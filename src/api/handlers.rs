use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{api::models::*, pipeline::RecipeFinder, utils::web_search_url, Error, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub finder: Arc<RecipeFinder>,
    pub settings: crate::config::Settings,
}

/// POST /api/search - Find, rank and recommend recipes
pub async fn search_recipes(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    debug!("Search request: {:?}", request);

    let outcome = state
        .finder
        .search(&request.ingredients, &request.preferences)?;

    let best = outcome.best.map(|name| BestMatch {
        search_url: web_search_url(&name),
        name,
    });

    Ok(Json(SearchResponse {
        results: outcome.results,
        best,
        recommendations: outcome.recommendations,
    }))
}

/// GET /api/recipes/:name - Get recipe details
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RecipeDetail>> {
    debug!("Get recipe request: {}", name);

    let recipe = state
        .finder
        .catalog()
        .get(&name)
        .ok_or_else(|| Error::NotFound(format!("Recipe '{name}' not found")))?;

    Ok(Json(RecipeDetail {
        name: recipe.name.clone(),
        category: recipe.category,
        ingredients: recipe.terms().to_vec(),
        meat: recipe.meat,
        gluten: recipe.gluten,
        dairy: recipe.dairy,
        sugar: recipe.sugar,
        search_url: web_search_url(&recipe.name),
    }))
}

/// GET /api/recipes/:name/recommendations - Similar recipes
///
/// Unknown names return an empty list rather than 404.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendationsResponse>> {
    debug!("Recommendations request: {} ({:?})", name, params);

    let recommendations = match params.k {
        Some(k) => state.finder.recommend(&name, k),
        None => state.finder.get_recommendations(&name),
    };

    Ok(Json(RecommendationsResponse {
        recipe: name,
        recommendations,
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        recipes: state.finder.catalog().len(),
    }))
}
