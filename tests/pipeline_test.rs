use recetario::{CatalogStore, Category, Error, Preferences, RecipeFinder};
use std::sync::Arc;

fn fixture_finder() -> RecipeFinder {
    let catalog = CatalogStore::load("tests/fixtures/recipes.csv").unwrap();
    RecipeFinder::from_catalog(Arc::new(catalog))
}

fn names(results: &[recetario::RankedRecipe]) -> Vec<&str> {
    results.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_two_recipe_scenario() {
    let csv = "nombre,categoria,ingredientes,carne,gluten,lacteos,azucar\n\
               Tortilla,principal,\"huevo, cebolla\",false,false,false,false\n\
               Flan,postre,\"leche, huevo, azucar\",false,false,true,true\n";
    let catalog = CatalogStore::from_reader(csv.as_bytes()).unwrap();
    let finder = RecipeFinder::from_catalog(Arc::new(catalog));

    let results = finder
        .find_recipes(&["huevo", "leche"], &Preferences::default())
        .unwrap();

    assert_eq!(names(&results), vec!["Flan", "Tortilla"]);
    assert_eq!(results[0].category, Category::Postre);
}

#[test]
fn test_ties_keep_catalog_order() {
    let results = fixture_finder()
        .find_recipes(&["huevo", "leche"], &Preferences::default())
        .unwrap();

    // Flan and Panqueques score the same; Flan comes first in the catalog
    assert_eq!(names(&results), vec!["Flan", "Panqueques", "Tortilla"]);
    assert_eq!(results[0].relevance_score, results[1].relevance_score);
    assert!(results
        .windows(2)
        .all(|w| w[0].relevance_score >= w[1].relevance_score));
    assert!(results
        .iter()
        .all(|r| (0.0..=1.0).contains(&r.relevance_score)));
}

#[test]
fn test_meat_restriction_without_meat_recipes() {
    let prefs = Preferences {
        meat: Some(true),
        ..Default::default()
    };

    let results = fixture_finder().find_recipes(&["huevo", "leche"], &prefs).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_category_and_flags() {
    let prefs = Preferences {
        gluten: Some(false),
        category: Some(Category::Postre),
        ..Default::default()
    };

    let results = fixture_finder()
        .find_recipes(&["huevo", "cebolla"], &prefs)
        .unwrap();
    assert_eq!(names(&results), vec!["Flan"]);
}

#[test]
fn test_no_ingredients() {
    let empty: Vec<String> = Vec::new();
    let err = fixture_finder()
        .find_recipes(&empty, &Preferences::default())
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_recommendations() {
    let finder = fixture_finder();

    let names = finder.recommend("Flan", 3);
    assert!(!names.is_empty() && names.len() <= 3);
    assert!(!names.iter().any(|n| n == "Flan"));

    assert!(finder.get_recommendations("Unknown Dish").is_empty());
}

#[test]
fn test_search_flow() {
    let finder = fixture_finder().with_max_results(2);
    let outcome = finder
        .search(&["cebolla", "tomate"], &Preferences::default())
        .unwrap();

    assert_eq!(outcome.results.len(), 2);
    assert_eq!(outcome.best.as_deref(), Some("Ensalada"));
    assert!(!outcome.recommendations.contains(&"Ensalada".to_string()));
}

#[test]
fn test_rank_twice_is_identical() {
    let finder = fixture_finder();
    let prefs = Preferences::default();

    let first = finder.find_recipes(&["harina", "huevo", "tomate"], &prefs).unwrap();
    let second = finder.find_recipes(&["harina", "huevo", "tomate"], &prefs).unwrap();
    assert_eq!(first, second);
}
