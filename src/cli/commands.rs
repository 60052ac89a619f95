use crate::catalog::CatalogStore;
use crate::pipeline::RecipeFinder;
use crate::search::{Preferences, RankedRecipe};
use crate::utils::{parse_ingredient_list, web_search_url};
use crate::{Error, Result};
use tracing::info;

/// Find recipes for the given ingredients and print them
pub fn search(
    finder: &RecipeFinder,
    ingredients: &str,
    preferences: &Preferences,
    limit: usize,
    recommend: bool,
    link: bool,
) -> Result<()> {
    let ingredients = parse_ingredient_list(ingredients);
    if ingredients.is_empty() {
        return Err(Error::InvalidInput(
            "Enter at least one ingredient (comma-separated)".to_string(),
        ));
    }

    info!(
        "Searching with {} ingredients and {} restrictions",
        ingredients.len(),
        preferences.active_count()
    );

    let results = finder.find_recipes(&ingredients, preferences)?;
    if results.is_empty() {
        println!("\x1b[33m\u{2717}\x1b[0m No recipes match all the requirements.");
        return Ok(());
    }

    println!(
        "\x1b[32m\u{2713}\x1b[0m Found {} recipes, ranked by relevance:\n",
        results.len()
    );
    print_results(&results[..results.len().min(limit)]);

    let best = &results[0].name;
    println!("\nBest match: {best}");

    if link {
        println!("Instructions: {}", web_search_url(best));
    }

    if recommend {
        print_recommendations(best, &finder.get_recommendations(best));
    }

    Ok(())
}

/// Print recipes similar to `name`
pub fn recommend(finder: &RecipeFinder, name: &str, k: Option<usize>) -> Result<()> {
    let names = match k {
        Some(k) => finder.recommend(name, k),
        None => finder.get_recommendations(name),
    };

    if names.is_empty() && finder.catalog().get(name).is_none() {
        return Err(Error::NotFound(format!("Recipe '{name}' is not in the catalog")));
    }

    print_recommendations(name, &names);
    Ok(())
}

/// Print a summary of the loaded catalog
pub fn check(catalog: &CatalogStore) -> Result<()> {
    println!("\x1b[32m\u{2713}\x1b[0m Catalog loaded: {} recipes", catalog.len());

    for (category, count) in catalog.category_counts() {
        println!("  {category:<10} {count}");
    }
    println!("  {} distinct ingredients", catalog.ingredient_vocabulary().len());

    Ok(())
}

fn print_results(results: &[RankedRecipe]) {
    let width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Recipe".len());

    println!("  {:<width$}  {:<10}  Score", "Recipe", "Category");
    for result in results {
        println!(
            "  {:<width$}  {:<10}  {:.4}",
            result.name,
            result.category.as_str(),
            result.relevance_score
        );
    }
}

fn print_recommendations(name: &str, names: &[String]) {
    if names.is_empty() {
        println!("No similar recipes found for '{name}'.");
    } else {
        println!("Similar to '{name}': {}", names.join(", "));
    }
}
