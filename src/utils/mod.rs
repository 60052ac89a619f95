// Utility functions

const SEARCH_BASE_URL: &str = "https://www.google.com/search?q=";

/// Build a web search link for a recipe's full instructions.
/// Formatting only; nothing is fetched.
pub fn web_search_url(recipe_name: &str) -> String {
    let query = format!("Receta completa {recipe_name} instrucciones paso a paso");
    // Form encoding: spaces become '+'
    let encoded = urlencoding::encode(&query).replace("%20", "+");
    format!("{SEARCH_BASE_URL}{encoded}")
}

/// Parse a comma-separated ingredient list, lower-cased and trimmed
pub fn parse_ingredient_list(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
