use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recipe category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Principal,
    Postre,
    Saludable,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Principal, Category::Postre, Category::Saludable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Principal => "principal",
            Category::Postre => "postre",
            Category::Saludable => "saludable",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// Exact match: "Postre" is not a category.
impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Unknown category: {s}. Must be principal, postre, or saludable"
                ))
            })
    }
}

/// Boolean attributes a preference set can restrict on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Meat,
    Gluten,
    Dairy,
    Sugar,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Meat,
        Attribute::Gluten,
        Attribute::Dairy,
        Attribute::Sugar,
    ];

    /// Column name in the catalog source
    pub fn column(&self) -> &'static str {
        match self {
            Attribute::Meat => "carne",
            Attribute::Gluten => "gluten",
            Attribute::Dairy => "lacteos",
            Attribute::Sugar => "azucar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub category: Category,
    /// Comma-separated ingredient text as it appears in the source
    pub ingredients: String,
    pub meat: bool,
    pub gluten: bool,
    pub dairy: bool,
    pub sugar: bool,
    #[serde(skip)]
    terms: Vec<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        ingredients: impl Into<String>,
        flags: [bool; 4],
    ) -> Self {
        let ingredients = ingredients.into();
        let terms = split_ingredients(&ingredients);
        let [meat, gluten, dairy, sugar] = flags;

        Self {
            name: name.into(),
            category,
            ingredients,
            meat,
            gluten,
            dairy,
            sugar,
            terms,
        }
    }

    /// Trimmed, lower-cased ingredient terms in source order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn attribute(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Meat => self.meat,
            Attribute::Gluten => self.gluten,
            Attribute::Dairy => self.dairy,
            Attribute::Sugar => self.sugar,
        }
    }
}

/// Normalize a single ingredient term for exact comparison
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Split comma-separated ingredient text into normalized terms, dropping empties
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(normalize_term)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Coerce a catalog cell into a boolean
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "si" | "sí" | "verdadero" => Some(true),
        "false" | "0" | "no" | "falso" => Some(false),
        _ => None,
    }
}
