use crate::catalog::recipe::{parse_flag, Attribute, Category, Recipe};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns the catalog source must provide
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "nombre",
    "categoria",
    "ingredientes",
    "carne",
    "gluten",
    "lacteos",
    "azucar",
];

/// In-memory recipe table. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Load the catalog from a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = std::fs::File::open(path).map_err(|e| {
            Error::DataLoad(format!("Failed to open catalog {}: {e}", path.display()))
        })?;

        let store = Self::from_reader(file)?;
        info!("Loaded {} recipes from {:?}", store.len(), path);

        Ok(store)
    }

    /// Load the catalog from any CSV source
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| Error::DataLoad(format!("Failed to read catalog headers: {e}")))?
            .clone();

        let mut columns = HashMap::new();
        for name in REQUIRED_COLUMNS {
            let position = headers.iter().position(|h| h == name).ok_or_else(|| {
                Error::DataLoad(format!(
                    "Missing required column '{name}' (found: {})",
                    headers.iter().collect::<Vec<_>>().join(", ")
                ))
            })?;
            columns.insert(name, position);
        }

        let mut recipes = Vec::new();
        for (i, record) in reader.records().enumerate() {
            // Header is line 1
            let line = i + 2;
            let record =
                record.map_err(|e| Error::DataLoad(format!("Malformed row at line {line}: {e}")))?;
            let cell = |name: &str| record.get(columns[name]).unwrap_or("");

            let name = cell("nombre").trim();
            if name.is_empty() {
                return Err(Error::DataLoad(format!(
                    "Empty recipe name at line {line}"
                )));
            }

            let category: Category = cell("categoria").trim().parse().map_err(|_| {
                Error::DataLoad(format!(
                    "Unknown category '{}' at line {line}",
                    cell("categoria")
                ))
            })?;

            let mut flags = [false; 4];
            for (slot, attribute) in flags.iter_mut().zip(Attribute::ALL) {
                let column = attribute.column();
                *slot = parse_flag(cell(column)).ok_or_else(|| {
                    Error::DataLoad(format!(
                        "Column '{column}' at line {line} is not a boolean: '{}'",
                        cell(column)
                    ))
                })?;
            }

            recipes.push(Recipe::new(name, category, cell("ingredientes"), flags));
        }

        debug!("Parsed {} catalog rows", recipes.len());
        Self::from_recipes(recipes)
    }

    /// Build a catalog from recipe values. Names must be unique.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let mut index = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if index.insert(recipe.name.clone(), position).is_some() {
                return Err(Error::DataLoad(format!(
                    "Duplicate recipe name: {}",
                    recipe.name
                )));
            }
        }

        Ok(Self { recipes, index })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Row index of a recipe by exact name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.position(name).map(|i| &self.recipes[i])
    }

    /// Number of recipes per category, in category order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.recipes.iter().filter(|r| r.category == c).count()))
            .collect()
    }

    /// Distinct normalized ingredient terms across the catalog, sorted
    pub fn ingredient_vocabulary(&self) -> Vec<String> {
        let terms: HashSet<&String> = self.recipes.iter().flat_map(|r| r.terms()).collect();
        let mut terms: Vec<String> = terms.into_iter().cloned().collect();
        terms.sort();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
nombre,categoria,ingredientes,carne,gluten,lacteos,azucar
Tortilla,principal,\"huevo, cebolla, papa\",FALSE,FALSE,FALSE,FALSE
Flan,postre,\"leche, huevo, azucar\",False,false,TRUE,True
";

    #[test]
    fn test_from_reader() {
        let store = CatalogStore::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(store.len(), 2);
        let flan = store.get("Flan").unwrap();
        assert_eq!(flan.category, Category::Postre);
        assert!(flan.dairy && flan.sugar && !flan.meat);
        assert_eq!(flan.terms(), &["leche", "huevo", "azucar"]);
        assert_eq!(store.position("Tortilla"), Some(0));
        assert!(store.get("flan").is_none());
    }

    #[test]
    fn test_columns_in_any_order() {
        let csv = "azucar,lacteos,gluten,carne,ingredientes,categoria,nombre,notas\n\
                   1,0,0,0,\"fruta, yogur\",saludable,Bowl,rapido\n";
        let store = CatalogStore::from_reader(csv.as_bytes()).unwrap();

        let bowl = store.get("Bowl").unwrap();
        assert!(bowl.sugar);
        assert!(!bowl.dairy);
        assert_eq!(bowl.category, Category::Saludable);
    }

    #[test]
    fn test_missing_column() {
        let csv = "nombre,categoria,ingredientes,carne,gluten,lacteos\nA,postre,x,0,0,0\n";
        let err = CatalogStore::from_reader(csv.as_bytes()).unwrap_err();

        assert!(err.is_data_load());
        assert!(err.to_string().contains("azucar"));
    }

    #[test]
    fn test_non_boolean_flag_fails() {
        let csv = "nombre,categoria,ingredientes,carne,gluten,lacteos,azucar\n\
                   A,postre,x,quizas,0,0,0\n";
        let err = CatalogStore::from_reader(csv.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("carne"));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_unknown_category_fails() {
        let csv = "nombre,categoria,ingredientes,carne,gluten,lacteos,azucar\n\
                   A,entrada,x,0,0,0,0\n";
        assert!(CatalogStore::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_duplicate_name_fails() {
        let csv = "nombre,categoria,ingredientes,carne,gluten,lacteos,azucar\n\
                   A,postre,x,0,0,0,0\n\
                   A,principal,y,1,0,0,0\n";
        let err = CatalogStore::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_header_only_is_empty_catalog() {
        let csv = "nombre,categoria,ingredientes,carne,gluten,lacteos,azucar\n";
        let store = CatalogStore::from_reader(csv.as_bytes()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogStore::load(dir.path().join("nope.csv")).unwrap_err();
        assert!(err.is_data_load());
    }

    #[test]
    fn test_summaries() {
        let store = CatalogStore::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            store.category_counts(),
            vec![
                (Category::Principal, 1),
                (Category::Postre, 1),
                (Category::Saludable, 0)
            ]
        );
        assert_eq!(
            store.ingredient_vocabulary(),
            vec!["azucar", "cebolla", "huevo", "leche", "papa"]
        );
    }
}
