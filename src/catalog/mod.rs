// Recipe catalog: CSV loading and the in-memory recipe table

pub mod recipe;
pub mod store;

// Re-exports
pub use recipe::{Attribute, Category, Recipe};
pub use store::CatalogStore;
