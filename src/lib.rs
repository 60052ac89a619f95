pub mod config;
pub mod error;

// Core pipeline
pub mod catalog;
pub mod pipeline;
pub mod recommender;
pub mod search;

// HTTP surface
pub mod api;

// CLI
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use catalog::{CatalogStore, Category, Recipe};
pub use config::Settings;
pub use error::{Error, Result};
pub use pipeline::{RecipeFinder, SearchOutcome};
pub use search::{Preferences, RankedRecipe};
