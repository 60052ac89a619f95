// Command-line interface

pub mod commands;

use crate::catalog::recipe::parse_flag;
use crate::catalog::Category;
use crate::search::Preferences;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "recetario")]
#[command(about = "Recetario - find recipes for the ingredients you have", long_about = None)]
pub struct Cli {
    /// Recipe catalog (CSV)
    #[arg(long, global = true, env = "CATALOG_PATH")]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Find recipes for a comma-separated list of ingredients
    Search {
        /// Available ingredients, e.g. "huevo, harina, leche"
        ingredients: String,

        #[command(flatten)]
        restrictions: RestrictionArgs,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also show recipes similar to the best match
        #[arg(short, long)]
        recommend: bool,

        /// Print a web search link for the best match
        #[arg(long)]
        link: bool,
    },

    /// Show recipes similar to a given recipe
    Recommend {
        /// Recipe name (exact)
        name: String,

        /// Number of recommendations
        #[arg(short)]
        k: Option<usize>,
    },

    /// Load the catalog and print a summary
    Check,
}

/// Dietary restrictions; omitted flags do not filter
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RestrictionArgs {
    /// Contains meat (si/no)
    #[arg(long, value_parser = parse_yes_no)]
    pub meat: Option<bool>,

    /// Contains gluten (si/no)
    #[arg(long, value_parser = parse_yes_no)]
    pub gluten: Option<bool>,

    /// Contains dairy (si/no)
    #[arg(long, value_parser = parse_yes_no)]
    pub dairy: Option<bool>,

    /// Contains sugar (si/no)
    #[arg(long, value_parser = parse_yes_no)]
    pub sugar: Option<bool>,

    /// Category: principal, postre or saludable
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,
}

impl From<RestrictionArgs> for Preferences {
    fn from(args: RestrictionArgs) -> Self {
        Preferences {
            meat: args.meat,
            gluten: args.gluten,
            dairy: args.dairy,
            sugar: args.sugar,
            category: args.category,
        }
    }
}

fn parse_yes_no(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "s" => Ok(true),
        "n" => Ok(false),
        other => parse_flag(other).ok_or_else(|| format!("expected si or no, got '{value}'")),
    }
}

fn parse_category(value: &str) -> Result<Category, String> {
    value
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|e: crate::Error| e.to_string())
}
