use clap::Parser;
use recetario::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    CatalogStore, Error, RecipeFinder, Result,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recetario=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::from_env()?;
    if let Some(path) = cli.catalog {
        settings.catalog.path = path.into();
    }
    settings.validate()?;

    // The catalog is loaded once; a bad source stops here
    let catalog = Arc::new(CatalogStore::load(&settings.catalog.path)?);

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, catalog, port, host).await?;
        }
        Commands::Search {
            ingredients,
            restrictions,
            limit,
            recommend,
            link,
        } => {
            let finder = build_finder(&settings, catalog);
            let limit = limit.unwrap_or(settings.search.max_results);
            commands::search(
                &finder,
                &ingredients,
                &restrictions.into(),
                limit,
                recommend,
                link,
            )?;
        }
        Commands::Recommend { name, k } => {
            let finder = build_finder(&settings, catalog);
            commands::recommend(&finder, &name, k)?;
        }
        Commands::Check => {
            commands::check(&catalog)?;
        }
    }

    Ok(())
}

fn build_finder(settings: &Settings, catalog: Arc<CatalogStore>) -> RecipeFinder {
    RecipeFinder::from_catalog(catalog)
        .with_max_results(settings.search.max_results)
        .with_recommendations(settings.search.recommendations)
}

async fn serve(
    mut settings: Settings,
    catalog: Arc<CatalogStore>,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting Recetario server");
    info!("Catalog: {:?} ({} recipes)", settings.catalog.path, catalog.len());

    let finder = Arc::new(build_finder(&settings, catalog));
    let state = AppState {
        finder,
        settings: settings.clone(),
    };
    let app = routes::create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Recetario");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("\nAPI Endpoints:");
    println!("  POST /api/search");
    println!("  GET  /api/recipes/:name");
    println!("  GET  /api/recipes/:name/recommendations");
    println!("  GET  /health");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
