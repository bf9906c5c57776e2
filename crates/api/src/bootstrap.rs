use anyhow::{Context, Result};
use infra::{db, MemoryStore, PgStore, Seed, Services};

use crate::config::{AppConfig, StorageBackend};

/// Process start-up hook: opens the configured content store (running
/// migrations for Postgres) and returns the data services for the resolvers.
pub async fn bootstrap(config: &AppConfig) -> Result<Services> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when STORAGE_BACKEND=postgres")?;

            let pool = db::connect(database_url, config.database_max_connections).await?;
            tracing::info!(
                "Connected to Postgres with max {} connections",
                config.database_max_connections
            );

            if config.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                db::migrate(&pool).await?;
                tracing::info!("Database migrations completed successfully");
            }

            Ok(Services::from_store(PgStore::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using the in-memory content store; nothing is persisted");

            let store = match config.memory_seed_path.as_deref() {
                Some(path) => MemoryStore::from_seed(load_seed(path).await?),
                None => {
                    tracing::warn!("MEMORY_SEED_PATH is not set; the content store starts empty");
                    MemoryStore::new()
                }
            };
            Ok(Services::from_store(store))
        }
    }
}

async fn load_seed(path: &str) -> Result<Seed> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read MEMORY_SEED_PATH '{path}'"))?;
    let seed: Seed = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid content seed in '{path}'"))?;

    tracing::info!(
        writers = seed.writers.len(),
        articles = seed.articles.len(),
        "Loaded content seed from {path}"
    );
    Ok(seed)
}
