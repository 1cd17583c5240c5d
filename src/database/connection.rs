use anyhow::Result;
use sqlx::{
    migrate::MigrateDatabase,
    postgres::PgPoolOptions,
    sqlite::SqlitePoolOptions,
    PgPool, Sqlite, SqlitePool,
};
use std::path::Path;
use tracing::info;

const MAX_CONNECTIONS: u32 = 5;

/// Connection pool for whichever backend holds the FAQ table.
#[derive(Clone, Debug)]
pub enum FaqPool {
    Sqlite(SqlitePool),
    Postgres(PgPool),
}

#[derive(Clone, Debug)]
pub struct DatabaseManager {
    pub pool: FaqPool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str) -> Result<Self> {
        if database_url.starts_with("postgres:") || database_url.starts_with("postgresql:") {
            let pool = PgPoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect(database_url)
                .await?;
            return Ok(Self { pool: FaqPool::Postgres(pool) });
        }

        ensure_sqlite_parent_dir(database_url)?;

        // Create database if it doesn't exist
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            info!("Creating database {}", database_url);
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        Ok(Self { pool: FaqPool::Sqlite(pool) })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        info!("Running database migrations on {}", self.backend());
        match &self.pool {
            FaqPool::Sqlite(pool) => sqlx::migrate!("./migrations").run(pool).await?,
            FaqPool::Postgres(pool) => sqlx::migrate!("./migrations").run(pool).await?,
        }
        Ok(())
    }

    pub fn backend(&self) -> &'static str {
        match &self.pool {
            FaqPool::Sqlite(_) => "sqlite",
            FaqPool::Postgres(_) => "postgres",
        }
    }

    pub fn pool_size(&self) -> u32 {
        match &self.pool {
            FaqPool::Sqlite(pool) => pool.size(),
            FaqPool::Postgres(pool) => pool.size(),
        }
    }

    /// Round-trips a trivial query to prove the store is reachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match &self.pool {
            FaqPool::Sqlite(pool) => {
                sqlx::query("SELECT 1").fetch_one(pool).await?;
            }
            FaqPool::Postgres(pool) => {
                sqlx::query("SELECT 1").fetch_one(pool).await?;
            }
        }
        Ok(())
    }

    pub async fn close(&self) {
        match &self.pool {
            FaqPool::Sqlite(pool) => pool.close().await,
            FaqPool::Postgres(pool) => pool.close().await,
        }
    }
}

fn ensure_sqlite_parent_dir(database_url: &str) -> Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating directory {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
