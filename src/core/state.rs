use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;

/// Server state - shared by every request handler
///
/// Holds the immutable configuration and the SQLite pool. Cloning is
/// shallow; the pool is the process-wide store handle injected into the
/// router, never a module-level global.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Initialize the server state: open the database and run migrations
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db_service = DbService::new(&config.database_path).await?;

        Ok(Self {
            config: config.clone(),
            pool: db_service.pool,
        })
    }
}
