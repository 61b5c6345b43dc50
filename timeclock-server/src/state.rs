//! Application state for timeclock-server

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::db::{
    EmployeesStore, MemoryEmployeesStore, MemoryTimeEntriesStore, PgEmployeesStore,
    PgTimeEntriesStore, TimeEntriesStore,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// The stores are held behind their capability traits so the same
/// router runs against PostgreSQL or the in-memory stores.
#[derive(Clone)]
pub struct AppState {
    /// Employee persistence
    pub employees: Arc<dyn EmployeesStore>,
    /// Time entry persistence
    pub time_entries: Arc<dyn TimeEntriesStore>,
}

impl AppState {
    /// Connect to PostgreSQL, run migrations, and build the state
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::postgres(pool))
    }

    /// State backed by PostgreSQL stores sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            employees: Arc::new(PgEmployeesStore::new(pool.clone())),
            time_entries: Arc::new(PgTimeEntriesStore::new(pool)),
        }
    }

    /// State backed by in-memory stores (tests, database-free runs)
    pub fn in_memory() -> Self {
        Self {
            employees: Arc::new(MemoryEmployeesStore::default()),
            time_entries: Arc::new(MemoryTimeEntriesStore::default()),
        }
    }
}
