use diesel::result;
use diesel::{ConnectionError, ConnectionResult, SqliteConnection};
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use std::future::Future;
use std::pin::Pin;

/// Async-capable SQLite connection used by every repository.
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

/// Pooled connection handed out by [`Database::get_connection`].
pub type PooledConnection = Object<DbConnection>;

const CREATE_TABLES: &str =
    include_str!("../../migrations/00000000000001_create_kiosk_tables/up.sql");

const IN_MEMORY: &str = ":memory:";

/// Run on every pooled connection as it is opened; SQLite scopes each of
/// these settings to a single connection.
const CONNECTION_PRAGMAS: &str = "PRAGMA busy_timeout = 5000; \
     PRAGMA journal_mode = WAL; \
     PRAGMA foreign_keys = ON;";

type SetupFuture<'a> = Pin<Box<dyn Future<Output = ConnectionResult<DbConnection>> + Send + 'a>>;

fn establish_connection(database_url: &str) -> SetupFuture<'_> {
    Box::pin(async move {
        let mut conn = DbConnection::establish(database_url).await?;
        conn.batch_execute(CONNECTION_PRAGMAS).await.map_err(|e| {
            tracing::error!("Failed to configure SQLite connection: {}", e);
            ConnectionError::BadConnection(e.to_string())
        })?;
        Ok(conn)
    })
}

/// Handle to the connection pool. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct Database {
    pool: Pool<DbConnection>,
}

impl Database {
    /// Builds the pool without opening a connection.
    ///
    /// An in-memory database only exists inside the connection that created
    /// it, so `:memory:` always gets a single-connection pool.
    pub fn connect(database_url: &str, max_connections: usize) -> Result<Self, result::Error> {
        let max_size = if database_url == IN_MEMORY {
            1
        } else {
            max_connections.max(1)
        };

        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(establish_connection);

        let manager =
            AsyncDieselConnectionManager::<DbConnection>::new_with_config(database_url, manager_config);
        let pool = Pool::builder(manager)
            .max_size(max_size)
            .build()
            .map_err(|e| {
                result::Error::DatabaseError(
                    result::DatabaseErrorKind::UnableToSendCommand,
                    Box::new(e.to_string()),
                )
            })?;

        tracing::info!(database_url, max_size, "DB connection pool created");

        Ok(Database { pool })
    }

    /// Fresh private database with the schema applied. Used by tests and tooling.
    pub async fn in_memory() -> Result<Self, result::Error> {
        let db = Database::connect(IN_MEMORY, 1)?;
        db.run_migrations().await?;
        Ok(db)
    }

    pub async fn get_connection(&self) -> Result<PooledConnection, result::Error> {
        self.pool.get().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }

    /// Creates the kiosk tables if they are missing.
    pub async fn run_migrations(&self) -> Result<(), result::Error> {
        let mut conn = self.get_connection().await?;

        conn.batch_execute(CREATE_TABLES).await?;

        tracing::info!("Database schema is up to date");

        Ok(())
    }
}
