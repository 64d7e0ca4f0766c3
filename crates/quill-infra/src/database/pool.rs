use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the database pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Require TLS on the database connection.
    pub ssl: bool,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// The connection string handed to the driver.
    ///
    /// With `ssl` on, `sslmode=require` is appended unless the URL already
    /// names an sslmode. The server certificate is not verified.
    pub fn connection_url(&self) -> String {
        if !self.ssl || self.url.contains("sslmode=") {
            return self.url.clone();
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}sslmode=require", self.url, separator)
    }
}

/// Process-wide database handle.
///
/// Built once at startup; repositories share the same connection through
/// [`DbPool::shared`]. Closed explicitly on shutdown so the pool drains
/// before the process exits.
#[derive(Clone)]
pub struct DbPool {
    conn: Arc<DbConn>,
}

impl DbPool {
    /// Open the pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database pool...");

        let opts = ConnectOptions::new(config.connection_url())
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(
            ssl = config.ssl,
            "Database connected (pool: {}..{})",
            config.min_connections,
            config.max_connections
        );

        Ok(Self::from_conn(conn))
    }

    /// Wrap an existing connection, e.g. a mock one in tests.
    pub fn from_conn(conn: DbConn) -> Self {
        Self {
            conn: Arc::new(conn),
        }
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// A handle on the same connection for a repository.
    pub fn shared(&self) -> Arc<DbConn> {
        Arc::clone(&self.conn)
    }

    /// Whether the database answers a round trip.
    pub async fn is_healthy(&self) -> bool {
        match self.conn.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        }
    }

    /// Close every pooled connection. Repositories holding a handle see a
    /// closed pool afterwards.
    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing database pool");
        self.conn.close_by_ref().await
    }
}
