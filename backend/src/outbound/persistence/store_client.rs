//! Long-lived MongoDB client handle shared by repository adapters.
//!
//! The driver's `Client` owns a connection pool and is safe to share across
//! workers, so one `StoreClient` is built at startup and cloned into every
//! adapter that needs it.
//!
//! # Design
//!
//! - Construction pings the target database; an unreachable store fails
//!   startup instead of surfacing on the first request
//! - Database, collection and time budgets are fixed defaults that tests can
//!   override through the builder
//! - All errors are mapped to [`StoreClientError`] variants

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::info;

use super::employee_document::EmployeeDocument;

/// Logical database holding the employee collection.
pub const DEFAULT_DATABASE: &str = "test";
/// Collection storing employee documents.
pub const DEFAULT_COLLECTION: &str = "test";
/// Budget applied to every store operation.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);
/// Budget for establishing and verifying the initial connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while establishing the store connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreClientError {
    /// The connection string was rejected or the client could not be built.
    #[error("failed to build document store client: {message}")]
    Build { message: String },

    /// The database did not answer the initial ping.
    #[error("document store ping failed: {message}")]
    Ping { message: String },

    /// The initial ping did not complete within the connect budget.
    #[error("document store did not answer within {budget_ms} ms")]
    Timeout { budget_ms: u64 },

    /// An administrative command such as a collection drop failed.
    #[error("document store command failed: {message}")]
    Command { message: String },
}

impl StoreClientError {
    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Create a ping error with the given message.
    pub fn ping(message: impl Into<String>) -> Self {
        Self::Ping {
            message: message.into(),
        }
    }
}

/// Configuration for the document store connection.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use employees::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017")
///     .with_database("hr")
///     .with_operation_timeout(Duration::from_secs(2));
/// assert_eq!(config.database(), "hr");
/// assert_eq!(config.collection(), "test");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database: String,
    collection: String,
    operation_timeout: Duration,
    connect_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration for the given connection string.
    ///
    /// Defaults:
    /// - `database` and `collection`: `test`
    /// - `operation_timeout`: 10 seconds
    /// - `connect_timeout`: 10 seconds
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Use a different database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Use a different collection.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the per-operation time budget.
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Set the budget for the initial connect and ping.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Connection string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Per-operation time budget.
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }
}

/// Connected document store handle.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    config: StoreConfig,
}

impl StoreClient {
    /// Build a client and verify the database answers a ping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClientError`] when the connection string is invalid,
    /// the ping fails, or the ping exceeds the connect budget.
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreClientError> {
        let client = Client::with_uri_str(config.uri())
            .await
            .map_err(|err| StoreClientError::build(err.to_string()))?;

        let database = client.database(config.database());
        let ping = database.run_command(doc! { "ping": 1 }).into_future();
        tokio::time::timeout(config.connect_timeout, ping)
            .await
            .map_err(|_| StoreClientError::Timeout {
                budget_ms: millis(config.connect_timeout),
            })?
            .map_err(|err| StoreClientError::ping(err.to_string()))?;

        info!(
            database = config.database(),
            collection = config.collection(),
            "connected to document store"
        );
        Ok(Self { client, config })
    }

    /// Build a client without contacting the server.
    #[cfg(test)]
    pub(crate) async fn unverified(config: StoreConfig) -> Result<Self, StoreClientError> {
        let client = Client::with_uri_str(config.uri())
            .await
            .map_err(|err| StoreClientError::build(err.to_string()))?;
        Ok(Self { client, config })
    }

    /// Typed handle on the employee collection.
    pub(crate) fn employees(&self) -> Collection<EmployeeDocument> {
        self.client
            .database(self.config.database())
            .collection(self.config.collection())
    }

    /// Drop the employee collection and every document in it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClientError::Command`] when the server rejects the drop.
    pub async fn drop_collection(&self) -> Result<(), StoreClientError> {
        self.employees()
            .drop()
            .await
            .map_err(|err| StoreClientError::Command {
                message: err.to_string(),
            })
    }

    /// Configuration used to build this client.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Non-routable address with a server selection window far beyond any test
/// budget, so only the local timeout can end a call.
#[cfg(test)]
pub(crate) const UNREACHABLE_URI: &str =
    "mongodb://10.255.255.1:27017/?serverSelectionTimeoutMS=30000&connectTimeoutMS=30000";
