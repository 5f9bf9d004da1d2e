//! Store settings loaded via OrthoConfig.
//!
//! Sources, lowest precedence first: defaults, `EMPLOYEES_*` environment
//! variables, then command-line flags.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::persistence::StoreConfig;

/// Environment variable naming the MongoDB connection string.
pub const MONGO_URI_ENV: &str = "EMPLOYEES_MONGO_URI";

/// Raised when a required setting is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{variable} must be set to a MongoDB connection string")]
pub struct MissingSetting {
    variable: &'static str,
}

/// Configuration values controlling the store connection.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEES")]
pub struct StoreSettings {
    /// MongoDB connection string, for example `mongodb://localhost:27017`.
    ///
    /// Defaults to empty, which [`StoreSettings::mongo_uri`] reports as unset.
    #[ortho_config(default = String::new())]
    pub mongo_uri: Option<String>,
}

impl StoreSettings {
    /// Return the connection string, rejecting absent or blank values.
    ///
    /// # Examples
    /// ```
    /// use employees::settings::StoreSettings;
    ///
    /// let settings = StoreSettings { mongo_uri: None };
    /// assert!(settings.mongo_uri().is_err());
    /// ```
    pub fn mongo_uri(&self) -> Result<&str, MissingSetting> {
        self.mongo_uri
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
            .ok_or(MissingSetting {
                variable: MONGO_URI_ENV,
            })
    }

    /// Build the store configuration with the fixed database, collection and
    /// time budgets.
    pub fn store_config(&self) -> Result<StoreConfig, MissingSetting> {
        self.mongo_uri().map(StoreConfig::new)
    }
}
