//! Employee records service library.
//!
//! Layout follows ports and adapters:
//!
//! - [`domain`]: records, validation, the envelope and the handler set
//! - [`inbound`]: actix-web routes, health checks and OpenAPI schemas
//! - [`outbound`]: MongoDB and in-memory repositories
//! - [`middleware`]: request tracing
//! - [`settings`]: environment and CLI configuration

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use middleware::Trace;
