//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed and in-memory employee repositories
//!
//! Adapters are thin translators between domain types and store-specific
//! representations. They contain no business logic.

pub mod persistence;
