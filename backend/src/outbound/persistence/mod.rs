//! Document store persistence adapters.
//!
//! This module provides concrete implementations of the employee repository
//! port:
//!
//! - **MongoDB**: [`MongoEmployeeRepository`] over a collection reached
//!   through a shared [`StoreClient`].
//! - **In-memory**: [`InMemoryEmployeeRepository`] with the same observable
//!   contract and no I/O.
//!
//! Adapters only translate between store documents and domain types. BSON
//! documents (`employee_document.rs`) are internal and never exposed to the
//! domain.
//!
//! # Example
//!
//! ```ignore
//! use employees::outbound::persistence::{MongoEmployeeRepository, StoreClient, StoreConfig};
//!
//! let client = StoreClient::connect(StoreConfig::new("mongodb://localhost:27017")).await?;
//! let repo = MongoEmployeeRepository::new(&client);
//! ```

mod employee_document;
mod in_memory_employee_repository;
mod mongo_employee_repository;
mod store_client;

pub use in_memory_employee_repository::InMemoryEmployeeRepository;
pub use mongo_employee_repository::MongoEmployeeRepository;
pub use store_client::{
    DEFAULT_COLLECTION, DEFAULT_CONNECT_TIMEOUT, DEFAULT_DATABASE, DEFAULT_OPERATION_TIMEOUT,
    StoreClient, StoreClientError, StoreConfig,
};
