//! Driven port for employee persistence.
//!
//! The handler set talks to the document store only through this trait, so
//! the MongoDB adapter and the in-memory adapter are interchangeable. The
//! MongoDB adapter bounds each call by its operation budget and reports
//! overruns as [`EmployeeRepositoryError::Timeout`]; the in-memory adapter
//! never blocks and never times out.

use async_trait::async_trait;

use crate::domain::{EmployeeDraft, EmployeeId, EmployeeRecord};

use super::define_port_error;

define_port_error! {
    /// Failures raised by employee store adapters.
    pub enum EmployeeRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "employee store connection failed: {message}",
        /// A query or mutation was rejected by the store.
        Query { message: String } => "employee store query failed: {message}",
        /// A stored document could not be converted into a record.
        Decode { message: String } => "employee document could not be decoded: {message}",
        /// No document matched the identifier.
        NotFound { id: String } => "no employee matches id {id}",
        /// The operation exceeded its time budget.
        Timeout { operation: String, budget_ms: u64 } =>
            "employee store {operation} exceeded its {budget_ms} ms budget",
    }
}

/// CRUD operations against the employee collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a new employee under a freshly generated identifier.
    async fn insert(&self, draft: &EmployeeDraft) -> Result<EmployeeId, EmployeeRepositoryError>;

    /// Return every stored employee. Ordering is unspecified.
    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeeRepositoryError>;

    /// Fetch exactly one employee.
    ///
    /// Absence is an error ([`EmployeeRepositoryError::NotFound`]), never an
    /// empty value.
    async fn find_one(&self, id: &EmployeeId) -> Result<EmployeeRecord, EmployeeRepositoryError>;

    /// Replace the four business fields of the matching employee and return
    /// how many documents matched.
    async fn update(
        &self,
        id: &EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<u64, EmployeeRepositoryError>;

    /// Remove the matching employee and return how many were deleted.
    async fn delete(&self, id: &EmployeeId) -> Result<u64, EmployeeRepositoryError>;
}
