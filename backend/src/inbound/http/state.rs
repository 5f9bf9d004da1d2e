//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain handler set and remain testable without I/O.

use std::sync::Arc;

use crate::domain::EmployeeHandlers;
use crate::domain::ports::EmployeeRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: EmployeeHandlers,
}

impl HttpState {
    /// Construct state over the given employee store adapter.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employees::inbound::http::state::HttpState;
    /// use employees::outbound::persistence::InMemoryEmployeeRepository;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryEmployeeRepository::new()));
    /// let _employees = state.employees.clone();
    /// ```
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employees: EmployeeHandlers::new(repository),
        }
    }
}
