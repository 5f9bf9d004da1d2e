//! Domain primitives, ports and the employee handler set.
//!
//! Purpose: keep record validation, error taxonomy and the request pipeline
//! independent of both the web framework and the document store. Inbound
//! adapters call [`EmployeeHandlers`]; outbound adapters implement
//! [`ports::EmployeeRepository`].
//!
//! Public surface:
//! - `EmployeeDraft`, `EmployeeRecord`, `EmployeeId`: the record model.
//! - `Envelope`, `Payload`: the uniform response shape.
//! - `RequestError`, `ErrorCode`: failure taxonomy.
//! - `EmployeeHandlers`: create, list, get-one, update and delete.

pub mod employee;
pub mod employee_handlers;
pub mod envelope;
pub mod error;
pub mod ports;

pub use self::employee::{
    EmployeeDraft, EmployeeField, EmployeeId, EmployeeRecord, EmployeeValidationError,
    NIL_EMPLOYEE_ID,
};
pub use self::employee_handlers::EmployeeHandlers;
pub use self::envelope::{
    DeleteCount, DeletionOutcome, Envelope, InsertOutcome, Payload, status,
};
pub use self::error::{EmployeeOperation, ErrorCode, RequestError};
