//! Employee handler set: create, list, get-one, update and delete.
//!
//! Each operation is a short pipeline (parse, validate, persist, respond)
//! that stops at the first failure. Operations take plain request data (raw
//! body bytes, path identifier) and always produce an [`Envelope`], so any
//! web framework can sit in front of them.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::ports::EmployeeRepository;
use serde_json::{Map, Value};

use crate::domain::{
    DeleteCount, DeletionOutcome, EmployeeDraft, EmployeeId, EmployeeOperation, EmployeeRecord,
    Envelope, ErrorCode, InsertOutcome, Payload, RequestError, status,
};

/// Request pipelines for employee records backed by an injected repository.
#[derive(Clone)]
pub struct EmployeeHandlers {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeHandlers {
    /// Create a handler set over the given store adapter.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Parse, validate and insert a new employee.
    ///
    /// Responds `201` with the generated identifier, `400` when the body is
    /// malformed or incomplete, and `500` when the store fails.
    pub async fn create(&self, body: &[u8]) -> Envelope {
        match self.try_create(body).await {
            Ok(id) => {
                info!(employee_id = %id, "employee created");
                Envelope::new(
                    status::CREATED,
                    "Create Employee Success",
                    Payload::Inserted(InsertOutcome { inserted_id: id }),
                )
            }
            Err(err) => failure(EmployeeOperation::Create, &err),
        }
    }

    async fn try_create(&self, body: &[u8]) -> Result<EmployeeId, RequestError> {
        let draft = parse_draft(body)?;
        draft.validate()?;
        Ok(self.repository.insert(&draft).await?)
    }

    /// Return every stored employee; an empty store yields an empty list.
    pub async fn list_all(&self) -> Envelope {
        match self.repository.find_all().await {
            Ok(employees) => Envelope::new(status::OK, "Success", Payload::Employees(employees)),
            Err(err) => failure(EmployeeOperation::ListAll, &err.into()),
        }
    }

    /// Fetch one employee. Absence is reported as a store failure.
    pub async fn get_one(&self, id: &str) -> Envelope {
        let id = EmployeeId::new(id);
        match self.repository.find_one(&id).await {
            Ok(employee) => Envelope::new(status::OK, "Success", Payload::Employee(employee)),
            Err(err) => failure(EmployeeOperation::GetOne, &err.into()),
        }
    }

    /// Replace the business fields of an employee and return its new state.
    ///
    /// When nothing matched the identifier the payload is
    /// [`EmployeeRecord::empty`] and the status is still `200`.
    pub async fn update(&self, id: &str, body: &[u8]) -> Envelope {
        let id = EmployeeId::new(id);
        match self.try_update(&id, body).await {
            Ok(employee) => Envelope::new(status::OK, "Update Success", Payload::Employee(employee)),
            Err(err) => failure(EmployeeOperation::Update, &err),
        }
    }

    async fn try_update(&self, id: &EmployeeId, body: &[u8]) -> Result<EmployeeRecord, RequestError> {
        let draft = parse_draft(body)?;
        draft.validate()?;

        let matched = self.repository.update(id, &draft).await?;
        if matched == 1 {
            info!(employee_id = %id, "employee updated");
            Ok(self.repository.find_one(id).await?)
        } else {
            warn!(employee_id = %id, matched, "update matched no single employee");
            Ok(EmployeeRecord::empty())
        }
    }

    /// Remove an employee. Deleting an unknown identifier is not an error.
    pub async fn delete(&self, id: &str) -> Envelope {
        let id = EmployeeId::new(id);
        match self.repository.delete(&id).await {
            Ok(0) => {
                warn!(employee_id = %id, "delete removed nothing");
                Envelope::new(
                    status::OK,
                    "Warning Zero Deletion occured",
                    Payload::Deletion(DeletionOutcome::NothingDeleted(DeleteCount {
                        deleted_count: 0,
                    })),
                )
            }
            Ok(deleted_count) => {
                info!(employee_id = %id, deleted_count, "employee deleted");
                Envelope::new(
                    status::OK,
                    "Successfully Deleted",
                    Payload::Deletion(DeletionOutcome::Deleted {
                        result: DeleteCount { deleted_count },
                        deleted: id,
                    }),
                )
            }
            Err(err) => failure(EmployeeOperation::Delete, &err.into()),
        }
    }
}

/// Decode a request body that must be a JSON object.
///
/// Structs also deserialise from JSON arrays, so the body is read as a map
/// first and only then mapped onto the draft.
fn parse_draft(body: &[u8]) -> Result<EmployeeDraft, RequestError> {
    let fields: Map<String, Value> = serde_json::from_slice(body)
        .map_err(|err| RequestError::malformed_request(err.to_string()))?;
    serde_json::from_value(Value::Object(fields))
        .map_err(|err| RequestError::malformed_request(err.to_string()))
}

fn failure(operation: EmployeeOperation, err: &RequestError) -> Envelope {
    let op = operation.as_str();
    match err.code() {
        ErrorCode::InvalidRequest => {
            warn!(operation = op, error = %err, "employee request rejected");
        }
        _ => error!(operation = op, error = %err, "employee store operation failed"),
    }
    Envelope::failure(operation, err)
}

#[cfg(test)]
#[path = "employee_handlers_tests.rs"]
mod tests;
