//! Uniform response envelope shared by every employee operation.
//!
//! Successes and failures serialise to the same shape:
//!
//! ```text
//! {"status": 201, "message": "Create Employee Success", "data": {"data": {"InsertedID": "..."}}}
//! {"status": 400, "message": "Error", "data": {"data": "missing required fields: age"}}
//! ```

use serde::Serialize;

use crate::domain::{EmployeeId, EmployeeOperation, EmployeeRecord, RequestError};

/// Numeric outcome codes carried by envelopes.
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const BAD_REQUEST: u16 = 400;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Outcome of a successful insert, keyed `InsertedID` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertOutcome {
    #[serde(rename = "InsertedID")]
    pub inserted_id: EmployeeId,
}

/// Count reported by a delete, keyed `DeletedCount` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCount {
    pub deleted_count: u64,
}

/// Outcome of a delete, shaped differently when nothing was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DeletionOutcome {
    NothingDeleted(DeleteCount),
    Deleted {
        result: DeleteCount,
        deleted: EmployeeId,
    },
}

/// Value stored under `data.data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Employee(EmployeeRecord),
    Employees(Vec<EmployeeRecord>),
    Inserted(InsertOutcome),
    Deletion(DeletionOutcome),
    Detail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PayloadSlot {
    data: Payload,
}

/// Tagged result of an employee operation.
///
/// # Examples
/// ```
/// use employees::domain::{Envelope, Payload, status};
///
/// let envelope = Envelope::new(status::OK, "Success", Payload::Employees(Vec::new()));
/// let json = serde_json::to_value(&envelope).expect("envelope encodes");
/// assert_eq!(json["data"]["data"], serde_json::json!([]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    status: u16,
    message: String,
    data: PayloadSlot,
}

impl Envelope {
    /// Build an envelope from its parts.
    pub fn new(status: u16, message: impl Into<String>, payload: Payload) -> Self {
        Self {
            status,
            message: message.into(),
            data: PayloadSlot { data: payload },
        }
    }

    /// Failure envelope of `operation` carrying the error text as its payload.
    pub fn failure(operation: EmployeeOperation, error: &RequestError) -> Self {
        Self::new(
            error.code().status(),
            error.summary(operation),
            Payload::Detail(error.to_string()),
        )
    }

    /// Numeric outcome code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human-readable summary.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Payload held under `data.data`.
    pub fn payload(&self) -> &Payload {
        &self.data.data
    }

    /// Consume the envelope, returning its payload.
    pub fn into_payload(self) -> Payload {
        self.data.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeDraft;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn encode(envelope: &Envelope) -> Value {
        serde_json::to_value(envelope).expect("envelope encodes")
    }

    #[rstest]
    fn insert_outcome_uses_driver_key() {
        let envelope = Envelope::new(
            status::CREATED,
            "Create Employee Success",
            Payload::Inserted(InsertOutcome {
                inserted_id: EmployeeId::new("65a1b2c3d4e5f6a7b8c9d0e1"),
            }),
        );

        assert_eq!(
            encode(&envelope),
            json!({
                "status": 201,
                "message": "Create Employee Success",
                "data": { "data": { "InsertedID": "65a1b2c3d4e5f6a7b8c9d0e1" } },
            })
        );
    }

    #[rstest]
    #[case(
        DeletionOutcome::NothingDeleted(DeleteCount { deleted_count: 0 }),
        json!({ "DeletedCount": 0 })
    )]
    #[case(
        DeletionOutcome::Deleted {
            result: DeleteCount { deleted_count: 1 },
            deleted: EmployeeId::new("abc"),
        },
        json!({ "result": { "DeletedCount": 1 }, "deleted": "abc" })
    )]
    fn deletion_outcomes_have_distinct_shapes(
        #[case] outcome: DeletionOutcome,
        #[case] expected: Value,
    ) {
        let envelope = Envelope::new(status::OK, "ok", Payload::Deletion(outcome));
        assert_eq!(encode(&envelope)["data"]["data"], expected);
    }

    #[rstest]
    fn failure_envelope_carries_error_text() {
        let error = RequestError::from(
            EmployeeDraft::new("Ann", "Lee", "Engineer", 0)
                .validate()
                .expect_err("age is missing"),
        );
        let envelope = Envelope::failure(EmployeeOperation::Create, &error);

        assert_eq!(envelope.status(), status::BAD_REQUEST);
        assert_eq!(envelope.message(), "Error");
        assert_eq!(
            envelope.payload(),
            &Payload::Detail("missing required fields: age".to_owned())
        );
    }
}
