//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for the Create and Update request body.
///
/// Any `id` supplied by the client is ignored.
#[derive(ToSchema)]
#[schema(as = EmployeeRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeRequestSchema {
    /// Required; must not be empty.
    #[schema(example = "Ann")]
    firstname: String,
    /// Required; must not be empty.
    #[schema(example = "Lee")]
    lastname: String,
    /// Required; must not be empty.
    #[schema(example = "Engineer")]
    position: String,
    /// Required; zero is treated as missing.
    #[schema(example = 30)]
    age: i64,
}

/// OpenAPI schema for [`crate::domain::EmployeeRecord`].
#[derive(ToSchema)]
#[schema(as = Employee)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    /// Store-generated identifier rendered as 24 hex characters.
    #[schema(example = "65a1b2c3d4e5f6a7b8c9d0e1")]
    id: String,
    #[schema(example = "Ann")]
    firstname: String,
    #[schema(example = "Lee")]
    lastname: String,
    #[schema(example = "Engineer")]
    position: String,
    #[schema(example = 30)]
    age: i64,
}

/// OpenAPI schema for the envelope's `data` mapping.
#[derive(ToSchema)]
#[schema(as = EnvelopeData)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnvelopeDataSchema {
    /// Employee, list of employees, insert or deletion outcome, or an error
    /// detail string.
    #[schema(value_type = Object)]
    data: serde_json::Value,
}

/// OpenAPI schema for [`crate::domain::Envelope`].
#[derive(ToSchema)]
#[schema(as = Envelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnvelopeSchema {
    /// Numeric outcome code, equal to the HTTP status.
    #[schema(example = 200)]
    status: u16,
    /// Human-readable summary.
    #[schema(example = "Success")]
    message: String,
    data: EnvelopeDataSchema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn envelope_schema_has_expected_name_and_fields() {
        let schema_json = schema_to_json::<EnvelopeSchema>();
        assert_eq!(EnvelopeSchema::name(), "Envelope");
        for field in ["status", "message", "data"] {
            assert!(schema_json.contains(field), "schema should contain {field}");
        }
    }

    #[test]
    fn employee_schema_lists_business_fields() {
        let schema_json = schema_to_json::<EmployeeSchema>();
        assert_eq!(EmployeeSchema::name(), "Employee");
        for field in ["id", "firstname", "lastname", "position", "age"] {
            assert!(schema_json.contains(field), "schema should contain {field}");
        }
    }

    #[test]
    fn request_schema_omits_identifier() {
        let schema_json = schema_to_json::<EmployeeRequestSchema>();
        assert_eq!(EmployeeRequestSchema::name(), "EmployeeRequest");
        assert!(!schema_json.contains("\"id\""));
    }
}
