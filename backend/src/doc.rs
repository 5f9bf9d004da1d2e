//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers:
//!
//! - **Paths**: the five employee endpoints and the health checks
//! - **Schemas**: wire-shape wrappers ([`EnvelopeSchema`],
//!   [`EnvelopeDataSchema`], [`EmployeeSchema`], [`EmployeeRequestSchema`])
//!   that keep utoipa out of the domain types
//!
//! The generated document backs Swagger UI in debug builds.

use crate::inbound::http::schemas::{
    EmployeeRequestSchema, EmployeeSchema, EnvelopeDataSchema, EnvelopeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee records API",
        description = "CRUD over employee records. Every response is a status/message/data envelope.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EnvelopeSchema, EnvelopeDataSchema, EmployeeSchema, EmployeeRequestSchema)),
    tags(
        (name = "employees", description = "Employee record operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
