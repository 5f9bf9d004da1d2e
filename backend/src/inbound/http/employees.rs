//! Employee API handlers.
//!
//! ```text
//! GET    /employees
//! GET    /employee/{id}
//! POST   /employee       {"firstname":"Ann","lastname":"Lee","position":"Engineer","age":30}
//! PUT    /update/{id}    {"firstname":"Ann","lastname":"Lee","position":"Manager","age":31}
//! DELETE /delete/{id}
//! ```
//!
//! Bodies are taken as raw bytes so that JSON parsing and its failure
//! envelope stay inside the domain handler set.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::error;

use crate::domain::Envelope;
use crate::inbound::http::schemas::{EmployeeRequestSchema, EnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Echo the envelope with its status as the HTTP status.
fn respond(envelope: Envelope) -> HttpResponse {
    let status = StatusCode::from_u16(envelope.status()).unwrap_or_else(|err| {
        error!(status = envelope.status(), error = %err, "envelope carries an invalid status");
        StatusCode::INTERNAL_SERVER_ERROR
    });
    HttpResponse::build(status).json(envelope)
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees; empty when none exist", body = EnvelopeSchema),
        (status = 500, description = "Store failure", body = EnvelopeSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> HttpResponse {
    respond(state.employees.list_all().await)
}

/// Fetch one employee by identifier.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employees::inbound::http::employees::get_employee;
///
/// let app = App::new().service(get_employee);
/// ```
#[utoipa::path(
    get,
    path = "/employee/{id}",
    params(("id" = String, Path, description = "Employee identifier (24 hex characters)")),
    responses(
        (status = 200, description = "The employee", body = EnvelopeSchema),
        (status = 500, description = "Store failure, including an unknown id", body = EnvelopeSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employee/{id}")]
pub async fn get_employee(state: web::Data<HttpState>, path: web::Path<String>) -> HttpResponse {
    respond(state.employees.get_one(&path.into_inner()).await)
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/employee",
    request_body = EmployeeRequestSchema,
    responses(
        (status = 201, description = "Employee created", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or missing field", body = EnvelopeSchema),
        (status = 500, description = "Store failure", body = EnvelopeSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employee")]
pub async fn create_employee(state: web::Data<HttpState>, body: web::Bytes) -> HttpResponse {
    respond(state.employees.create(&body).await)
}

/// Replace an employee's business fields.
#[utoipa::path(
    put,
    path = "/update/{id}",
    params(("id" = String, Path, description = "Employee identifier (24 hex characters)")),
    request_body = EmployeeRequestSchema,
    responses(
        (status = 200, description = "Updated employee, or an empty record when nothing matched", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or missing field", body = EnvelopeSchema),
        (status = 500, description = "Store failure", body = EnvelopeSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/update/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> HttpResponse {
    respond(state.employees.update(&path.into_inner(), &body).await)
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    params(("id" = String, Path, description = "Employee identifier (24 hex characters)")),
    responses(
        (status = 200, description = "Deleted, or a zero-deletion warning", body = EnvelopeSchema),
        (status = 500, description = "Store failure", body = EnvelopeSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/delete/{id}")]
pub async fn delete_employee(state: web::Data<HttpState>, path: web::Path<String>) -> HttpResponse {
    respond(state.employees.delete(&path.into_inner()).await)
}

/// Register every employee route on a service config.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employees::inbound::http::employees::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_employees)
        .service(get_employee)
        .service(create_employee)
        .service(update_employee)
        .service(delete_employee);
}
