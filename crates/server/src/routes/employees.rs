//! `/api/employees` handlers. Every failure, including malformed bodies and
//! non-numeric ids, is answered with `400` and an `ErrorBody`.

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, OriginalUri, Path, State},
    http::StatusCode,
    Json,
};
use service::Employee;
use tracing::info;

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    post, path = "/api/employees", tag = "employees",
    request_body = crate::openapi::EmployeeDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Email already taken or malformed body", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Employee>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(candidate) = body.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    let created = state.employees.create(candidate).await.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/employees", tag = "employees",
    responses(
        (status = 200, description = "All employees", body = [crate::openapi::EmployeeDoc]),
        (status = 400, description = "Store failure", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Result<Json<Vec<Employee>>, ApiError> {
    info!("get employees request received");
    let all = state.employees.list().await.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Not found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    let found = state.employees.get_by_id(id).await.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/api/employees", tag = "employees",
    request_body = crate::openapi::EmployeeDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Not found or malformed body", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Employee>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Json(data) = body.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    let updated = state.employees.update(data).await.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Deleted, empty body"),
        (status = 400, description = "Not found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    state.employees.delete(id).await.map_err(|e| ApiError::new(e.to_string(), &uri))?;
    Ok(StatusCode::OK)
}
