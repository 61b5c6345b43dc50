//! Employee CRUD handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shared::error::AppError;
use shared::models::{Employee, EmployeeCreate};
use uuid::Uuid;

use super::internal;
use crate::state::AppState;

/// GET /api/Employees
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, AppError> {
    // Unlike the other endpoints, a store failure here surfaces the
    // error text to the caller as a 400.
    let employees = state
        .employees
        .list()
        .await
        .map_err(|e| AppError::invalid_request(e.to_string()))?;
    Ok(Json(employees))
}

/// POST /api/Employees
///
/// The database assigns the id; the response carries it plus a
/// Location header pointing at the new record.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeCreate>,
) -> Result<Response, AppError> {
    let id = state.employees.insert(&payload).await.map_err(internal)?;
    let location = format!("/api/Employees/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(json!({ "id": id })),
    )
        .into_response())
}

/// GET /api/Employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, AppError> {
    let employee = state
        .employees
        .get(id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Employee"))?;
    Ok(Json(employee))
}

/// PUT /api/Employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(employee): Json<Employee>,
) -> Result<StatusCode, AppError> {
    if id != employee.id {
        return Err(AppError::invalid_request(
            "Path id does not match body id.",
        ));
    }
    let updated = state
        .employees
        .update(&employee)
        .await
        .map_err(internal)?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Employee"))
    }
}

/// DELETE /api/Employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = state.employees.delete(id).await.map_err(internal)?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Employee"))
    }
}
