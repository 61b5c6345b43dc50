//! Time entry CRUD handlers, scoped under one employee

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use shared::error::AppError;
use shared::models::{TimeEntry, TimeEntryCreate};
use uuid::Uuid;

use super::internal;
use crate::state::AppState;

/// POST /api/Employees/{employee_id}/time-entries
pub async fn create(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(payload): Json<TimeEntryCreate>,
) -> Result<Response, AppError> {
    if payload.hours_worked < 1 || payload.hours_worked > 24 {
        return Err(AppError::validation("Work hours must be between 1 and 24."));
    }

    // Check-then-insert; not atomic, so two concurrent requests for the
    // same employee/date can both pass the check. No unique constraint
    // backs this up.
    let existing = state
        .time_entries
        .get_by_date(employee_id, payload.date)
        .await
        .map_err(internal)?;
    if existing.is_some() {
        return Err(AppError::already_exists(
            "Time entry for this date already exists.",
        ));
    }

    let id = state
        .time_entries
        .insert(employee_id, &payload)
        .await
        .map_err(internal)?;
    let entry = TimeEntry {
        id,
        employee_id,
        date: payload.date,
        hours_worked: payload.hours_worked,
    };
    let location = format!("/api/Employees/{employee_id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(entry),
    )
        .into_response())
}

/// GET /api/Employees/{employee_id}/time-entries
pub async fn list(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<Vec<TimeEntry>>, AppError> {
    let entries = state
        .time_entries
        .list_by_employee(employee_id)
        .await
        .map_err(internal)?;
    Ok(Json(entries))
}

/// GET /api/Employees/{employee_id}/time-entries/{entry_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((employee_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TimeEntry>, AppError> {
    let entry = state
        .time_entries
        .get_by_id(employee_id, entry_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Time entry"))?;
    Ok(Json(entry))
}

/// PUT /api/Employees/{employee_id}/time-entries/{entry_id}
pub async fn update(
    State(state): State<AppState>,
    Path((employee_id, entry_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<TimeEntryCreate>,
) -> Result<StatusCode, AppError> {
    // The route entry id wins over anything in the payload
    let entry = TimeEntry {
        id: entry_id,
        employee_id,
        date: payload.date,
        hours_worked: payload.hours_worked,
    };
    let updated = state
        .time_entries
        .update(employee_id, &entry)
        .await
        .map_err(internal)?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Time entry"))
    }
}

/// DELETE /api/Employees/{employee_id}/time-entries/{entry_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((employee_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let deleted = state
        .time_entries
        .delete(employee_id, entry_id)
        .await
        .map_err(internal)?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Time entry"))
    }
}
