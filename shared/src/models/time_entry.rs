//! TimeEntry model
//!
//! One record of hours worked by one employee on one calendar date.
//! Time-of-day carries no meaning, so the date is a plain `NaiveDate`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time entry record as stored and returned by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub hours_worked: i32,
}

/// Create/update payload; id and employeeId come from the route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryCreate {
    pub date: NaiveDate,
    pub hours_worked: i32,
}
