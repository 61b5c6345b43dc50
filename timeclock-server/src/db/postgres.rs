//! PostgreSQL store implementations
//!
//! Every method checks a connection out of the shared pool for the
//! duration of its statements; the checkout is released when the
//! statement completes, on the error path too.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Employee, EmployeeCreate, TimeEntry, TimeEntryCreate};
use sqlx::PgPool;
use uuid::Uuid;

use super::{BoxError, EmployeesStore, TimeEntriesStore};

/// `EmployeesStore` backed by the `employees` table
#[derive(Clone)]
pub struct PgEmployeesStore {
    pool: PgPool,
}

impl PgEmployeesStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeesStore for PgEmployeesStore {
    async fn list(&self) -> Result<Vec<Employee>, BoxError> {
        let rows: Vec<Employee> = sqlx::query_as(
            "SELECT id, firstname AS first_name, lastname AS last_name, email FROM employees",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Employee>, BoxError> {
        let row: Option<Employee> = sqlx::query_as(
            "SELECT id, firstname AS first_name, lastname AS last_name, email
             FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, data: &EmployeeCreate) -> Result<Uuid, BoxError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO employees (firstname, lastname, email)
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, employee: &Employee) -> Result<bool, BoxError> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM employees WHERE id = $1")
            .bind(employee.id)
            .fetch_one(&self.pool)
            .await?;
        if exists == 0 {
            return Ok(false);
        }

        let result = sqlx::query(
            "UPDATE employees SET firstname = $1, lastname = $2, email = $3 WHERE id = $4",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM employees WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        if exists == 0 {
            return Ok(false);
        }

        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// `TimeEntriesStore` backed by the `timeentries` table
#[derive(Clone)]
pub struct PgTimeEntriesStore {
    pool: PgPool,
}

impl PgTimeEntriesStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimeEntriesStore for PgTimeEntriesStore {
    async fn list_by_employee(&self, employee_id: Uuid) -> Result<Vec<TimeEntry>, BoxError> {
        let rows: Vec<TimeEntry> = sqlx::query_as(
            "SELECT id, employeeid AS employee_id, date, hoursworked AS hours_worked
             FROM timeentries WHERE employeeid = $1",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(
        &self,
        employee_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Option<TimeEntry>, BoxError> {
        let row: Option<TimeEntry> = sqlx::query_as(
            "SELECT id, employeeid AS employee_id, date, hoursworked AS hours_worked
             FROM timeentries WHERE employeeid = $1 AND id = $2",
        )
        .bind(employee_id)
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_by_date(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<TimeEntry>, BoxError> {
        let row: Option<TimeEntry> = sqlx::query_as(
            "SELECT id, employeeid AS employee_id, date, hoursworked AS hours_worked
             FROM timeentries WHERE employeeid = $1 AND date = $2",
        )
        .bind(employee_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, employee_id: Uuid, entry: &TimeEntryCreate) -> Result<Uuid, BoxError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO timeentries (employeeid, date, hoursworked)
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(employee_id)
        .bind(entry.date)
        .bind(entry.hours_worked)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, employee_id: Uuid, entry: &TimeEntry) -> Result<bool, BoxError> {
        let result = sqlx::query(
            "UPDATE timeentries SET date = $1, hoursworked = $2
             WHERE employeeid = $3 AND id = $4",
        )
        .bind(entry.date)
        .bind(entry.hours_worked)
        .bind(employee_id)
        .bind(entry.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, employee_id: Uuid, entry_id: Uuid) -> Result<bool, BoxError> {
        let result = sqlx::query("DELETE FROM timeentries WHERE employeeid = $1 AND id = $2")
            .bind(employee_id)
            .bind(entry_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
