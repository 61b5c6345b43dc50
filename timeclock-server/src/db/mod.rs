//! Store layer
//!
//! Capability traits for the two entity stores plus their PostgreSQL and
//! in-memory implementations. Handlers only ever see `Arc<dyn …Store>`,
//! so the backing store is injected through `AppState` and swappable:
//! PostgreSQL in production, in-memory in tests and database-free runs.

pub mod memory;
pub mod postgres;

pub use memory::{MemoryEmployeesStore, MemoryTimeEntriesStore};
pub use postgres::{PgEmployeesStore, PgTimeEntriesStore};

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Employee, EmployeeCreate, TimeEntry, TimeEntryCreate};
use uuid::Uuid;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Persistence operations for the `employees` table
#[async_trait]
pub trait EmployeesStore: Send + Sync {
    /// All employee records, natural table order
    async fn list(&self) -> Result<Vec<Employee>, BoxError>;

    /// Single record by id
    async fn get(&self, id: Uuid) -> Result<Option<Employee>, BoxError>;

    /// Insert a record; the store assigns and returns the new id
    async fn insert(&self, data: &EmployeeCreate) -> Result<Uuid, BoxError>;

    /// Overwrite firstName/lastName/email; false if the id does not exist
    async fn update(&self, employee: &Employee) -> Result<bool, BoxError>;

    /// Physical delete; false if the id does not exist
    async fn delete(&self, id: Uuid) -> Result<bool, BoxError>;
}

/// Persistence operations for the `timeentries` table, scoped by employee
#[async_trait]
pub trait TimeEntriesStore: Send + Sync {
    /// All entries for one employee
    async fn list_by_employee(&self, employee_id: Uuid) -> Result<Vec<TimeEntry>, BoxError>;

    /// Entry by (employee, entry) pair; an entry belonging to a different
    /// employee is treated as absent
    async fn get_by_id(
        &self,
        employee_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Option<TimeEntry>, BoxError>;

    /// Entry by (employee, date) pair; used for the one-entry-per-date check
    async fn get_by_date(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<TimeEntry>, BoxError>;

    /// Insert an entry; the store assigns and returns the new id
    async fn insert(&self, employee_id: Uuid, entry: &TimeEntryCreate) -> Result<Uuid, BoxError>;

    /// Update date/hoursWorked scoped by (employee, entry.id); false if no
    /// row matched
    async fn update(&self, employee_id: Uuid, entry: &TimeEntry) -> Result<bool, BoxError>;

    /// Delete scoped by (employee, entry) pair; false if no row matched
    async fn delete(&self, employee_id: Uuid, entry_id: Uuid) -> Result<bool, BoxError>;
}
