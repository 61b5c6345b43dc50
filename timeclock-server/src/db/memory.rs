//! In-memory store implementations
//!
//! The swappable counterpart to the PostgreSQL stores. Used by the API
//! tests and available for database-free development runs. Semantics
//! match the SQL stores: server-assigned ids, rows-affected style
//! booleans, and (employee, id) scoping on time entries.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use shared::models::{Employee, EmployeeCreate, TimeEntry, TimeEntryCreate};
use uuid::Uuid;

use super::{BoxError, EmployeesStore, TimeEntriesStore};

/// `EmployeesStore` over a concurrent map
#[derive(Default)]
pub struct MemoryEmployeesStore {
    rows: DashMap<Uuid, Employee>,
}

#[async_trait]
impl EmployeesStore for MemoryEmployeesStore {
    async fn list(&self) -> Result<Vec<Employee>, BoxError> {
        Ok(self.rows.iter().map(|r| r.value().clone()).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Employee>, BoxError> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn insert(&self, data: &EmployeeCreate) -> Result<Uuid, BoxError> {
        let id = Uuid::new_v4();
        self.rows.insert(
            id,
            Employee {
                id,
                first_name: data.first_name.clone(),
                last_name: data.last_name.clone(),
                email: data.email.clone(),
            },
        );
        Ok(id)
    }

    async fn update(&self, employee: &Employee) -> Result<bool, BoxError> {
        match self.rows.get_mut(&employee.id) {
            Some(mut row) => {
                *row = employee.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        Ok(self.rows.remove(&id).is_some())
    }
}

/// `TimeEntriesStore` over a concurrent map
#[derive(Default)]
pub struct MemoryTimeEntriesStore {
    rows: DashMap<Uuid, TimeEntry>,
}

#[async_trait]
impl TimeEntriesStore for MemoryTimeEntriesStore {
    async fn list_by_employee(&self, employee_id: Uuid) -> Result<Vec<TimeEntry>, BoxError> {
        Ok(self
            .rows
            .iter()
            .filter(|r| r.value().employee_id == employee_id)
            .map(|r| *r.value())
            .collect())
    }

    async fn get_by_id(
        &self,
        employee_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Option<TimeEntry>, BoxError> {
        Ok(self
            .rows
            .get(&entry_id)
            .map(|r| *r.value())
            .filter(|e| e.employee_id == employee_id))
    }

    async fn get_by_date(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<TimeEntry>, BoxError> {
        Ok(self
            .rows
            .iter()
            .map(|r| *r.value())
            .find(|e| e.employee_id == employee_id && e.date == date))
    }

    async fn insert(&self, employee_id: Uuid, entry: &TimeEntryCreate) -> Result<Uuid, BoxError> {
        let id = Uuid::new_v4();
        self.rows.insert(
            id,
            TimeEntry {
                id,
                employee_id,
                date: entry.date,
                hours_worked: entry.hours_worked,
            },
        );
        Ok(id)
    }

    async fn update(&self, employee_id: Uuid, entry: &TimeEntry) -> Result<bool, BoxError> {
        match self.rows.get_mut(&entry.id) {
            Some(mut row) if row.employee_id == employee_id => {
                row.date = entry.date;
                row.hours_worked = entry.hours_worked;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, employee_id: Uuid, entry_id: Uuid) -> Result<bool, BoxError> {
        Ok(self
            .rows
            .remove_if(&entry_id, |_, e| e.employee_id == employee_id)
            .is_some())
    }
}
