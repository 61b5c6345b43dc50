//! Wire models for the timeclock API

pub mod employee;
pub mod time_entry;

pub use employee::{Employee, EmployeeCreate};
pub use time_entry::{TimeEntry, TimeEntryCreate};
