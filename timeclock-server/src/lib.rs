//! Employee time management API
//!
//! Thin HTTP layer over per-entity stores:
//!
//! - **API** (`api`): axum handlers mapping HTTP verbs to store calls
//! - **Stores** (`db`): `EmployeesStore` / `TimeEntriesStore` traits with
//!   PostgreSQL and in-memory implementations
//! - **State** (`state`): shared `AppState` injected into every handler
//! - **Config** (`config`): environment-based configuration

pub mod api;
pub mod config;
pub mod db;
pub mod state;

pub use config::Config;
pub use state::AppState;
