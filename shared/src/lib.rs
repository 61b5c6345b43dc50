//! Shared types for the timeclock workspace
//!
//! Holds the wire models (`Employee`, `TimeEntry` and their payloads)
//! and the unified error type used by the API layer.

pub mod error;
pub mod models;

pub use error::{AppError, AppResult, ErrorCode};
