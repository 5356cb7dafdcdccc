//! Display formatting for domain models and operation results.
//!
//! Every user-facing surface formats through this module: domain models
//! implement [`std::fmt::Display`] directly (in [`models`]), collections
//! go through newtype wrappers with empty-collection fallbacks
//! ([`collections`]), mutating operations report through result wrappers
//! ([`results`] and [`status`]), and the scheduling view renders in
//! [`board`]. All output is markdown, so the CLI's terminal renderer can
//! colorize it and plain mode stays readable.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Employees, Studies, ...)
//! - [`board`]: Schedule board and entry rendering
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod board;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{
    Absences, Assignments, Contracts, Employees, Questionnaires, Requests, Responses, Salaries,
    Studies,
};
pub use datetime::DisplayDate;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
