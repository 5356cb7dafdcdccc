//! Data models for the field-survey operations platform.
//!
//! This module contains the typed counterparts of every backend resource:
//! employees and their HR records, studies with quota tracking,
//! assignments, questionnaires with responses, and the scheduling
//! snapshots consumed by the planner. Display implementations live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.
//!
//! # Wire format
//!
//! The backend serves JSON with French camelCase keys (`nom`,
//! `dateDebut`, `objectifQuotas`, ...). Every struct here maps those keys
//! onto English field names through serde renames, so the wire format is
//! exact while the crate reads naturally. Calendar dates are ISO
//! `YYYY-MM-DD` strings on the wire and [`jiff::civil::Date`] in memory.
//!
//! Identifiers are `Option<u64>`: absent on creation payloads, assigned
//! by the backend, and present everywhere else.

pub mod assignment;
pub mod employee;
pub mod hr;
pub mod questionnaire;
pub mod schedule;
pub mod status;
pub mod study;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use assignment::Assignment;
pub use employee::Employee;
pub use hr::{Absence, AdministrativeRequest, Contract, Salary};
pub use questionnaire::{Answer, Question, Questionnaire, QuestionnaireRef, QuestionnaireResponse};
pub use schedule::{Interviewer, ScheduledStudy};
pub use status::{HealthStatus, RequestStatus, Role};
pub use study::{Quota, Study};
