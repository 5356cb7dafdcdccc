//! Core library for the Fieldwork survey-operations console.
//!
//! This crate provides the typed client for the field-survey platform's
//! REST backend together with the scheduling logic the console derives
//! from it: domain models for every backend resource, an async API
//! client with an explicit session context, the progress/staffing
//! planner, and markdown display formatting.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): typed counterparts of the backend
//!   resources, with wire-exact serde mappings
//! - **API Client** ([`api`]): reqwest-based client owning the bearer
//!   session; one module per backend resource
//! - **Planner** ([`planner`]): pure progress classification and
//!   staffing estimation over scheduling snapshots
//! - **Display** ([`display`]): markdown formatting for models,
//!   collections, operation results, and the schedule board
//!
//! The backend owns all persistent state; everything this crate holds is
//! a read-only, per-call snapshot, so there is no cache to invalidate
//! and no local store to migrate.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fieldwork_core::{planner::ScheduleBoard, ApiClient};
//! use jiff::Zoned;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Build a client against the configured backend origin
//! let client = ApiClient::builder()
//!     .with_base_url("http://localhost:8081")
//!     .with_token("secret-token")
//!     .build()?;
//!
//! // Fetch the studies and derive the scheduling view
//! let studies = client.studies().await?;
//! let snapshots = studies.iter().map(Into::into).collect();
//! let board = ScheduleBoard::build(snapshots, &[], Zoned::now().date());
//! println!("{board}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use api::{ApiClient, ApiClientBuilder, Session, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use models::{
    Absence, AdministrativeRequest, Assignment, Contract, Employee, HealthStatus, Interviewer,
    Questionnaire, QuestionnaireResponse, RequestStatus, Role, Salary, ScheduledStudy, Study,
};
pub use planner::{classify_status, required_interviewers, ScheduleBoard, ScheduleEntry};
