//! Status and role enumerations shared across the domain models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platform roles carried by employee records.
///
/// The wire values are the backend's own identifiers (`ADMIN`,
/// `SUPERVISEUR`, `ENQUETEUR`); the variants use the English terms the
/// rest of this crate speaks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    /// Platform administrator
    #[serde(rename = "ADMIN")]
    Admin,

    /// Study supervisor
    #[serde(rename = "SUPERVISEUR")]
    Supervisor,

    /// Field interviewer
    #[serde(rename = "ENQUETEUR")]
    Interviewer,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "SUPERVISOR" | "SUPERVISEUR" => Ok(Role::Supervisor),
            "INTERVIEWER" | "ENQUETEUR" => Ok(Role::Interviewer),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl Role {
    /// Convert to the backend's wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Supervisor => "SUPERVISEUR",
            Role::Interviewer => "ENQUETEUR",
        }
    }
}

/// Lifecycle states of an administrative request.
///
/// Requests are created pending and move to approved or refused through
/// the dedicated status-transition endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// Awaiting a decision
    #[default]
    #[serde(rename = "EN_ATTENTE")]
    Pending,

    /// Approved by an administrator
    #[serde(rename = "VALIDE")]
    Approved,

    /// Refused by an administrator
    #[serde(rename = "REFUSE")]
    Refused,
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" | "EN_ATTENTE" => Ok(RequestStatus::Pending),
            "APPROVED" | "VALIDE" => Ok(RequestStatus::Approved),
            "REFUSED" | "REFUSE" => Ok(RequestStatus::Refused),
            _ => Err(format!("Invalid request status: {s}")),
        }
    }
}

impl RequestStatus {
    /// Convert to the backend's wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "EN_ATTENTE",
            RequestStatus::Approved => "VALIDE",
            RequestStatus::Refused => "REFUSE",
        }
    }
}

/// Health classification of a scheduled study.
///
/// Derived by the planner from actual versus expected progress; never
/// stored on the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Ahead of the expected completion curve
    OnTrack,

    /// Within ten points of the expected completion curve
    AtRisk,

    /// More than ten points behind the expected completion curve
    Delayed,
}

impl FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on_track" | "ontrack" => Ok(HealthStatus::OnTrack),
            "at_risk" | "atrisk" => Ok(HealthStatus::AtRisk),
            "delayed" => Ok(HealthStatus::Delayed),
            _ => Err(format!("Invalid health status: {s}")),
        }
    }
}

impl HealthStatus {
    /// Convert to the snake_case string used in output and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::OnTrack => "on_track",
            HealthStatus::AtRisk => "at_risk",
            HealthStatus::Delayed => "delayed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwork_core::models::HealthStatus;
    ///
    /// assert_eq!(HealthStatus::OnTrack.with_icon(), "✓ On track");
    /// assert_eq!(HealthStatus::AtRisk.with_icon(), "⚠ At risk");
    /// assert_eq!(HealthStatus::Delayed.with_icon(), "✗ Delayed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            HealthStatus::OnTrack => "✓ On track",
            HealthStatus::AtRisk => "⚠ At risk",
            HealthStatus::Delayed => "✗ Delayed",
        }
    }
}
