//! Scheduling snapshot types consumed by the planner.
//!
//! A [`ScheduledStudy`] is a read-only projection of a [`Study`] reduced to
//! the fields the planner needs: the collection window, the quota counts,
//! and a few display labels. An [`Interviewer`] is the worker-side
//! snapshot: a name, the weekdays the person works, and a productivity
//! figure in completed interviews per day.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Study;

/// Read-only scheduling snapshot of a study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledStudy {
    /// Identifier of the underlying study
    pub id: u64,

    /// Display name
    pub name: String,

    /// First day of collection
    pub start: Date,

    /// Last day of collection
    pub end: Date,

    /// Total number of interviews to collect
    pub quota_target: u32,

    /// Interviews collected so far
    pub quota_completed: u32,

    /// Identifier of a study this one waits on, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency: Option<String>,

    /// Supervisor display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,

    /// Commissioning client label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

impl ScheduledStudy {
    /// Completion percentage derived from the quota counts.
    ///
    /// The backend does not guarantee `completed ≤ target`, so the result
    /// is clamped to the 0–100 range. A zero target reads as fully
    /// complete: there is nothing left to collect.
    pub fn progress(&self) -> f64 {
        if self.quota_target == 0 {
            return 100.0;
        }
        (f64::from(self.quota_completed) / f64::from(self.quota_target) * 100.0).clamp(0.0, 100.0)
    }
}

impl From<&Study> for ScheduledStudy {
    fn from(study: &Study) -> Self {
        Self {
            id: study.id.unwrap_or_default(),
            name: study.name.clone(),
            start: study.start,
            end: study.end,
            quota_target: study.quota_target,
            quota_completed: study.quota_completed(),
            dependency: None,
            supervisor: study.supervisor.as_ref().map(|s| s.full_name()),
            client: study
                .quotas
                .iter()
                .find_map(|quota| quota.client.clone()),
        }
    }
}

/// Worker-side scheduling snapshot of an interviewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interviewer {
    /// Identifier of the underlying employee
    pub id: u64,

    /// Display name
    pub name: String,

    /// Weekday labels the interviewer works, as the backend spells them
    /// ("lundi", "mardi", ...). Carried for display; the staffing
    /// estimate does not consult it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability: Vec<String>,

    /// Completed interviews per working day
    pub productivity: f64,
}

impl Interviewer {
    /// Build a scheduling snapshot from an employee record.
    ///
    /// Employee records carry no productivity figure, so the caller
    /// supplies one (typically a fleet-wide average).
    pub fn from_employee(employee: &super::Employee, productivity: f64) -> Self {
        Self {
            id: employee.id.unwrap_or_default(),
            name: employee.full_name(),
            availability: Vec::new(),
            productivity,
        }
    }
}
