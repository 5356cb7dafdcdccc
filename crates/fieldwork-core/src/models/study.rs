//! Study model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Assignment, Employee};

/// A field study (`etude`): a dated collection campaign with a quota
/// target, a supervising employee, and a roster of assigned interviewers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display name (`nom`)
    #[serde(rename = "nom")]
    pub name: String,

    /// First day of collection (`dateDebut`)
    #[serde(rename = "dateDebut")]
    pub start: Date,

    /// Last day of collection (`dateFin`)
    #[serde(rename = "dateFin")]
    pub end: Date,

    /// Total number of interviews to collect (`objectifQuotas`)
    #[serde(rename = "objectifQuotas")]
    pub quota_target: u32,

    /// Supervising employee (`superviseur`)
    #[serde(rename = "superviseur", skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<Employee>,

    /// Assigned interviewers (`enqueteurs`); lazy-loaded by the backend
    #[serde(rename = "enqueteurs", default, skip_serializing_if = "Vec::is_empty")]
    pub interviewers: Vec<Employee>,

    /// Per-region quota records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quotas: Vec<Quota>,

    /// Assignments attached to the study (`taches`)
    #[serde(rename = "taches", default, skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<Assignment>,
}

impl Study {
    /// Interviews collected so far, summed over the quota records.
    pub fn quota_completed(&self) -> u32 {
        self.quotas.iter().map(|quota| quota.completed).sum()
    }
}

/// A per-region quota record attached to a study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quota {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Geographic region the quota covers
    pub region: String,

    /// Name of the interviewer responsible (`enqueteur`)
    #[serde(rename = "enqueteur", skip_serializing_if = "Option::is_none")]
    pub interviewer: Option<String>,

    /// Interviews to collect in this region (`quotaTotal`)
    #[serde(rename = "quotaTotal")]
    pub target: u32,

    /// Interviews collected so far (`quotaComplete`)
    #[serde(rename = "quotaComplete")]
    pub completed: u32,

    /// Collection window start (`dateDebut`)
    #[serde(rename = "dateDebut", skip_serializing_if = "Option::is_none")]
    pub start: Option<Date>,

    /// Collection window end (`dateFin`)
    #[serde(rename = "dateFin", skip_serializing_if = "Option::is_none")]
    pub end: Option<Date>,

    /// Commissioning client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    /// Survey category (`typeEnquete`)
    #[serde(rename = "typeEnquete", skip_serializing_if = "Option::is_none")]
    pub survey_kind: Option<String>,

    /// Share of contacts resolved into completed interviews, in percent
    /// (`tauxResolution`)
    #[serde(rename = "tauxResolution", skip_serializing_if = "Option::is_none")]
    pub resolution_rate: Option<f64>,

    /// Data quality score, in percent (`qualiteDonnees`)
    #[serde(rename = "qualiteDonnees", skip_serializing_if = "Option::is_none")]
    pub data_quality: Option<f64>,
}
