//! HR record models: absences, administrative requests, contracts, salaries.
//!
//! All four are owned by an employee and fetched through the per-employee
//! HR endpoints. Administrative requests additionally carry a lifecycle
//! status driven by the validate/refuse transition endpoints.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Employee, RequestStatus};

/// A recorded absence period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Absence {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// First day of the absence (`dateDebut`)
    #[serde(rename = "dateDebut")]
    pub start: Date,

    /// Last day of the absence (`dateFin`)
    #[serde(rename = "dateFin")]
    pub end: Date,

    /// Stated reason (`motif`)
    #[serde(rename = "motif")]
    pub reason: String,

    /// Owning employee, present on read paths (`employe`)
    #[serde(rename = "employe", skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
}

/// An administrative request (leave, certificate, equipment, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdministrativeRequest {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Request category (`typeDemande`)
    #[serde(rename = "typeDemande")]
    pub kind: String,

    /// Free-form details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lifecycle status (`statut`); pending until decided
    #[serde(rename = "statut", skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,

    /// Submission date (`dateDemande`)
    #[serde(rename = "dateDemande")]
    pub requested_on: Date,

    /// Owning employee, present on read paths (`employe`)
    #[serde(rename = "employe", skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
}

/// An employment contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Contract start date (`dateDebut`)
    #[serde(rename = "dateDebut")]
    pub start: Date,

    /// Contract end date (`dateFin`)
    #[serde(rename = "dateFin")]
    pub end: Date,

    /// Contract kind, e.g. CDI or CDD (`typeContrat`)
    #[serde(rename = "typeContrat")]
    pub kind: String,

    /// Owning employee, present on read paths (`employe`)
    #[serde(rename = "employe", skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
}

/// A salary payment record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Salary {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Paid amount (`montant`)
    #[serde(rename = "montant")]
    pub amount: f64,

    /// Payment date (`datePaiement`)
    #[serde(rename = "datePaiement")]
    pub paid_on: Date,

    /// Owning employee, present on read paths (`employe`)
    #[serde(rename = "employe", skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
}
