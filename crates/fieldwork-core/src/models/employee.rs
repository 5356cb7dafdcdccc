//! Employee model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Role;

/// An employee record as served by the backend.
///
/// The backend speaks French camelCase on the wire; fields are renamed
/// accordingly. `id` is absent on creation payloads and filled in by the
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Family name (`nom`)
    #[serde(rename = "nom")]
    pub last_name: String,

    /// Given name (`prenom`)
    #[serde(rename = "prenom")]
    pub first_name: String,

    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone number (`telephone`)
    #[serde(rename = "telephone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Job title (`poste`)
    #[serde(rename = "poste", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Department label (`departement`)
    #[serde(rename = "departement", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Platform role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Whether the employee is currently active (`actif`)
    #[serde(rename = "actif", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Hire date (`dateEmbauche`)
    #[serde(rename = "dateEmbauche", skip_serializing_if = "Option::is_none")]
    pub hired_on: Option<Date>,

    /// Staff number (`matricule`)
    #[serde(rename = "matricule", skip_serializing_if = "Option::is_none")]
    pub staff_number: Option<String>,

    /// Monthly salary (`salaire`)
    #[serde(rename = "salaire", skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl Employee {
    /// Full display name, given name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
