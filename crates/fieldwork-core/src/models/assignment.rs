//! Assignment model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A task (`tache`) assigned to an interviewer: a dated piece of work
/// with a planned call volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// What the interviewer is asked to do
    pub description: String,

    /// Date the assignment was handed out (`dateAssignation`);
    /// set by the backend on creation
    #[serde(rename = "dateAssignation", skip_serializing_if = "Option::is_none")]
    pub assigned_on: Option<Date>,

    /// Due date (`dateEcheance`)
    #[serde(rename = "dateEcheance")]
    pub due: Date,

    /// Number of calls planned for the assignment (`appelsPrevus`)
    #[serde(rename = "appelsPrevus")]
    pub planned_calls: u32,

    /// Identifier of the assigned interviewer (`enqueteurId`)
    #[serde(rename = "enqueteurId")]
    pub interviewer_id: u64,
}
