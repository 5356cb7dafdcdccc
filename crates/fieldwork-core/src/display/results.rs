//! Result wrapper types for displaying operation outcomes.
//!
//! Wrapper types that format create, update, and delete results with a
//! confirmation line followed by the affected resource, so every mutating
//! command reports the same way.

use std::fmt;

use crate::models::{Employee, Questionnaire, Study};

fn write_confirmation(
    f: &mut fmt::Formatter<'_>,
    verb: &str,
    kind: &str,
    id: Option<u64>,
) -> fmt::Result {
    match id {
        Some(id) => writeln!(f, "{verb} {kind} with ID: {id}"),
        None => writeln!(f, "{verb} {kind}"),
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use fieldwork_core::{display::CreateResult, models::Questionnaire};
///
/// let questionnaire = Questionnaire {
///     id: Some(4),
///     title: "Habitudes digitales".to_string(),
///     questions: vec![],
/// };
/// let output = format!("{}", CreateResult::new(questionnaire));
/// assert!(output.contains("Created questionnaire with ID: 4"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Employee> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_confirmation(f, "Created", "employee", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Study> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_confirmation(f, "Created", "study", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Questionnaire> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_confirmation(f, "Created", "questionnaire", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks the list of changes made so users get explicit feedback about
/// what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Employee> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_confirmation(f, "Updated", "employee", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Study> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_confirmation(f, "Updated", "study", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Employee> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted employee '{}' (ID: {})",
            self.resource.full_name(),
            self.resource.id.unwrap_or_default()
        )
    }
}

impl fmt::Display for DeleteResult<Study> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted study '{}' (ID: {})",
            self.resource.name,
            self.resource.id.unwrap_or_default()
        )
    }
}
