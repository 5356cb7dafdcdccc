//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give each resource list a Display implementation
//! with consistent structure and an explicit empty-collection message.
//! Lists use compact one-line-per-record formatting; the full markdown
//! cards of [`crate::display::models`] are reserved for show operations.

use std::{fmt, ops::Index};

use super::datetime::DisplayDate;
use crate::models::{
    Absence, AdministrativeRequest, Assignment, Contract, Employee, Questionnaire,
    QuestionnaireResponse, Salary, Study,
};

/// Newtype wrapper for displaying collections of employees.
///
/// # Examples
///
/// ```rust
/// use fieldwork_core::{display::Employees, models::Employee};
///
/// let roster = Employees(vec![Employee {
///     id: Some(7),
///     last_name: "Dupont".to_string(),
///     first_name: "Marie".to_string(),
///     email: None,
///     phone: None,
///     position: None,
///     department: None,
///     role: None,
///     active: None,
///     hired_on: None,
///     staff_number: None,
///     salary: None,
/// }]);
/// let output = format!("{}", roster);
/// assert!(output.contains("Marie Dupont"));
/// ```
pub struct Employees(pub Vec<Employee>);

impl Employees {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of employees in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the employees.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.0.iter()
    }
}

impl Index<usize> for Employees {
    type Output = Employee;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Employees {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Employees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No employees found.");
        }
        for employee in &self.0 {
            match employee.id {
                Some(id) => write!(f, "- {id}. {}", employee.full_name())?,
                None => write!(f, "- {}", employee.full_name())?,
            }
            if let Some(role) = employee.role {
                write!(f, " — {role}")?;
            }
            if let Some(department) = &employee.department {
                write!(f, " ({department})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying collections of studies.
///
/// Each study renders in the summary style: a second-level header with
/// the quota progress, then the collection window and supervisor.
pub struct Studies(pub Vec<Study>);

impl Studies {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of studies in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the studies.
    pub fn iter(&self) -> std::slice::Iter<'_, Study> {
        self.0.iter()
    }
}

impl Index<usize> for Studies {
    type Output = Study;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Studies {
    type Item = &'a Study;
    type IntoIter = std::slice::Iter<'a, Study>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Studies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No studies found.");
        }
        for study in &self.0 {
            let id = study.id.unwrap_or_default();
            writeln!(
                f,
                "## {} (ID: {id}) ({}/{})",
                study.name,
                study.quota_completed(),
                study.quota_target
            )?;
            writeln!(f)?;
            writeln!(
                f,
                "- **Window**: {} → {}",
                DisplayDate(&study.start),
                DisplayDate(&study.end)
            )?;
            if let Some(supervisor) = &study.supervisor {
                writeln!(f, "- **Supervisor**: {}", supervisor.full_name())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying an employee's absences.
pub struct Absences(pub Vec<Absence>);

impl fmt::Display for Absences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No absences recorded.");
        }
        for absence in &self.0 {
            write!(f, "{absence}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying an employee's administrative requests.
pub struct Requests(pub Vec<AdministrativeRequest>);

impl fmt::Display for Requests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No administrative requests found.");
        }
        for request in &self.0 {
            write!(f, "{request}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying an employee's contracts.
pub struct Contracts(pub Vec<Contract>);

impl fmt::Display for Contracts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No contracts recorded.");
        }
        for contract in &self.0 {
            write!(f, "{contract}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying an employee's salary payments.
pub struct Salaries(pub Vec<Salary>);

impl fmt::Display for Salaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No salary payments recorded.");
        }
        for salary in &self.0 {
            write!(f, "{salary}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying an interviewer's assignments.
pub struct Assignments(pub Vec<Assignment>);

impl fmt::Display for Assignments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No assignments found.");
        }
        for assignment in &self.0 {
            let id = assignment.id.unwrap_or_default();
            writeln!(
                f,
                "- {id}. {} (due {}, {} calls)",
                assignment.description,
                DisplayDate(&assignment.due),
                assignment.planned_calls
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying collections of questionnaires.
pub struct Questionnaires(pub Vec<Questionnaire>);

impl fmt::Display for Questionnaires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No questionnaires found.");
        }
        for questionnaire in &self.0 {
            let id = questionnaire.id.unwrap_or_default();
            writeln!(
                f,
                "- {id}. {} ({} questions)",
                questionnaire.title,
                questionnaire.questions.len()
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying collections of questionnaire responses.
pub struct Responses(pub Vec<QuestionnaireResponse>);

impl fmt::Display for Responses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No responses found.");
        }
        for response in &self.0 {
            write!(f, "{response}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Role;

    fn sample_employee() -> Employee {
        Employee {
            id: Some(7),
            last_name: "Dupont".to_string(),
            first_name: "Marie".to_string(),
            email: None,
            phone: None,
            position: None,
            department: Some("Opérations".to_string()),
            role: Some(Role::Supervisor),
            active: Some(true),
            hired_on: None,
            staff_number: None,
            salary: None,
        }
    }

    fn sample_study() -> Study {
        Study {
            id: Some(1),
            name: "Étude de marché".to_string(),
            start: date(2023, 10, 1),
            end: date(2023, 11, 15),
            quota_target: 1000,
            supervisor: Some(sample_employee()),
            interviewers: vec![],
            quotas: vec![],
            assignments: vec![],
        }
    }

    #[test]
    fn test_employees_display() {
        let output = format!("{}", Employees(vec![sample_employee()]));
        assert!(output.contains("7. Marie Dupont"));
        assert!(output.contains("SUPERVISEUR"));
        assert!(output.contains("(Opérations)"));

        let empty = format!("{}", Employees(vec![]));
        assert_eq!(empty, "No employees found.\n");
    }

    #[test]
    fn test_studies_display() {
        let output = format!("{}", Studies(vec![sample_study()]));
        assert!(output.contains("## Étude de marché (ID: 1) (0/1000)"));
        assert!(output.contains("Oct 01, 2023 → Nov 15, 2023"));
        assert!(output.contains("Marie Dupont"));

        let empty = format!("{}", Studies(vec![]));
        assert_eq!(empty, "No studies found.\n");
    }

    #[test]
    fn test_assignments_display_empty() {
        let output = format!("{}", Assignments(vec![]));
        assert_eq!(output, "No assignments found.\n");
    }
}
