//! Display implementations for domain models.
//!
//! All Display implementations produce markdown for rich terminal
//! rendering: a header with the resource ID and name, metadata bullets,
//! and nested sections for associated records. Compact list formatting
//! lives with the collection wrappers in [`crate::display::collections`].

use std::fmt;

use super::datetime::DisplayDate;
use crate::models::{
    Absence, AdministrativeRequest, Assignment, Contract, Employee, HealthStatus, Question,
    Questionnaire, QuestionnaireResponse, Quota, RequestStatus, Role, Salary, Study,
};

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Header line with an optional backend-assigned ID.
fn write_header(f: &mut fmt::Formatter<'_>, id: Option<u64>, name: &str) -> fmt::Result {
    match id {
        Some(id) => writeln!(f, "# {id}. {name}"),
        None => writeln!(f, "# {name}"),
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.id, &self.full_name())?;
        writeln!(f)?;

        if let Some(role) = self.role {
            writeln!(f, "- Role: {role}")?;
        }
        if let Some(position) = &self.position {
            writeln!(f, "- Position: {position}")?;
        }
        if let Some(department) = &self.department {
            writeln!(f, "- Department: {department}")?;
        }
        if let Some(email) = &self.email {
            writeln!(f, "- Email: {email}")?;
        }
        if let Some(phone) = &self.phone {
            writeln!(f, "- Phone: {phone}")?;
        }
        if let Some(active) = self.active {
            writeln!(f, "- Active: {}", if active { "yes" } else { "no" })?;
        }
        if let Some(hired_on) = &self.hired_on {
            writeln!(f, "- Hired: {}", DisplayDate(hired_on))?;
        }
        if let Some(staff_number) = &self.staff_number {
            writeln!(f, "- Staff number: {staff_number}")?;
        }
        if let Some(salary) = self.salary {
            writeln!(f, "- Salary: {salary:.2}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Study {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.id, &self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(
            f,
            "- Window: {} → {}",
            DisplayDate(&self.start),
            DisplayDate(&self.end)
        )?;
        writeln!(
            f,
            "- Quota: {}/{}",
            self.quota_completed(),
            self.quota_target
        )?;
        if let Some(supervisor) = &self.supervisor {
            writeln!(f, "- Supervisor: {}", supervisor.full_name())?;
        }

        if !self.interviewers.is_empty() {
            writeln!(f, "\n## Interviewers")?;
            writeln!(f)?;
            for interviewer in &self.interviewers {
                match interviewer.id {
                    Some(id) => writeln!(f, "- {id}. {}", interviewer.full_name())?,
                    None => writeln!(f, "- {}", interviewer.full_name())?,
                }
            }
        }

        if !self.quotas.is_empty() {
            writeln!(f, "\n## Quotas")?;
            writeln!(f)?;
            for quota in &self.quotas {
                write!(f, "{quota}")?;
            }
        }

        if !self.assignments.is_empty() {
            writeln!(f, "\n## Assignments")?;
            writeln!(f)?;
            for assignment in &self.assignments {
                write!(f, "{assignment}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: {}/{}",
            self.region, self.completed, self.target
        )?;
        if let Some(interviewer) = &self.interviewer {
            write!(f, " — {interviewer}")?;
        }
        if let Some(client) = &self.client {
            write!(f, " ({client})")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "### {id}. {}", self.description)?,
            None => writeln!(f, "### {}", self.description)?,
        }
        writeln!(f)?;
        writeln!(f, "- Due: {}", DisplayDate(&self.due))?;
        if let Some(assigned_on) = &self.assigned_on {
            writeln!(f, "- Assigned: {}", DisplayDate(assigned_on))?;
        }
        writeln!(f, "- Planned calls: {}", self.planned_calls)?;
        writeln!(f, "- Interviewer: {}", self.interviewer_id)?;
        Ok(())
    }
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} → {}: {}",
            DisplayDate(&self.start),
            DisplayDate(&self.end),
            self.reason
        )
    }
}

impl fmt::Display for AdministrativeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status.unwrap_or_default();
        match self.id {
            Some(id) => write!(f, "- {id}. {} [{status}]", self.kind)?,
            None => write!(f, "- {} [{status}]", self.kind)?,
        }
        write!(f, " — filed {}", DisplayDate(&self.requested_on))?;
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}: {} → {}",
            self.kind,
            DisplayDate(&self.start),
            DisplayDate(&self.end)
        )
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}: {:.2}", DisplayDate(&self.paid_on), self.amount)
    }
}

impl fmt::Display for Questionnaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.id, &self.title)?;

        if self.questions.is_empty() {
            writeln!(f, "\nNo questions in this questionnaire.")?;
        } else {
            writeln!(f)?;
            for question in &self.questions {
                write!(f, "{question}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "### {id}. {}", self.text)?,
            None => writeln!(f, "### {}", self.text)?,
        }
        writeln!(f)?;
        for choice in &self.choices {
            writeln!(f, "- {choice}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for QuestionnaireResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "## Response {id}")?,
            None => writeln!(f, "## Response")?,
        }
        writeln!(f)?;
        writeln!(f, "- Questionnaire: {}", self.questionnaire_id)?;
        writeln!(f, "- Interviewer: {}", self.interviewer_id)?;
        if !self.answers.is_empty() {
            writeln!(f)?;
            for answer in &self.answers {
                writeln!(
                    f,
                    "- Q{}: {}",
                    answer.question_id, answer.selected_choice
                )?;
            }
        }
        writeln!(f)
    }
}
