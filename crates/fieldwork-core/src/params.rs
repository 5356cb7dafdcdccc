//! Parameter structures for fieldwork operations.
//!
//! Shared parameter types that can be used across different interfaces
//! (CLI today, other front ends later) without framework-specific derives.
//! Interface layers wrap these with their own argument structs (clap
//! derives in the CLI) and convert via `From`, keeping framework concerns
//! out of the core.
//!
//! Create parameters validate what the original front end validated in
//! its forms — non-empty names and ordered date ranges — and convert into
//! wire models through `TryFrom`, so an invalid payload never reaches the
//! network layer.

use jiff::civil::Date;

use crate::{
    error::{ApiError, Result},
    models::{
        Absence, AdministrativeRequest, Answer, Assignment, Contract, Question, Questionnaire,
        QuestionnaireRef, QuestionnaireResponse, Salary, Study,
    },
};

/// Parameters for creating a study.
#[derive(Debug, Clone)]
pub struct CreateStudy {
    /// Display name of the study
    pub name: String,
    /// First day of collection
    pub start: Date,
    /// Last day of collection
    pub end: Date,
    /// Total number of interviews to collect
    pub quota_target: u32,
}

impl CreateStudy {
    /// Check the invariants the backend assumes but does not enforce.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::invalid_input("name").with_reason("must not be empty"));
        }
        if self.start > self.end {
            return Err(ApiError::invalid_input("end")
                .with_reason(format!("must not precede start date {}", self.start)));
        }
        Ok(())
    }
}

impl TryFrom<CreateStudy> for Study {
    type Error = ApiError;

    fn try_from(params: CreateStudy) -> Result<Self> {
        params.validate()?;
        Ok(Study {
            id: None,
            name: params.name,
            start: params.start,
            end: params.end,
            quota_target: params.quota_target,
            supervisor: None,
            interviewers: vec![],
            quotas: vec![],
            assignments: vec![],
        })
    }
}

/// Parameters for the study/interviewer relationship endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AssignInterviewer {
    /// The study to modify
    pub study_id: u64,
    /// The interviewer to assign or remove
    pub employee_id: u64,
}

/// Parameters for creating an interviewer assignment.
#[derive(Debug, Clone)]
pub struct CreateAssignment {
    /// What the interviewer is asked to do
    pub description: String,
    /// Due date
    pub due: Date,
    /// Number of calls planned
    pub planned_calls: u32,
    /// Identifier of the assigned interviewer
    pub interviewer_id: u64,
}

impl TryFrom<CreateAssignment> for Assignment {
    type Error = ApiError;

    fn try_from(params: CreateAssignment) -> Result<Self> {
        if params.description.trim().is_empty() {
            return Err(ApiError::invalid_input("description").with_reason("must not be empty"));
        }
        Ok(Assignment {
            id: None,
            description: params.description,
            assigned_on: None,
            due: params.due,
            planned_calls: params.planned_calls,
            interviewer_id: params.interviewer_id,
        })
    }
}

/// Parameters for recording an absence.
#[derive(Debug, Clone)]
pub struct AddAbsence {
    /// Employee the absence belongs to
    pub employee_id: u64,
    /// First day of the absence
    pub start: Date,
    /// Last day of the absence
    pub end: Date,
    /// Stated reason
    pub reason: String,
}

impl TryFrom<AddAbsence> for Absence {
    type Error = ApiError;

    fn try_from(params: AddAbsence) -> Result<Self> {
        if params.start > params.end {
            return Err(ApiError::invalid_input("end")
                .with_reason(format!("must not precede start date {}", params.start)));
        }
        Ok(Absence {
            id: None,
            start: params.start,
            end: params.end,
            reason: params.reason,
            employee: None,
        })
    }
}

/// Parameters for filing an administrative request.
#[derive(Debug, Clone)]
pub struct AddRequest {
    /// Employee the request belongs to
    pub employee_id: u64,
    /// Request category
    pub kind: String,
    /// Free-form details
    pub description: Option<String>,
    /// Submission date
    pub requested_on: Date,
}

impl From<AddRequest> for AdministrativeRequest {
    fn from(params: AddRequest) -> Self {
        AdministrativeRequest {
            id: None,
            kind: params.kind,
            description: params.description,
            status: None,
            requested_on: params.requested_on,
            employee: None,
        }
    }
}

/// Parameters for recording a contract.
#[derive(Debug, Clone)]
pub struct AddContract {
    /// Employee the contract belongs to
    pub employee_id: u64,
    /// Contract start date
    pub start: Date,
    /// Contract end date
    pub end: Date,
    /// Contract kind, e.g. CDI or CDD
    pub kind: String,
}

impl TryFrom<AddContract> for Contract {
    type Error = ApiError;

    fn try_from(params: AddContract) -> Result<Self> {
        if params.start > params.end {
            return Err(ApiError::invalid_input("end")
                .with_reason(format!("must not precede start date {}", params.start)));
        }
        Ok(Contract {
            id: None,
            start: params.start,
            end: params.end,
            kind: params.kind,
            employee: None,
        })
    }
}

/// Parameters for recording a salary payment.
#[derive(Debug, Clone)]
pub struct AddSalary {
    /// Employee the payment belongs to
    pub employee_id: u64,
    /// Paid amount
    pub amount: f64,
    /// Payment date
    pub paid_on: Date,
}

impl TryFrom<AddSalary> for Salary {
    type Error = ApiError;

    fn try_from(params: AddSalary) -> Result<Self> {
        if params.amount <= 0.0 {
            return Err(ApiError::invalid_input("amount").with_reason("must be positive"));
        }
        Ok(Salary {
            id: None,
            amount: params.amount,
            paid_on: params.paid_on,
            employee: None,
        })
    }
}

/// Parameters for creating a questionnaire.
#[derive(Debug, Clone)]
pub struct CreateQuestionnaire {
    /// Questionnaire title
    pub title: String,
}

impl TryFrom<CreateQuestionnaire> for Questionnaire {
    type Error = ApiError;

    fn try_from(params: CreateQuestionnaire) -> Result<Self> {
        if params.title.trim().is_empty() {
            return Err(ApiError::invalid_input("title").with_reason("must not be empty"));
        }
        Ok(Questionnaire {
            id: None,
            title: params.title,
            questions: vec![],
        })
    }
}

/// Parameters for adding a question to a questionnaire.
#[derive(Debug, Clone)]
pub struct AddQuestion {
    /// Parent questionnaire
    pub questionnaire_id: u64,
    /// Question wording
    pub text: String,
    /// Allowed answers; a multiple-choice question needs at least two
    pub choices: Vec<String>,
}

impl TryFrom<AddQuestion> for Question {
    type Error = ApiError;

    fn try_from(params: AddQuestion) -> Result<Self> {
        if params.text.trim().is_empty() {
            return Err(ApiError::invalid_input("text").with_reason("must not be empty"));
        }
        if params.choices.len() < 2 {
            return Err(
                ApiError::invalid_input("choices").with_reason("need at least two choices")
            );
        }
        Ok(Question {
            id: None,
            text: params.text,
            choices: params.choices,
            questionnaire: Some(QuestionnaireRef {
                id: params.questionnaire_id,
            }),
        })
    }
}

/// Parameters for submitting a completed questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitResponse {
    /// Submitting interviewer
    pub interviewer_id: u64,
    /// Answered questionnaire
    pub questionnaire_id: u64,
    /// `(question id, selected choice)` pairs
    pub answers: Vec<(u64, String)>,
}

impl TryFrom<SubmitResponse> for QuestionnaireResponse {
    type Error = ApiError;

    fn try_from(params: SubmitResponse) -> Result<Self> {
        if params.answers.is_empty() {
            return Err(ApiError::invalid_input("answers").with_reason("must not be empty"));
        }
        Ok(QuestionnaireResponse {
            id: None,
            interviewer_id: params.interviewer_id,
            questionnaire_id: params.questionnaire_id,
            answers: params
                .answers
                .into_iter()
                .map(|(question_id, selected_choice)| Answer {
                    id: None,
                    question_id,
                    selected_choice,
                    response_id: None,
                })
                .collect(),
        })
    }
}
