//! Questionnaire, question, and response models.

use serde::{Deserialize, Serialize};

/// A questionnaire: a titled list of multiple-choice questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Questionnaire {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Questionnaire title (`titre`)
    #[serde(rename = "titre")]
    pub title: String,

    /// Questions, when expanded by the backend
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Question wording (`texte`)
    #[serde(rename = "texte")]
    pub text: String,

    /// Allowed answers (`choix`)
    #[serde(rename = "choix")]
    pub choices: Vec<String>,

    /// Parent questionnaire reference, sent on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<QuestionnaireRef>,
}

/// Bare questionnaire reference used when creating questions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionnaireRef {
    /// Identifier of the referenced questionnaire
    pub id: u64,
}

/// A completed questionnaire submitted by an interviewer
/// (`reponseQuestionnaire`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionnaireResponse {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Identifier of the submitting interviewer (`enqueteurId`)
    #[serde(rename = "enqueteurId")]
    pub interviewer_id: u64,

    /// Identifier of the answered questionnaire (`questionnaireId`)
    #[serde(rename = "questionnaireId")]
    pub questionnaire_id: u64,

    /// Per-question answers (`reponses`)
    #[serde(rename = "reponses", default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<Answer>,
}

/// One selected choice within a questionnaire response
/// (`reponseQuestion`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    /// Unique identifier, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Identifier of the answered question (`questionId`)
    #[serde(rename = "questionId")]
    pub question_id: u64,

    /// The choice the interviewer selected (`choixSelectionne`)
    #[serde(rename = "choixSelectionne")]
    pub selected_choice: String,

    /// Parent response identifier, present on read paths
    /// (`reponseQuestionnaireId`)
    #[serde(
        rename = "reponseQuestionnaireId",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_id: Option<u64>,
}
