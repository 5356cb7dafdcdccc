//! Questionnaire, question, and response endpoints.

use crate::{
    error::Result,
    models::{Question, Questionnaire, QuestionnaireResponse},
    params::{AddQuestion, CreateQuestionnaire, SubmitResponse},
};

const QUESTIONNAIRES_PATH: &str = "/api/questionnaires";
const QUESTIONS_PATH: &str = "/api/questions";
const RESPONSES_PATH: &str = "/api/reponses";

impl super::ApiClient {
    /// Lists every questionnaire.
    pub async fn questionnaires(&self) -> Result<Vec<Questionnaire>> {
        self.get_json(QUESTIONNAIRES_PATH).await
    }

    /// Retrieves a questionnaire by ID.
    pub async fn questionnaire(&self, id: u64) -> Result<Questionnaire> {
        self.get_json(&format!("{QUESTIONNAIRES_PATH}/{id}"))
            .await
            .map_err(|e| e.for_resource("Questionnaire", id))
    }

    /// Creates a questionnaire and returns it with its assigned ID.
    pub async fn create_questionnaire(
        &self,
        params: CreateQuestionnaire,
    ) -> Result<Questionnaire> {
        let questionnaire = Questionnaire::try_from(params)?;
        self.post_json(QUESTIONNAIRES_PATH, &questionnaire).await
    }

    /// Lists the questions of a questionnaire.
    pub async fn questions(&self, questionnaire_id: u64) -> Result<Vec<Question>> {
        self.get_json(&format!(
            "{QUESTIONS_PATH}/by-questionnaire/{questionnaire_id}"
        ))
        .await
        .map_err(|e| e.for_resource("Questionnaire", questionnaire_id))
    }

    /// Adds a question to a questionnaire.
    pub async fn add_question(&self, params: AddQuestion) -> Result<Question> {
        let question = Question::try_from(params)?;
        self.post_json(QUESTIONS_PATH, &question).await
    }

    /// Submits a completed questionnaire.
    pub async fn submit_response(&self, params: SubmitResponse) -> Result<QuestionnaireResponse> {
        let response = QuestionnaireResponse::try_from(params)?;
        self.post_json(&format!("{RESPONSES_PATH}/questionnaire"), &response)
            .await
    }

    /// Lists the responses collected for a questionnaire.
    pub async fn responses_by_questionnaire(
        &self,
        questionnaire_id: u64,
    ) -> Result<Vec<QuestionnaireResponse>> {
        self.get_json(&format!(
            "{RESPONSES_PATH}/questionnaire/{questionnaire_id}"
        ))
        .await
    }

    /// Lists the responses submitted by an interviewer.
    pub async fn responses_by_interviewer(
        &self,
        employee_id: u64,
    ) -> Result<Vec<QuestionnaireResponse>> {
        self.get_json(&format!("{RESPONSES_PATH}/enqueteur/{employee_id}"))
            .await
    }
}
