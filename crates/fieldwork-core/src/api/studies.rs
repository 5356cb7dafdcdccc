//! Study endpoints, including the interviewer-relationship and
//! association lookups.

use crate::{
    error::Result,
    models::{Employee, Study},
    params::{AssignInterviewer, CreateStudy},
};

const STUDIES_PATH: &str = "/api/etudes";

impl super::ApiClient {
    /// Lists every study.
    pub async fn studies(&self) -> Result<Vec<Study>> {
        self.get_json(STUDIES_PATH).await
    }

    /// Retrieves a study by ID.
    pub async fn study(&self, id: u64) -> Result<Study> {
        self.get_json(&format!("{STUDIES_PATH}/{id}"))
            .await
            .map_err(|e| e.for_resource("Study", id))
    }

    /// Creates a new study and returns it with its assigned ID.
    pub async fn create_study(&self, params: CreateStudy) -> Result<Study> {
        let study = Study::try_from(params)?;
        self.post_json(STUDIES_PATH, &study).await
    }

    /// Replaces a study.
    pub async fn update_study(&self, id: u64, study: &Study) -> Result<Study> {
        self.put_json(&format!("{STUDIES_PATH}/{id}"), study)
            .await
            .map_err(|e| e.for_resource("Study", id))
    }

    /// Permanently deletes a study.
    pub async fn delete_study(&self, id: u64) -> Result<()> {
        self.delete(&format!("{STUDIES_PATH}/{id}"))
            .await
            .map_err(|e| e.for_resource("Study", id))
    }

    /// Assigns an interviewer to a study; returns the updated study.
    pub async fn assign_interviewer(&self, params: AssignInterviewer) -> Result<Study> {
        self.post_empty(&format!(
            "{STUDIES_PATH}/{}/enqueteurs/{}",
            params.study_id, params.employee_id
        ))
        .await
        .map_err(|e| e.for_resource("Study", params.study_id))
    }

    /// Removes an interviewer from a study; returns the updated study.
    pub async fn remove_interviewer(&self, params: AssignInterviewer) -> Result<Study> {
        self.delete_json(&format!(
            "{STUDIES_PATH}/{}/enqueteurs/{}",
            params.study_id, params.employee_id
        ))
        .await
        .map_err(|e| e.for_resource("Study", params.study_id))
    }

    /// Retrieves the supervisor of a study.
    pub async fn study_supervisor(&self, study_id: u64) -> Result<Employee> {
        self.get_json(&format!("{STUDIES_PATH}/{study_id}/superviseur"))
            .await
            .map_err(|e| e.for_resource("Study", study_id))
    }

    /// Lists the interviewers assigned to a study.
    pub async fn study_interviewers(&self, study_id: u64) -> Result<Vec<Employee>> {
        self.get_json(&format!("{STUDIES_PATH}/{study_id}/enqueteurs"))
            .await
            .map_err(|e| e.for_resource("Study", study_id))
    }

    /// Lists the studies supervised by an employee.
    pub async fn studies_by_supervisor(&self, supervisor_id: u64) -> Result<Vec<Study>> {
        self.get_json(&format!("{STUDIES_PATH}/superviseur/{supervisor_id}"))
            .await
    }

    /// Lists the studies an interviewer is assigned to.
    pub async fn studies_by_interviewer(&self, employee_id: u64) -> Result<Vec<Study>> {
        self.get_json(&format!("{STUDIES_PATH}/enqueteur/{employee_id}"))
            .await
    }
}
