//! Assignment endpoints.

use crate::{
    error::Result,
    models::Assignment,
    params::CreateAssignment,
};

const ASSIGNMENTS_PATH: &str = "/api/taches";

impl super::ApiClient {
    /// Lists the assignments handed to an interviewer.
    pub async fn assignments_for_interviewer(&self, employee_id: u64) -> Result<Vec<Assignment>> {
        self.get_json(&format!("{ASSIGNMENTS_PATH}/enqueteur/{employee_id}"))
            .await
    }

    /// Creates an assignment and returns it with its assigned ID.
    pub async fn create_assignment(&self, params: CreateAssignment) -> Result<Assignment> {
        let assignment = Assignment::try_from(params)?;
        self.post_json(ASSIGNMENTS_PATH, &assignment).await
    }
}
