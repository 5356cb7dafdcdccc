//! HR endpoints: absences, administrative requests, contracts, salaries.
//!
//! Path spellings follow the backend exactly, including its mix of
//! `/absences/employee` and `/demandes/employe`.

use crate::{
    error::Result,
    models::{Absence, AdministrativeRequest, Contract, Salary},
    params::{AddAbsence, AddContract, AddRequest, AddSalary},
};

const ABSENCES_PATH: &str = "/absences/employee";
const REQUESTS_PATH: &str = "/demandes";
const CONTRACTS_PATH: &str = "/contrats/employe";
const SALARIES_PATH: &str = "/salaires/employe";

impl super::ApiClient {
    /// Lists an employee's recorded absences.
    pub async fn absences(&self, employee_id: u64) -> Result<Vec<Absence>> {
        self.get_json(&format!("{ABSENCES_PATH}/{employee_id}"))
            .await
    }

    /// Records an absence for an employee.
    pub async fn add_absence(&self, params: AddAbsence) -> Result<Absence> {
        let employee_id = params.employee_id;
        let absence = Absence::try_from(params)?;
        self.post_json(&format!("{ABSENCES_PATH}/{employee_id}"), &absence)
            .await
    }

    /// Lists an employee's administrative requests.
    pub async fn requests(&self, employee_id: u64) -> Result<Vec<AdministrativeRequest>> {
        self.get_json(&format!("{REQUESTS_PATH}/employe/{employee_id}"))
            .await
    }

    /// Files an administrative request for an employee.
    pub async fn add_request(&self, params: AddRequest) -> Result<AdministrativeRequest> {
        let employee_id = params.employee_id;
        let request = AdministrativeRequest::from(params);
        self.post_json(&format!("{REQUESTS_PATH}/employe/{employee_id}"), &request)
            .await
    }

    /// Approves a pending administrative request.
    pub async fn approve_request(&self, request_id: u64) -> Result<AdministrativeRequest> {
        self.put_empty(&format!("{REQUESTS_PATH}/{request_id}/valider"))
            .await
            .map_err(|e| e.for_resource("Administrative request", request_id))
    }

    /// Refuses a pending administrative request.
    pub async fn refuse_request(&self, request_id: u64) -> Result<AdministrativeRequest> {
        self.put_empty(&format!("{REQUESTS_PATH}/{request_id}/refuser"))
            .await
            .map_err(|e| e.for_resource("Administrative request", request_id))
    }

    /// Lists an employee's contracts.
    pub async fn contracts(&self, employee_id: u64) -> Result<Vec<Contract>> {
        self.get_json(&format!("{CONTRACTS_PATH}/{employee_id}"))
            .await
    }

    /// Records a contract for an employee.
    pub async fn add_contract(&self, params: AddContract) -> Result<Contract> {
        let employee_id = params.employee_id;
        let contract = Contract::try_from(params)?;
        self.post_json(&format!("{CONTRACTS_PATH}/{employee_id}"), &contract)
            .await
    }

    /// Lists an employee's salary payments.
    pub async fn salaries(&self, employee_id: u64) -> Result<Vec<Salary>> {
        self.get_json(&format!("{SALARIES_PATH}/{employee_id}"))
            .await
    }

    /// Records a salary payment for an employee.
    pub async fn add_salary(&self, params: AddSalary) -> Result<Salary> {
        let employee_id = params.employee_id;
        let salary = Salary::try_from(params)?;
        self.post_json(&format!("{SALARIES_PATH}/{employee_id}"), &salary)
            .await
    }
}
