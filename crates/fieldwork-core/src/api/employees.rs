//! Employee endpoints.

use crate::{
    error::Result,
    models::{Employee, Role},
};

const EMPLOYEES_PATH: &str = "/api/employees";

impl super::ApiClient {
    /// Lists every employee.
    pub async fn employees(&self) -> Result<Vec<Employee>> {
        self.get_json(EMPLOYEES_PATH).await
    }

    /// Retrieves an employee by ID.
    pub async fn employee(&self, id: u64) -> Result<Employee> {
        self.get_json(&format!("{EMPLOYEES_PATH}/{id}"))
            .await
            .map_err(|e| e.for_resource("Employee", id))
    }

    /// Creates a new employee record and returns it with its assigned ID.
    pub async fn create_employee(&self, employee: &Employee) -> Result<Employee> {
        self.post_json(EMPLOYEES_PATH, employee).await
    }

    /// Replaces an employee record.
    pub async fn update_employee(&self, id: u64, employee: &Employee) -> Result<Employee> {
        self.put_json(&format!("{EMPLOYEES_PATH}/{id}"), employee)
            .await
            .map_err(|e| e.for_resource("Employee", id))
    }

    /// Permanently deletes an employee record.
    pub async fn delete_employee(&self, id: u64) -> Result<()> {
        self.delete(&format!("{EMPLOYEES_PATH}/{id}"))
            .await
            .map_err(|e| e.for_resource("Employee", id))
    }

    /// Lists employees holding the given platform role.
    pub async fn employees_by_role(&self, role: Role) -> Result<Vec<Employee>> {
        self.get_json(&format!("{EMPLOYEES_PATH}/role/{}", role.as_str()))
            .await
    }
}
