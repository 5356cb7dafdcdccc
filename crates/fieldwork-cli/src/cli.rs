//! Command handlers bridging parsed arguments to the API client.
//!
//! Each handler converts its CLI arguments into core parameters, calls
//! the client, and formats the outcome through the core display types.
//! Mutating commands follow the get-before-delete/update pattern so the
//! user always sees the record they touched.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use jiff::civil::Date;
use jiff::Zoned;

use fieldwork_core::display::{
    Absences, Assignments, Contracts, CreateResult, DeleteResult, Employees, OperationStatus,
    Questionnaires, Requests, Responses, Salaries, Studies, UpdateResult,
};
use fieldwork_core::models::{Interviewer, Role, ScheduledStudy};
use fieldwork_core::params::AddRequest;
use fieldwork_core::planner::{
    classify_status, required_interviewers, ScheduleBoard, ScheduleEntry,
};
use fieldwork_core::{ApiClient, Session};

use crate::args::{
    EmployeeCommands, HrCommands, QuestionnaireCommands, ScheduleCommands, SessionCommands,
    StudyCommands, TaskCommands,
};
use crate::renderer::TerminalRenderer;

/// Command dispatcher holding the API client and the output renderer.
pub struct Cli {
    api: ApiClient,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new dispatcher.
    pub fn new(api: ApiClient, renderer: TerminalRenderer) -> Self {
        Self { api, renderer }
    }

    fn today() -> Date {
        Zoned::now().date()
    }

    /// Handle `fw employee ...` commands.
    pub async fn handle_employee_command(self, command: EmployeeCommands) -> Result<()> {
        match command {
            EmployeeCommands::Create(args) => {
                let created = self.api.create_employee(&args.into()).await?;
                self.renderer.render(&CreateResult::new(created).to_string())
            }
            EmployeeCommands::List(args) => {
                let employees = match args.role {
                    Some(role) => self.api.employees_by_role(role.into()).await?,
                    None => self.api.employees().await?,
                };
                self.renderer
                    .render(&format!("# Employees\n\n{}", Employees(employees)))
            }
            EmployeeCommands::Show(args) => {
                let employee = self.api.employee(args.id).await?;
                self.renderer.render(&employee.to_string())
            }
            EmployeeCommands::Update(args) => {
                let mut employee = self.api.employee(args.id).await?;
                let mut changes = Vec::new();

                if let Some(value) = args.last_name {
                    employee.last_name = value;
                    changes.push("Updated last name".to_string());
                }
                if let Some(value) = args.first_name {
                    employee.first_name = value;
                    changes.push("Updated first name".to_string());
                }
                if let Some(value) = args.email {
                    employee.email = Some(value);
                    changes.push("Updated email".to_string());
                }
                if let Some(value) = args.phone {
                    employee.phone = Some(value);
                    changes.push("Updated phone".to_string());
                }
                if let Some(value) = args.position {
                    employee.position = Some(value);
                    changes.push("Updated position".to_string());
                }
                if let Some(value) = args.department {
                    employee.department = Some(value);
                    changes.push("Updated department".to_string());
                }
                if let Some(value) = args.role {
                    employee.role = Some(value.into());
                    changes.push("Updated role".to_string());
                }
                if let Some(value) = args.active {
                    employee.active = Some(value);
                    changes.push(if value {
                        "Marked active".to_string()
                    } else {
                        "Marked inactive".to_string()
                    });
                }
                if let Some(value) = args.salary {
                    employee.salary = Some(value);
                    changes.push("Updated salary".to_string());
                }

                let updated = self.api.update_employee(args.id, &employee).await?;
                self.renderer
                    .render(&UpdateResult::with_changes(updated, changes).to_string())
            }
            EmployeeCommands::Delete(args) => {
                if !args.confirm {
                    return self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Deletion is permanent; pass --confirm to delete employee {}",
                            args.id
                        ))
                        .to_string(),
                    );
                }
                // Get before delete so the confirmation names the record
                let employee = self.api.employee(args.id).await?;
                self.api.delete_employee(args.id).await?;
                self.renderer.render(&DeleteResult::new(employee).to_string())
            }
        }
    }

    /// Handle `fw hr ...` commands.
    pub async fn handle_hr_command(self, command: HrCommands) -> Result<()> {
        match command {
            HrCommands::Absences(args) => {
                let absences = self.api.absences(args.employee_id).await?;
                self.renderer
                    .render(&format!("# Absences\n\n{}", Absences(absences)))
            }
            HrCommands::AddAbsence(args) => {
                let absence = self.api.add_absence(args.into()).await?;
                self.renderer.render(&format!(
                    "{}{absence}",
                    OperationStatus::success("Absence recorded".to_string())
                ))
            }
            HrCommands::Requests(args) => {
                let requests = self.api.requests(args.employee_id).await?;
                self.renderer
                    .render(&format!("# Administrative Requests\n\n{}", Requests(requests)))
            }
            HrCommands::AddRequest(args) => {
                let params = AddRequest {
                    employee_id: args.employee_id,
                    kind: args.kind,
                    description: args.description,
                    requested_on: args.date.unwrap_or_else(Self::today),
                };
                let request = self.api.add_request(params).await?;
                self.renderer.render(&format!(
                    "{}{request}",
                    OperationStatus::success("Administrative request filed".to_string())
                ))
            }
            HrCommands::Approve(args) => {
                let request = self.api.approve_request(args.request_id).await?;
                self.renderer.render(&format!(
                    "{}{request}",
                    OperationStatus::success("Request approved".to_string())
                ))
            }
            HrCommands::Refuse(args) => {
                let request = self.api.refuse_request(args.request_id).await?;
                self.renderer.render(&format!(
                    "{}{request}",
                    OperationStatus::success("Request refused".to_string())
                ))
            }
            HrCommands::Contracts(args) => {
                let contracts = self.api.contracts(args.employee_id).await?;
                self.renderer
                    .render(&format!("# Contracts\n\n{}", Contracts(contracts)))
            }
            HrCommands::AddContract(args) => {
                let contract = self.api.add_contract(args.into()).await?;
                self.renderer.render(&format!(
                    "{}{contract}",
                    OperationStatus::success("Contract recorded".to_string())
                ))
            }
            HrCommands::Salaries(args) => {
                let salaries = self.api.salaries(args.employee_id).await?;
                self.renderer
                    .render(&format!("# Salary Payments\n\n{}", Salaries(salaries)))
            }
            HrCommands::AddSalary(args) => {
                let salary = self.api.add_salary(args.into()).await?;
                self.renderer.render(&format!(
                    "{}{salary}",
                    OperationStatus::success("Salary payment recorded".to_string())
                ))
            }
        }
    }

    /// Handle `fw study ...` commands.
    pub async fn handle_study_command(self, command: StudyCommands) -> Result<()> {
        match command {
            StudyCommands::Create(args) => {
                let created = self.api.create_study(args.into()).await?;
                self.renderer.render(&CreateResult::new(created).to_string())
            }
            StudyCommands::List => {
                let studies = self.api.studies().await?;
                self.renderer
                    .render(&format!("# Studies\n\n{}", Studies(studies)))
            }
            StudyCommands::Show(args) => {
                let study = self.api.study(args.id).await?;
                self.renderer.render(&study.to_string())
            }
            StudyCommands::Update(args) => {
                let mut study = self.api.study(args.id).await?;
                let mut changes = Vec::new();

                if let Some(value) = args.name {
                    study.name = value;
                    changes.push("Updated name".to_string());
                }
                if let Some(value) = args.start {
                    study.start = value;
                    changes.push("Updated start date".to_string());
                }
                if let Some(value) = args.end {
                    study.end = value;
                    changes.push("Updated end date".to_string());
                }
                if let Some(value) = args.quota_target {
                    study.quota_target = value;
                    changes.push("Updated quota target".to_string());
                }
                ensure!(
                    study.start <= study.end,
                    "end date {} must not precede start date {}",
                    study.end,
                    study.start
                );

                let updated = self.api.update_study(args.id, &study).await?;
                self.renderer
                    .render(&UpdateResult::with_changes(updated, changes).to_string())
            }
            StudyCommands::Delete(args) => {
                if !args.confirm {
                    return self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Deletion is permanent; pass --confirm to delete study {}",
                            args.id
                        ))
                        .to_string(),
                    );
                }
                let study = self.api.study(args.id).await?;
                self.api.delete_study(args.id).await?;
                self.renderer.render(&DeleteResult::new(study).to_string())
            }
            StudyCommands::Assign(args) => {
                let params = args.into();
                let study = self.api.assign_interviewer(params).await?;
                self.renderer.render(&format!(
                    "{}\n{study}",
                    OperationStatus::success(format!(
                        "Interviewer {} assigned to study {}",
                        params.employee_id, params.study_id
                    ))
                ))
            }
            StudyCommands::Unassign(args) => {
                let params = args.into();
                let study = self.api.remove_interviewer(params).await?;
                self.renderer.render(&format!(
                    "{}\n{study}",
                    OperationStatus::success(format!(
                        "Interviewer {} removed from study {}",
                        params.employee_id, params.study_id
                    ))
                ))
            }
            StudyCommands::Supervisor(args) => {
                let supervisor = self.api.study_supervisor(args.id).await?;
                self.renderer.render(&supervisor.to_string())
            }
            StudyCommands::Interviewers(args) => {
                let interviewers = self.api.study_interviewers(args.id).await?;
                self.renderer
                    .render(&format!("# Interviewers\n\n{}", Employees(interviewers)))
            }
            StudyCommands::BySupervisor(args) => {
                let studies = self.api.studies_by_supervisor(args.employee_id).await?;
                self.renderer
                    .render(&format!("# Studies\n\n{}", Studies(studies)))
            }
            StudyCommands::ByInterviewer(args) => {
                let studies = self.api.studies_by_interviewer(args.employee_id).await?;
                self.renderer
                    .render(&format!("# Studies\n\n{}", Studies(studies)))
            }
        }
    }

    /// Handle `fw task ...` commands.
    pub async fn handle_task_command(self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Create(args) => {
                let assignment = self.api.create_assignment(args.into()).await?;
                self.renderer.render(&format!(
                    "{}\n{assignment}",
                    OperationStatus::success("Assignment created".to_string())
                ))
            }
            TaskCommands::List(args) => {
                let assignments = self
                    .api
                    .assignments_for_interviewer(args.interviewer_id)
                    .await?;
                self.renderer
                    .render(&format!("# Assignments\n\n{}", Assignments(assignments)))
            }
        }
    }

    /// Handle `fw questionnaire ...` commands.
    pub async fn handle_questionnaire_command(
        self,
        command: QuestionnaireCommands,
    ) -> Result<()> {
        match command {
            QuestionnaireCommands::Create(args) => {
                let created = self.api.create_questionnaire(args.into()).await?;
                self.renderer.render(&CreateResult::new(created).to_string())
            }
            QuestionnaireCommands::List => {
                let questionnaires = self.api.questionnaires().await?;
                self.renderer.render(&format!(
                    "# Questionnaires\n\n{}",
                    Questionnaires(questionnaires)
                ))
            }
            QuestionnaireCommands::Show(args) => {
                let questionnaire = self.api.questionnaire(args.id).await?;
                self.renderer.render(&questionnaire.to_string())
            }
            QuestionnaireCommands::Questions(args) => {
                let questions = self.api.questions(args.id).await?;
                let mut output = String::from("# Questions\n\n");
                if questions.is_empty() {
                    output.push_str("No questions found.\n");
                } else {
                    for question in &questions {
                        output.push_str(&question.to_string());
                    }
                }
                self.renderer.render(&output)
            }
            QuestionnaireCommands::AddQuestion(args) => {
                let question = self.api.add_question(args.into()).await?;
                self.renderer.render(&format!(
                    "{}\n{question}",
                    OperationStatus::success("Question added".to_string())
                ))
            }
            QuestionnaireCommands::Submit(args) => {
                let response = self.api.submit_response(args.into()).await?;
                self.renderer.render(&format!(
                    "{}\n{response}",
                    OperationStatus::success("Response submitted".to_string())
                ))
            }
            QuestionnaireCommands::Responses(args) => {
                let responses = self.api.responses_by_questionnaire(args.id).await?;
                self.renderer
                    .render(&format!("# Responses\n\n{}", Responses(responses)))
            }
            QuestionnaireCommands::ByInterviewer(args) => {
                let responses = self.api.responses_by_interviewer(args.id).await?;
                self.renderer
                    .render(&format!("# Responses\n\n{}", Responses(responses)))
            }
        }
    }

    /// Handle `fw schedule ...` commands.
    pub async fn handle_schedule_command(self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Board(args) => {
                let studies = self.api.studies().await?;
                let roster = self.interviewer_roster(args.productivity).await?;
                let snapshots: Vec<ScheduledStudy> =
                    studies.iter().map(ScheduledStudy::from).collect();
                let board =
                    ScheduleBoard::build(snapshots, &roster, args.on.unwrap_or_else(Self::today));
                self.renderer.render(&board.to_string())
            }
            ScheduleCommands::Status(args) => {
                let study = self.api.study(args.id).await?;
                let roster = self.interviewer_roster(args.productivity).await?;
                let snapshot = ScheduledStudy::from(&study);
                let on = args.on.unwrap_or_else(Self::today);
                let status = classify_status(&snapshot, on);
                let required = required_interviewers(&snapshot, &roster);
                let entry = ScheduleEntry {
                    study: snapshot,
                    status,
                    required_interviewers: required,
                };
                self.renderer.render(&entry.to_string())
            }
        }
    }

    /// Fetch the interviewer-role employees as a scheduling roster.
    ///
    /// Employee records carry no productivity figure, so the supplied
    /// per-day value applies to every interviewer.
    async fn interviewer_roster(&self, productivity: f64) -> Result<Vec<Interviewer>> {
        let employees = self.api.employees_by_role(Role::Interviewer).await?;
        Ok(employees
            .iter()
            .map(|employee| Interviewer::from_employee(employee, productivity))
            .collect())
    }
}

/// Handle `fw session ...` commands.
///
/// Session management works directly on the token store and never
/// touches the network, so it does not need an API client.
pub fn handle_session_command(
    command: SessionCommands,
    session_file: Option<PathBuf>,
    renderer: &TerminalRenderer,
) -> Result<()> {
    let session = Session::load(session_file)?;
    match command {
        SessionCommands::Login(args) => {
            session.remember(&args.token)?;
            renderer.render(&OperationStatus::success("Session token stored".to_string()).to_string())
        }
        SessionCommands::Logout => {
            session.forget();
            renderer.render(&OperationStatus::success("Session token cleared".to_string()).to_string())
        }
        SessionCommands::Show => {
            let body = match session.token() {
                Some(token) => {
                    let prefix: String = token.chars().take(4).collect();
                    let store = session
                        .store_path()
                        .map_or("in-memory".to_string(), |path| path.display().to_string());
                    format!("# Session\n\n- Token: {prefix}…\n- Store: {store}\n")
                }
                None => "# Session\n\nNot logged in.\n".to_string(),
            };
            renderer.render(&body)
        }
    }
}
