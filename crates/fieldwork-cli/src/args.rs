//! Command-line interface definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → API Client
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap
//! derives (short/long flags, help text, value parsing) and converts it
//! into the corresponding `fieldwork_core::params` type via `From`, so
//! core parameter types stay free of clap attributes and the mapping is
//! verified at compile time.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use fieldwork_core::models::{Employee, Role};
use fieldwork_core::params::{
    AddAbsence, AddContract, AddQuestion, AddSalary, AssignInterviewer, CreateAssignment,
    CreateQuestionnaire, CreateStudy, SubmitResponse,
};
use jiff::civil::Date;

/// Main command-line interface for the Fieldwork operations console
///
/// Fieldwork is the terminal console of a field-survey operations
/// platform: employee and HR records, study definitions with quota
/// tracking, interviewer questionnaires and responses, task assignment,
/// and a scheduling view that classifies each study's health and
/// estimates staffing. Every command talks to the platform's REST
/// backend; nothing is stored locally except the session token.
#[derive(Parser)]
#[command(version, about, name = "fw")]
pub struct Args {
    /// Backend origin. Defaults to http://localhost:8081, or the
    /// FIELDWORK_API_URL environment variable when set
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token, overriding the stored session. Falls back to the
    /// FIELDWORK_TOKEN environment variable when set
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to the session token file. Defaults to
    /// $XDG_DATA_HOME/fieldwork/session
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Fieldwork CLI
///
/// One subcommand tree per backend resource, plus `schedule` for the
/// derived planning view and `session` for the stored bearer token.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage employee records
    #[command(alias = "e")]
    Employee {
        #[command(subcommand)]
        command: EmployeeCommands,
    },
    /// Manage HR records: absences, requests, contracts, salaries
    Hr {
        #[command(subcommand)]
        command: HrCommands,
    },
    /// Manage studies and their interviewer assignments
    #[command(alias = "s")]
    Study {
        #[command(subcommand)]
        command: StudyCommands,
    },
    /// Manage interviewer task assignments
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage questionnaires, questions, and responses
    #[command(alias = "q")]
    Questionnaire {
        #[command(subcommand)]
        command: QuestionnaireCommands,
    },
    /// Inspect the study schedule: health status and staffing estimates
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Manage the stored session token
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

// ============================================================================
// Employees
// ============================================================================

/// Create a new employee record
#[derive(ClapArgs)]
pub struct CreateEmployeeArgs {
    /// Family name
    pub last_name: String,
    /// Given name
    pub first_name: String,
    /// Contact email
    #[arg(short, long)]
    pub email: Option<String>,
    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Job title
    #[arg(short, long)]
    pub position: Option<String>,
    /// Department label
    #[arg(short, long)]
    pub department: Option<String>,
    /// Platform role
    #[arg(short, long)]
    pub role: Option<RoleArg>,
    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    pub hired_on: Option<Date>,
    /// Staff number
    #[arg(long)]
    pub staff_number: Option<String>,
    /// Monthly salary
    #[arg(long)]
    pub salary: Option<f64>,
}

impl From<CreateEmployeeArgs> for Employee {
    /// Convert CLI arguments to the creation payload
    ///
    /// New employees start active; the backend assigns the ID.
    fn from(val: CreateEmployeeArgs) -> Self {
        Employee {
            id: None,
            last_name: val.last_name,
            first_name: val.first_name,
            email: val.email,
            phone: val.phone,
            position: val.position,
            department: val.department,
            role: val.role.map(Into::into),
            active: Some(true),
            hired_on: val.hired_on,
            staff_number: val.staff_number,
            salary: val.salary,
        }
    }
}

/// List employees, optionally filtered by role
#[derive(ClapArgs)]
pub struct ListEmployeesArgs {
    /// Only show employees holding this role
    #[arg(short, long)]
    pub role: Option<RoleArg>,
}

/// Show details of a specific employee
#[derive(ClapArgs)]
pub struct ShowEmployeeArgs {
    /// Unique identifier of the employee
    pub id: u64,
}

/// Update an employee record
///
/// Only the provided fields change; everything else is preserved from
/// the current record.
#[derive(ClapArgs)]
pub struct UpdateEmployeeArgs {
    /// Unique identifier of the employee to update
    pub id: u64,
    /// Updated family name
    #[arg(long)]
    pub last_name: Option<String>,
    /// Updated given name
    #[arg(long)]
    pub first_name: Option<String>,
    /// Updated contact email
    #[arg(short, long)]
    pub email: Option<String>,
    /// Updated contact phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Updated job title
    #[arg(short, long)]
    pub position: Option<String>,
    /// Updated department label
    #[arg(short, long)]
    pub department: Option<String>,
    /// Updated platform role
    #[arg(short, long)]
    pub role: Option<RoleArg>,
    /// Mark the employee active or inactive
    #[arg(long)]
    pub active: Option<bool>,
    /// Updated monthly salary
    #[arg(long)]
    pub salary: Option<f64>,
}

/// Delete an employee record permanently
#[derive(ClapArgs)]
pub struct DeleteEmployeeArgs {
    /// Unique identifier of the employee to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Create a new employee record
    #[command(alias = "c")]
    Create(CreateEmployeeArgs),
    /// List employees
    #[command(aliases = ["l", "ls"])]
    List(ListEmployeesArgs),
    /// Show details of a specific employee
    #[command(alias = "s")]
    Show(ShowEmployeeArgs),
    /// Update an employee record
    #[command(alias = "u")]
    Update(UpdateEmployeeArgs),
    /// Delete an employee record permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteEmployeeArgs),
}

// ============================================================================
// HR records
// ============================================================================

/// Identify the employee whose HR records to operate on
#[derive(ClapArgs)]
pub struct EmployeeRecordsArgs {
    /// Unique identifier of the employee
    pub employee_id: u64,
}

/// Record an absence for an employee
#[derive(ClapArgs)]
pub struct AddAbsenceArgs {
    /// Unique identifier of the employee
    pub employee_id: u64,
    /// First day of the absence (YYYY-MM-DD)
    #[arg(long)]
    pub start: Date,
    /// Last day of the absence (YYYY-MM-DD)
    #[arg(long)]
    pub end: Date,
    /// Stated reason
    #[arg(short, long)]
    pub reason: String,
}

impl From<AddAbsenceArgs> for AddAbsence {
    fn from(val: AddAbsenceArgs) -> Self {
        AddAbsence {
            employee_id: val.employee_id,
            start: val.start,
            end: val.end,
            reason: val.reason,
        }
    }
}

/// File an administrative request for an employee
#[derive(ClapArgs)]
pub struct AddRequestArgs {
    /// Unique identifier of the employee
    pub employee_id: u64,
    /// Request category, e.g. "Congé" or "Attestation"
    pub kind: String,
    /// Free-form details
    #[arg(short, long)]
    pub description: Option<String>,
    /// Submission date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<Date>,
}

/// Decide a pending administrative request
#[derive(ClapArgs)]
pub struct DecideRequestArgs {
    /// Unique identifier of the request
    pub request_id: u64,
}

/// Record a contract for an employee
#[derive(ClapArgs)]
pub struct AddContractArgs {
    /// Unique identifier of the employee
    pub employee_id: u64,
    /// Contract start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Date,
    /// Contract end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Date,
    /// Contract kind, e.g. CDI or CDD
    #[arg(short, long)]
    pub kind: String,
}

impl From<AddContractArgs> for AddContract {
    fn from(val: AddContractArgs) -> Self {
        AddContract {
            employee_id: val.employee_id,
            start: val.start,
            end: val.end,
            kind: val.kind,
        }
    }
}

/// Record a salary payment for an employee
#[derive(ClapArgs)]
pub struct AddSalaryArgs {
    /// Unique identifier of the employee
    pub employee_id: u64,
    /// Paid amount
    #[arg(short, long)]
    pub amount: f64,
    /// Payment date (YYYY-MM-DD)
    #[arg(long)]
    pub paid_on: Date,
}

impl From<AddSalaryArgs> for AddSalary {
    fn from(val: AddSalaryArgs) -> Self {
        AddSalary {
            employee_id: val.employee_id,
            amount: val.amount,
            paid_on: val.paid_on,
        }
    }
}

#[derive(Subcommand)]
pub enum HrCommands {
    /// List an employee's recorded absences
    Absences(EmployeeRecordsArgs),
    /// Record an absence for an employee
    AddAbsence(AddAbsenceArgs),
    /// List an employee's administrative requests
    Requests(EmployeeRecordsArgs),
    /// File an administrative request for an employee
    AddRequest(AddRequestArgs),
    /// Approve a pending administrative request
    Approve(DecideRequestArgs),
    /// Refuse a pending administrative request
    Refuse(DecideRequestArgs),
    /// List an employee's contracts
    Contracts(EmployeeRecordsArgs),
    /// Record a contract for an employee
    AddContract(AddContractArgs),
    /// List an employee's salary payments
    Salaries(EmployeeRecordsArgs),
    /// Record a salary payment for an employee
    AddSalary(AddSalaryArgs),
}

// ============================================================================
// Studies
// ============================================================================

/// Create a new study
#[derive(ClapArgs)]
pub struct CreateStudyArgs {
    /// Display name of the study
    pub name: String,
    /// First day of collection (YYYY-MM-DD)
    #[arg(long)]
    pub start: Date,
    /// Last day of collection (YYYY-MM-DD)
    #[arg(long)]
    pub end: Date,
    /// Total number of interviews to collect
    #[arg(short, long)]
    pub quota_target: u32,
}

impl From<CreateStudyArgs> for CreateStudy {
    fn from(val: CreateStudyArgs) -> Self {
        CreateStudy {
            name: val.name,
            start: val.start,
            end: val.end,
            quota_target: val.quota_target,
        }
    }
}

/// Show details of a specific study
#[derive(ClapArgs)]
pub struct ShowStudyArgs {
    /// Unique identifier of the study
    pub id: u64,
}

/// Update a study
///
/// Only the provided fields change; everything else is preserved from
/// the current record.
#[derive(ClapArgs)]
pub struct UpdateStudyArgs {
    /// Unique identifier of the study to update
    pub id: u64,
    /// Updated display name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Updated first day of collection (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<Date>,
    /// Updated last day of collection (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<Date>,
    /// Updated quota target
    #[arg(short, long)]
    pub quota_target: Option<u32>,
}

/// Delete a study permanently
#[derive(ClapArgs)]
pub struct DeleteStudyArgs {
    /// Unique identifier of the study to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Assign or remove an interviewer on a study
#[derive(ClapArgs)]
pub struct StudyInterviewerArgs {
    /// Unique identifier of the study
    pub study_id: u64,
    /// Unique identifier of the interviewer
    pub employee_id: u64,
}

impl From<StudyInterviewerArgs> for AssignInterviewer {
    fn from(val: StudyInterviewerArgs) -> Self {
        AssignInterviewer {
            study_id: val.study_id,
            employee_id: val.employee_id,
        }
    }
}

/// List the studies associated with an employee
#[derive(ClapArgs)]
pub struct StudiesByEmployeeArgs {
    /// Unique identifier of the employee
    pub employee_id: u64,
}

#[derive(Subcommand)]
pub enum StudyCommands {
    /// Create a new study
    #[command(alias = "c")]
    Create(CreateStudyArgs),
    /// List all studies
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific study
    #[command(alias = "s")]
    Show(ShowStudyArgs),
    /// Update a study
    #[command(alias = "u")]
    Update(UpdateStudyArgs),
    /// Delete a study permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteStudyArgs),
    /// Assign an interviewer to a study
    #[command(alias = "a")]
    Assign(StudyInterviewerArgs),
    /// Remove an interviewer from a study
    Unassign(StudyInterviewerArgs),
    /// Show the supervisor of a study
    Supervisor(ShowStudyArgs),
    /// List the interviewers assigned to a study
    Interviewers(ShowStudyArgs),
    /// List the studies supervised by an employee
    BySupervisor(StudiesByEmployeeArgs),
    /// List the studies an interviewer works on
    ByInterviewer(StudiesByEmployeeArgs),
}

// ============================================================================
// Assignments
// ============================================================================

/// Create an assignment for an interviewer
#[derive(ClapArgs)]
pub struct CreateTaskArgs {
    /// What the interviewer is asked to do
    pub description: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Date,
    /// Number of calls planned
    #[arg(short, long, default_value_t = 0)]
    pub planned_calls: u32,
    /// Unique identifier of the assigned interviewer
    #[arg(short, long)]
    pub interviewer: u64,
}

impl From<CreateTaskArgs> for CreateAssignment {
    fn from(val: CreateTaskArgs) -> Self {
        CreateAssignment {
            description: val.description,
            due: val.due,
            planned_calls: val.planned_calls,
            interviewer_id: val.interviewer,
        }
    }
}

/// List the assignments handed to an interviewer
#[derive(ClapArgs)]
pub struct ListTasksArgs {
    /// Unique identifier of the interviewer
    pub interviewer_id: u64,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create an assignment for an interviewer
    #[command(alias = "c")]
    Create(CreateTaskArgs),
    /// List the assignments handed to an interviewer
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
}

// ============================================================================
// Questionnaires
// ============================================================================

/// Create a new questionnaire
#[derive(ClapArgs)]
pub struct CreateQuestionnaireArgs {
    /// Questionnaire title
    pub title: String,
}

impl From<CreateQuestionnaireArgs> for CreateQuestionnaire {
    fn from(val: CreateQuestionnaireArgs) -> Self {
        CreateQuestionnaire { title: val.title }
    }
}

/// Show a questionnaire with its questions
#[derive(ClapArgs)]
pub struct ShowQuestionnaireArgs {
    /// Unique identifier of the questionnaire
    pub id: u64,
}

/// Add a question to a questionnaire
#[derive(ClapArgs)]
pub struct AddQuestionArgs {
    /// Unique identifier of the questionnaire
    pub questionnaire_id: u64,
    /// Question wording
    pub text: String,
    /// Allowed answers - comma-separated list, at least two
    #[arg(short, long, value_delimiter = ',')]
    pub choices: Vec<String>,
}

impl From<AddQuestionArgs> for AddQuestion {
    fn from(val: AddQuestionArgs) -> Self {
        AddQuestion {
            questionnaire_id: val.questionnaire_id,
            text: val.text,
            choices: val.choices,
        }
    }
}

/// Submit a completed questionnaire for an interviewer
#[derive(ClapArgs)]
pub struct SubmitResponseArgs {
    /// Unique identifier of the questionnaire
    #[arg(short, long)]
    pub questionnaire: u64,
    /// Unique identifier of the submitting interviewer
    #[arg(short, long)]
    pub interviewer: u64,
    /// Answer as QUESTION_ID=CHOICE; repeat for every question
    #[arg(short, long = "answer", value_parser = parse_answer)]
    pub answers: Vec<(u64, String)>,
}

impl From<SubmitResponseArgs> for SubmitResponse {
    fn from(val: SubmitResponseArgs) -> Self {
        SubmitResponse {
            interviewer_id: val.interviewer,
            questionnaire_id: val.questionnaire,
            answers: val.answers,
        }
    }
}

/// Parse an `--answer` value of the form `QUESTION_ID=CHOICE`.
fn parse_answer(raw: &str) -> Result<(u64, String), String> {
    let (id, choice) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION_ID=CHOICE, got '{raw}'"))?;
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid question id '{id}': {e}"))?;
    Ok((id, choice.trim().to_string()))
}

/// List responses by questionnaire or by interviewer
#[derive(ClapArgs)]
pub struct ListResponsesArgs {
    /// Unique identifier of the questionnaire or interviewer
    pub id: u64,
}

#[derive(Subcommand)]
pub enum QuestionnaireCommands {
    /// Create a new questionnaire
    #[command(alias = "c")]
    Create(CreateQuestionnaireArgs),
    /// List all questionnaires
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a questionnaire with its questions
    #[command(alias = "s")]
    Show(ShowQuestionnaireArgs),
    /// List the questions of a questionnaire
    Questions(ShowQuestionnaireArgs),
    /// Add a question to a questionnaire
    AddQuestion(AddQuestionArgs),
    /// Submit a completed questionnaire for an interviewer
    Submit(SubmitResponseArgs),
    /// List the responses collected for a questionnaire
    Responses(ListResponsesArgs),
    /// List the responses submitted by an interviewer
    ByInterviewer(ListResponsesArgs),
}

// ============================================================================
// Schedule
// ============================================================================

/// Render the schedule board for every study
#[derive(ClapArgs)]
pub struct ScheduleBoardArgs {
    /// Assumed interviews per interviewer per day
    #[arg(long, default_value_t = 8.0)]
    pub productivity: f64,
    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub on: Option<Date>,
}

/// Show one study's health status and staffing estimate
#[derive(ClapArgs)]
pub struct ScheduleStatusArgs {
    /// Unique identifier of the study
    pub id: u64,
    /// Assumed interviews per interviewer per day
    #[arg(long, default_value_t = 8.0)]
    pub productivity: f64,
    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub on: Option<Date>,
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Render the schedule board for every study
    #[command(alias = "b")]
    Board(ScheduleBoardArgs),
    /// Show one study's health status and staffing estimate
    #[command(alias = "s")]
    Status(ScheduleStatusArgs),
}

// ============================================================================
// Session
// ============================================================================

/// Store a bearer token for subsequent commands
#[derive(ClapArgs)]
pub struct LoginArgs {
    /// The bearer token to store
    pub token: String,
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Store a bearer token for subsequent commands
    Login(LoginArgs),
    /// Discard the stored bearer token
    Logout,
    /// Show the current session state
    Show,
}

/// Command-line argument representation of platform roles
///
/// Converts between user-friendly command arguments and the backend's
/// role identifiers. Used with `--role` flags on employee commands.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Platform administrator
    Admin,
    /// Study supervisor
    Supervisor,
    /// Field interviewer
    Interviewer,
}

impl From<RoleArg> for Role {
    fn from(val: RoleArg) -> Self {
        match val {
            RoleArg::Admin => Role::Admin,
            RoleArg::Supervisor => Role::Supervisor,
            RoleArg::Interviewer => Role::Interviewer,
        }
    }
}
