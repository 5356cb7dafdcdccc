use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a Command with --no-color flag for testing
fn fieldwork_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fw").expect("Failed to find fw binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper for commands that talk to a stubbed backend.
fn fieldwork_cmd_for(server: &MockServer) -> Command {
    let mut cmd = fieldwork_cmd();
    cmd.args(["--api-url", &server.uri(), "--token", "test-token"]);
    cmd
}

#[test]
fn test_cli_help_lists_command_groups() {
    fieldwork_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("employee"))
        .stdout(predicate::str::contains("study"))
        .stdout(predicate::str::contains("questionnaire"))
        .stdout(predicate::str::contains("schedule"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn test_cli_requires_a_command() {
    fieldwork_cmd().assert().failure();
}

#[test]
fn test_cli_session_login_show_logout_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let session_file = temp_dir.path().join("session");
    let session_arg = session_file.to_str().unwrap();

    fieldwork_cmd()
        .args(["--session-file", session_arg, "session", "login", "tok-abcdef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session token stored"));

    assert!(session_file.exists());

    fieldwork_cmd()
        .args(["--session-file", session_arg, "session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tok-"))
        .stdout(predicate::str::contains("Store:"));

    fieldwork_cmd()
        .args(["--session-file", session_arg, "session", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session token cleared"));

    assert!(!session_file.exists());

    fieldwork_cmd()
        .args(["--session-file", session_arg, "session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_cli_employee_delete_requires_confirm() {
    fieldwork_cmd()
        .args(["--token", "tok", "employee", "delete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));
}

#[test]
fn test_cli_rejects_malformed_answer() {
    fieldwork_cmd()
        .args([
            "--token",
            "tok",
            "questionnaire",
            "submit",
            "--questionnaire",
            "4",
            "--interviewer",
            "9",
            "--answer",
            "not-an-answer",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("QUESTION_ID=CHOICE"));
}

#[test]
fn test_cli_rejects_invalid_api_url() {
    fieldwork_cmd()
        .args(["--api-url", "not a url", "--token", "tok", "employee", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize API client"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_employee_list_renders_roster() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "nom": "Dupont", "prenom": "Marie", "role": "SUPERVISEUR"},
            {"id": 9, "nom": "Petit", "prenom": "Jean", "role": "ENQUETEUR"}
        ])))
        .mount(&server)
        .await;

    fieldwork_cmd_for(&server)
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Employees"))
        .stdout(predicate::str::contains("7. Marie Dupont"))
        .stdout(predicate::str::contains("9. Jean Petit — ENQUETEUR"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_employee_list_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    fieldwork_cmd_for(&server)
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_schedule_board_classifies_studies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/etudes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "nom": "Étude de marché",
                "dateDebut": "2023-10-01",
                "dateFin": "2023-11-15",
                "objectifQuotas": 1000,
                "quotas": [
                    {"id": 1, "region": "Île-de-France", "quotaTotal": 1000, "quotaComplete": 750}
                ]
            },
            {
                "id": 2,
                "nom": "Satisfaction client",
                "dateDebut": "2023-09-01",
                "dateFin": "2023-10-10",
                "objectifQuotas": 2000,
                "quotas": [
                    {"id": 2, "region": "Bretagne", "quotaTotal": 2000, "quotaComplete": 800}
                ]
            }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/employees/role/ENQUETEUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 9, "nom": "Petit", "prenom": "Jean", "role": "ENQUETEUR"},
            {"id": 10, "nom": "Dubois", "prenom": "Claire", "role": "ENQUETEUR"}
        ])))
        .mount(&server)
        .await;

    // Pinned date: study 1 is ahead of its curve, study 2 ended unfinished.
    fieldwork_cmd_for(&server)
        .args(["schedule", "board", "--on", "2023-10-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Study Schedule (Oct 20, 2023)"))
        .stdout(predicate::str::contains("- Running studies: 1"))
        .stdout(predicate::str::contains("- Delayed: 1"))
        .stdout(predicate::str::contains("- Interviewers on roster: 2"))
        .stdout(predicate::str::contains("✓ On track"))
        .stdout(predicate::str::contains("✗ Delayed"))
        .stdout(predicate::str::contains("75% (750/1000)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_schedule_status_reports_staffing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/etudes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "nom": "Étude de marché",
            "dateDebut": "2023-10-01",
            "dateFin": "2023-10-11",
            "objectifQuotas": 1000,
            "quotas": [
                {"id": 1, "region": "Île-de-France", "quotaTotal": 1000, "quotaComplete": 500}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/employees/role/ENQUETEUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 9, "nom": "Petit", "prenom": "Jean", "role": "ENQUETEUR"}
        ])))
        .mount(&server)
        .await;

    // 1000 interviews over 10 days at 10/day each: 10 interviewers.
    fieldwork_cmd_for(&server)
        .args([
            "schedule",
            "status",
            "1",
            "--productivity",
            "10",
            "--on",
            "2023-10-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Étude de marché"))
        .stdout(predicate::str::contains("- Status: ⚠ At risk"))
        .stdout(predicate::str::contains("10 interviewers required"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_rejected_token_reports_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/etudes"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    fieldwork_cmd_for(&server)
        .args(["study", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not authenticated"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_study_create_round_trips_to_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/etudes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "nom": "Étude mobilité",
            "dateDebut": "2024-01-08",
            "dateFin": "2024-02-16",
            "objectifQuotas": 1500
        })))
        .expect(1)
        .mount(&server)
        .await;

    fieldwork_cmd_for(&server)
        .args([
            "study",
            "create",
            "Étude mobilité",
            "--start",
            "2024-01-08",
            "--end",
            "2024-02-16",
            "--quota-target",
            "1500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created study with ID: 42"))
        .stdout(predicate::str::contains("Étude mobilité"));
}

#[test]
fn test_cli_study_create_rejects_inverted_range_locally() {
    // No backend: validation fails before any request is made.
    fieldwork_cmd()
        .args([
            "--token",
            "tok",
            "study",
            "create",
            "Étude inversée",
            "--start",
            "2024-02-16",
            "--end",
            "2024-01-08",
            "--quota-target",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not precede start date"));
}
