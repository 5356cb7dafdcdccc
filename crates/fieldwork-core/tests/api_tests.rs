//! Integration tests for the API client against a stubbed backend.

use jiff::civil::date;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fieldwork_core::params::{AddAbsence, AssignInterviewer, CreateStudy};
use fieldwork_core::{ApiClient, ApiError, Role};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::builder()
        .with_base_url(server.uri())
        .with_token("test-token")
        .build()
        .expect("client builds against mock server")
}

#[tokio::test]
async fn test_list_employees_sends_bearer_and_parses_wire_keys() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 7,
                "nom": "Dupont",
                "prenom": "Marie",
                "role": "SUPERVISEUR",
                "actif": true
            },
            {
                "id": 9,
                "nom": "Petit",
                "prenom": "Jean",
                "role": "ENQUETEUR"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let employees = client.employees().await.expect("list succeeds");

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].full_name(), "Marie Dupont");
    assert_eq!(employees[1].role, Some(Role::Interviewer));
}

#[tokio::test]
async fn test_unauthorized_discards_stored_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/etudes"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("temp dir");
    let session_file = dir.path().join("session");
    std::fs::write(&session_file, "stale-token").expect("seed session file");

    let client = ApiClient::builder()
        .with_base_url(server.uri())
        .with_session_file(&session_file)
        .build()
        .expect("client builds");
    assert!(client.session().is_authenticated());

    let error = client.studies().await.expect_err("401 must fail");
    assert!(matches!(error, ApiError::Unauthorized));
    assert!(!client.session().is_authenticated());
    assert!(!session_file.exists(), "401 must clear the token file");
}

#[tokio::test]
async fn test_missing_employee_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.employee(999).await.expect_err("404 must fail");

    match error {
        ApiError::NotFound { resource, id } => {
            assert_eq!(resource, "Employee");
            assert_eq!(id, 999);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/questionnaires"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.questionnaires().await.expect_err("500 must fail");

    match error {
        ApiError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected Http, got {other:?}"),
    }
}

#[tokio::test]
async fn test_assign_interviewer_hits_relationship_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/etudes/3/enqueteurs/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "nom": "Étude d'opinion politique",
            "dateDebut": "2023-09-15",
            "dateFin": "2023-10-31",
            "objectifQuotas": 5000,
            "enqueteurs": [{"id": 9, "nom": "Petit", "prenom": "Jean"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let study = client
        .assign_interviewer(AssignInterviewer {
            study_id: 3,
            employee_id: 9,
        })
        .await
        .expect("assignment succeeds");

    assert_eq!(study.interviewers.len(), 1);
    assert_eq!(study.start, date(2023, 9, 15));
}

#[tokio::test]
async fn test_add_absence_sends_wire_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/absences/employee/9"))
        .and(body_json(json!({
            "dateDebut": "2024-01-10",
            "dateFin": "2024-01-12",
            "motif": "maladie"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "dateDebut": "2024-01-10",
            "dateFin": "2024-01-12",
            "motif": "maladie"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let absence = client
        .add_absence(AddAbsence {
            employee_id: 9,
            start: date(2024, 1, 10),
            end: date(2024, 1, 12),
            reason: "maladie".to_string(),
        })
        .await
        .expect("absence recorded");

    assert_eq!(absence.id, Some(1));
}

#[tokio::test]
async fn test_invalid_create_params_never_reach_the_network() {
    // No mock mounted: a request would fail loudly.
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let error = client
        .create_study(CreateStudy {
            name: "Étude inversée".to_string(),
            start: date(2023, 11, 1),
            end: date(2023, 10, 1),
            quota_target: 100,
        })
        .await
        .expect_err("inverted range must be rejected");

    assert!(matches!(error, ApiError::InvalidInput { .. }));
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 0);
}

#[tokio::test]
async fn test_unauthenticated_client_sends_no_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("temp dir");
    let client = ApiClient::builder()
        .with_base_url(server.uri())
        .with_session_file(dir.path().join("session"))
        .build()
        .expect("client builds");

    client.employees().await.expect("list succeeds");

    let requests = server.received_requests().await.expect("recorded");
    assert_eq!(requests.len(), 1);
    let has_auth = requests[0]
        .headers
        .keys()
        .any(|name| name.as_str().eq_ignore_ascii_case("authorization"));
    assert!(!has_auth, "logged-out client must not send a bearer header");
}
