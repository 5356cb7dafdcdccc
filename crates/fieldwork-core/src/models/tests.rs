use jiff::civil::date;

use crate::models::{
    Employee, HealthStatus, Quota, RequestStatus, Role, ScheduledStudy, Study,
};

fn sample_study() -> Study {
    Study {
        id: Some(3),
        name: "Étude d'opinion politique".to_string(),
        start: date(2023, 9, 15),
        end: date(2023, 10, 31),
        quota_target: 5000,
        supervisor: None,
        interviewers: vec![],
        quotas: vec![
            Quota {
                id: Some(1),
                region: "Île-de-France".to_string(),
                interviewer: Some("Pierre Martin".to_string()),
                target: 3000,
                completed: 1800,
                start: None,
                end: None,
                client: Some("Ministère de l'Intérieur".to_string()),
                survey_kind: Some("Opinion".to_string()),
                resolution_rate: Some(78.0),
                data_quality: Some(92.0),
            },
            Quota {
                id: Some(2),
                region: "Bretagne".to_string(),
                interviewer: None,
                target: 2000,
                completed: 1200,
                start: None,
                end: None,
                client: None,
                survey_kind: None,
                resolution_rate: None,
                data_quality: None,
            },
        ],
        assignments: vec![],
    }
}

#[test]
fn test_employee_deserializes_wire_keys() {
    let payload = r#"{
        "id": 7,
        "nom": "Dupont",
        "prenom": "Marie",
        "email": "marie.dupont@example.com",
        "telephone": "0601020304",
        "poste": "Superviseur terrain",
        "departement": "Opérations",
        "role": "SUPERVISEUR",
        "actif": true,
        "dateEmbauche": "2021-03-01",
        "matricule": "EMP-0042",
        "salaire": 2800.0
    }"#;

    let employee: Employee = serde_json::from_str(payload).expect("valid employee payload");
    assert_eq!(employee.id, Some(7));
    assert_eq!(employee.last_name, "Dupont");
    assert_eq!(employee.first_name, "Marie");
    assert_eq!(employee.role, Some(Role::Supervisor));
    assert_eq!(employee.hired_on, Some(date(2021, 3, 1)));
    assert_eq!(employee.full_name(), "Marie Dupont");
}

#[test]
fn test_employee_create_payload_omits_unset_fields() {
    let employee = Employee {
        id: None,
        last_name: "Petit".to_string(),
        first_name: "Jean".to_string(),
        email: None,
        phone: None,
        position: None,
        department: None,
        role: Some(Role::Interviewer),
        active: None,
        hired_on: None,
        staff_number: None,
        salary: None,
    };

    let json = serde_json::to_value(&employee).expect("serializable employee");
    assert_eq!(json["nom"], "Petit");
    assert_eq!(json["prenom"], "Jean");
    assert_eq!(json["role"], "ENQUETEUR");
    assert!(json.get("id").is_none());
    assert!(json.get("email").is_none());
    assert!(json.get("dateEmbauche").is_none());
}

#[test]
fn test_study_deserializes_wire_keys() {
    let payload = r#"{
        "id": 1,
        "nom": "Étude de marché - Produits alimentaires",
        "dateDebut": "2023-10-01",
        "dateFin": "2023-11-15",
        "objectifQuotas": 1000,
        "superviseur": {"id": 7, "nom": "Dupont", "prenom": "Marie"},
        "enqueteurs": [{"id": 9, "nom": "Petit", "prenom": "Jean"}]
    }"#;

    let study: Study = serde_json::from_str(payload).expect("valid study payload");
    assert_eq!(study.name, "Étude de marché - Produits alimentaires");
    assert_eq!(study.start, date(2023, 10, 1));
    assert_eq!(study.end, date(2023, 11, 15));
    assert_eq!(study.quota_target, 1000);
    assert_eq!(
        study.supervisor.as_ref().map(Employee::full_name),
        Some("Marie Dupont".to_string())
    );
    assert_eq!(study.interviewers.len(), 1);
    // Fields the backend left out fall back to empty collections
    assert!(study.quotas.is_empty());
    assert!(study.assignments.is_empty());
}

#[test]
fn test_request_status_wire_values() {
    assert_eq!(
        serde_json::to_value(RequestStatus::Pending).unwrap(),
        "EN_ATTENTE"
    );
    assert_eq!(
        serde_json::from_str::<RequestStatus>("\"VALIDE\"").unwrap(),
        RequestStatus::Approved
    );
    assert_eq!(
        serde_json::from_str::<RequestStatus>("\"REFUSE\"").unwrap(),
        RequestStatus::Refused
    );
}

#[test]
fn test_role_parses_both_spellings() {
    assert_eq!("ENQUETEUR".parse::<Role>().unwrap(), Role::Interviewer);
    assert_eq!("interviewer".parse::<Role>().unwrap(), Role::Interviewer);
    assert_eq!("superviseur".parse::<Role>().unwrap(), Role::Supervisor);
    assert!("manager".parse::<Role>().is_err());
}

#[test]
fn test_health_status_strings() {
    assert_eq!(HealthStatus::OnTrack.as_str(), "on_track");
    assert_eq!("at_risk".parse::<HealthStatus>().unwrap(), HealthStatus::AtRisk);
}

#[test]
fn test_scheduled_study_sums_quota_records() {
    let snapshot = ScheduledStudy::from(&sample_study());

    assert_eq!(snapshot.id, 3);
    assert_eq!(snapshot.quota_target, 5000);
    assert_eq!(snapshot.quota_completed, 3000);
    assert_eq!(snapshot.client.as_deref(), Some("Ministère de l'Intérieur"));
    assert_eq!(snapshot.progress(), 60.0);
}

#[test]
fn test_progress_is_clamped() {
    let mut snapshot = ScheduledStudy::from(&sample_study());
    snapshot.quota_completed = 6000;
    assert_eq!(snapshot.progress(), 100.0);

    snapshot.quota_target = 0;
    assert_eq!(snapshot.progress(), 100.0);
}
