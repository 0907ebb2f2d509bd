// Loader tests: concurrent fetches, partial-failure tolerance, and the
// patient view's dependent lookup.

use std::sync::Arc;

use cliniq_client::{
    load_admin_dashboard, load_doctor_dashboard, load_patient_dashboard, ApiClient,
    InMemorySessionStore,
};
use cliniq_contracts::{Role, UserSession};
use cliniq_core::SessionStore;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(id: &str, role: Role) -> UserSession {
    UserSession {
        id: id.to_string(),
        name: "Ira".to_string(),
        email: "ira@x.com".to_string(),
        role,
        token: "tok".to_string(),
    }
}

fn client_for(server: &MockServer) -> ApiClient {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    ApiClient::new(&server.uri(), store)
}

#[tokio::test]
async fn admin_partial_failure_keeps_the_healthy_collections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/doctor/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"_id": "d1", "name": "Dr. Vega", "specialization": "Cardiology"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/patient/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "db down"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/appointment/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .mount(&server)
        .await;

    let dashboard = load_admin_dashboard(&client_for(&server)).await;

    assert_eq!(dashboard.doctors.len(), 1);
    assert!(dashboard.patients.is_empty());
    assert_eq!(dashboard.notices, vec!["Failed to load patients"]);
    assert_eq!(dashboard.stats().total_doctors, 1);
}

#[tokio::test]
async fn doctor_dashboard_narrows_appointments_to_the_selected_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/patient/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"_id": "p1", "name": "Ira", "age": 30, "gender": "female"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/appointment/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"_id": "a1", "patientId": "p1", "date": "2026-08-29", "time": "09:00", "status": "scheduled"},
                {"_id": "a2", "patientId": "p1", "date": "2026-08-30", "time": "09:00", "status": "scheduled"}
            ]
        })))
        .mount(&server)
        .await;

    let dashboard =
        load_doctor_dashboard(&client_for(&server), Some("2026-08-29".to_string())).await;

    assert_eq!(dashboard.patients.len(), 1);
    assert_eq!(dashboard.appointments.len(), 2);
    let today = dashboard.todays_appointments();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, "a1");
}

#[tokio::test]
async fn patient_dashboard_finds_its_profile_then_its_appointments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/patient/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"_id": "p1", "name": "Ira", "age": 30, "gender": "female", "createdBy": "u1"},
                {"_id": "p2", "name": "Tomas", "age": 52, "gender": "male", "createdBy": "u2"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/appointment/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"_id": "a1", "patientId": "p1", "date": "2026-09-01", "time": "10:00", "status": "scheduled"},
                {"_id": "a2", "patientId": "p2", "date": "2026-09-01", "time": "11:00", "status": "scheduled"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let dashboard = load_patient_dashboard(&client, &session("u1", Role::Patient)).await;

    assert_eq!(dashboard.profile.as_ref().unwrap().id, "p1");
    assert_eq!(dashboard.appointments.len(), 1);
    assert_eq!(dashboard.appointments[0].id, "a1");
    assert!(dashboard.notices.is_empty());
}

#[tokio::test]
async fn missing_patient_profile_is_a_notice_and_skips_the_appointment_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/patient/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"_id": "p2", "name": "Tomas", "age": 52, "gender": "male", "createdBy": "u2"}]
        })))
        .mount(&server)
        .await;
    // The dependent fetch must not happen without a profile id.
    Mock::given(method("GET"))
        .and(path("/api/appointment/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let dashboard = load_patient_dashboard(&client, &session("u1", Role::Patient)).await;

    assert!(dashboard.profile.is_none());
    assert!(dashboard.appointments.is_empty());
    assert_eq!(dashboard.notices, vec!["Patient profile not found"]);
}

#[tokio::test]
async fn total_fetch_failure_yields_notices_not_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dashboard = load_admin_dashboard(&client_for(&server)).await;

    assert!(dashboard.doctors.is_empty());
    assert!(dashboard.patients.is_empty());
    assert!(dashboard.appointments.is_empty());
    assert_eq!(dashboard.notices.len(), 3);
}
