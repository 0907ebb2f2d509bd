// HTTP-level tests for ApiClient: bearer attachment, envelope decoding,
// and the 401 forced-logout path, against a wiremock backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cliniq_client::{ApiClient, ClientError, InMemorySessionStore, UnauthorizedHandler};
use cliniq_contracts::{Role, UserSession};
use cliniq_core::SessionStore;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct CountingHandler(AtomicUsize);

impl UnauthorizedHandler for CountingHandler {
    fn on_unauthorized(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn session(token: &str) -> UserSession {
    UserSession {
        id: "u1".to_string(),
        name: "Asha Rao".to_string(),
        email: "asha@clinic.test".to_string(),
        role: Role::Admin,
        token: token.to_string(),
    }
}

#[tokio::test]
async fn bearer_token_is_read_from_the_store_at_call_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/doctor/"))
        .and(header("authorization", "Bearer fresh-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new(&server.uri(), store.clone());

    // The token lands in the store only after the client was built; the
    // next call must still pick it up.
    store.save(&session("fresh-tok")).unwrap();

    let doctors = client.list_doctors().await.unwrap();
    assert!(doctors.is_empty());
}

#[tokio::test]
async fn unauthorized_clears_the_store_and_fires_the_handler_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/patient/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    store.save(&session("stale-tok")).unwrap();

    let handler = Arc::new(CountingHandler(AtomicUsize::new(0)));
    let client =
        ApiClient::new(&server.uri(), store.clone()).with_unauthorized_handler(handler.clone());

    let result = client.list_patients().await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
    assert!(store.load().is_none());
    assert_eq!(handler.0.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn envelope_failure_surfaces_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/doctor/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Doctors are unavailable"
        })))
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new(&server.uri(), store);

    match client.list_doctors().await {
        Err(ClientError::Api { message, .. }) => assert_eq!(message, "Doctors are unavailable"),
        other => panic!("expected Api error, got {:?}", other.map(|d| d.len())),
    }
}

#[tokio::test]
async fn success_envelope_without_data_is_an_error_not_a_panic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/doctor/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new(&server.uri(), store);

    assert!(matches!(
        client.list_doctors().await,
        Err(ClientError::Api { .. })
    ));
}

#[tokio::test]
async fn doctor_detail_is_fetched_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/doctor/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "_id": "d1",
                "name": "Dr. Vega",
                "specialization": "Cardiology",
                "userId": {"_id": "u9", "email": "vega@clinic.test"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new(&server.uri(), store);

    let doctor = client.get_doctor("d1").await.unwrap();
    assert_eq!(doctor.name, "Dr. Vega");
    assert_eq!(doctor.user_email(), Some("vega@clinic.test"));
}

#[tokio::test]
async fn missing_doctor_detail_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/doctor/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new(&server.uri(), store);

    assert!(matches!(
        client.get_doctor("ghost").await,
        Err(ClientError::NotFound)
    ));
}

#[tokio::test]
async fn not_found_maps_to_its_own_variant() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/patient/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new(&server.uri(), store);

    assert!(matches!(
        client.get_patient("missing").await,
        Err(ClientError::NotFound)
    ));
}

#[tokio::test]
async fn server_errors_pass_through_with_the_envelope_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/appointment/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "boom"
        })))
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new(&server.uri(), store);

    match client.list_appointments().await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {:?}", other.map(|a| a.len())),
    }
}

#[tokio::test]
async fn delete_accepts_a_success_envelope_without_data() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/doctor/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Doctor deleted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let client = ApiClient::new(&server.uri(), store);

    client.delete_doctor("d1").await.unwrap();
}
