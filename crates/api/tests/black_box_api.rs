use std::sync::Arc;

use cpfauth_api::app::responses::{
    MSG_AUTHENTICATED, MSG_INTERNAL_ERROR, MSG_INVALID_CPF, MSG_MISSING_CPF, MSG_USER_NOT_FOUND,
};
use cpfauth_core::Cpf;
use cpfauth_directory::{DirectoryEntry, DirectoryError, InMemoryDirectory, UserDirectory};
use reqwest::StatusCode;

const KNOWN_CPF: &str = "75223055780";
const UNKNOWN_CPF: &str = "52998224725";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(directory: Arc<dyn UserDirectory>) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = cpfauth_api::app::build_app(directory);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn with_known_cpf() -> Self {
        let directory = InMemoryDirectory::new().with_entry(Cpf::parse(KNOWN_CPF).unwrap());
        Self::spawn(Arc::new(directory)).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn authenticate(server: &TestServer, cpf: Option<&str>) -> (StatusCode, String) {
    let client = reqwest::Client::new();
    let mut req = client.get(format!("{}/auth", server.base_url));
    if let Some(cpf) = cpf {
        req = req.header("cpf", cpf);
    }
    let res = req.send().await.unwrap();
    let status = res.status();
    let body = res.text().await.unwrap();
    (status, body)
}

/// The body contract is a bare JSON string literal, not an object.
fn json_string(message: &str) -> String {
    serde_json::to_string(message).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::with_known_cpf().await;
    let res = reqwest::get(format!("{}/health", server.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_header_is_400_with_missing_message() {
    let server = TestServer::with_known_cpf().await;

    let (status, body) = authenticate(&server, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json_string(MSG_MISSING_CPF));
}

#[tokio::test]
async fn empty_header_is_treated_as_missing() {
    let server = TestServer::with_known_cpf().await;

    let (status, body) = authenticate(&server, Some("")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json_string(MSG_MISSING_CPF));
}

#[tokio::test]
async fn malformed_cpf_is_400_with_invalid_message() {
    let server = TestServer::with_known_cpf().await;

    for cpf in ["12345678901", "11111111111", "abc123456789"] {
        let (status, body) = authenticate(&server, Some(cpf)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "cpf: {cpf}");
        assert_eq!(body, json_string(MSG_INVALID_CPF));
    }
}

#[tokio::test]
async fn known_cpf_authenticates_with_200() {
    let server = TestServer::with_known_cpf().await;

    let (status, body) = authenticate(&server, Some(KNOWN_CPF)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json_string(MSG_AUTHENTICATED));
}

#[tokio::test]
async fn valid_but_absent_cpf_is_404() {
    let server = TestServer::with_known_cpf().await;

    let (status, body) = authenticate(&server, Some(UNKNOWN_CPF)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json_string(MSG_USER_NOT_FOUND));
}

#[tokio::test]
async fn repeated_requests_yield_identical_responses() {
    let server = TestServer::with_known_cpf().await;

    let first = authenticate(&server, Some(KNOWN_CPF)).await;
    let second = authenticate(&server, Some(KNOWN_CPF)).await;

    assert_eq!(first, second);
}

/// Directory whose lookups always fail at the transport level.
struct FailingDirectory;

#[async_trait::async_trait]
impl UserDirectory for FailingDirectory {
    async fn lookup(&self, _cpf: &Cpf) -> Result<DirectoryEntry, DirectoryError> {
        Err(DirectoryError::transport("simulated provider outage: secret detail"))
    }

    async fn create_if_absent(&self, _cpf: &Cpf) -> Result<DirectoryEntry, DirectoryError> {
        Err(DirectoryError::transport("simulated provider outage"))
    }
}

#[tokio::test]
async fn transport_failure_is_500_with_generic_body() {
    let server = TestServer::spawn(Arc::new(FailingDirectory)).await;

    let (status, body) = authenticate(&server, Some(KNOWN_CPF)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json_string(MSG_INTERNAL_ERROR));
    // No internal detail leaks into the response.
    assert!(!body.contains("secret detail"));
    assert!(!body.contains("outage"));
}
