//! HTTP routes + handlers.

use axum::{
    Extension,
    http::{HeaderMap, StatusCode},
    response::Response,
};

use cpfauth_auth::AuthenticationService;

use crate::app::responses;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Authenticate by the `cpf` request header.
///
/// The single top-level failure boundary: every collaborator failure has
/// already been folded into the outcome by the service, so this handler
/// cannot fail. A header value that is not valid UTF-8 cannot be a CPF and
/// classifies as missing.
pub async fn authenticate(
    Extension(service): Extension<AuthenticationService>,
    headers: HeaderMap,
) -> Response {
    let raw_cpf = headers.get("cpf").and_then(|value| value.to_str().ok());

    let outcome = service.authenticate(raw_cpf).await;

    responses::outcome_to_response(outcome)
}
