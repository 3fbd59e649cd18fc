//! Outcome → response envelope mapping.
//!
//! The body is a bare JSON-encoded string (a quoted string literal, not an
//! object), matching the message-only envelope the service has always
//! exposed to callers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cpfauth_auth::{AuthenticationOutcome, InvalidReason};

pub const MSG_MISSING_CPF: &str = "CPF não fornecido no cabeçalho";
pub const MSG_INVALID_CPF: &str = "CPF inválido";
pub const MSG_USER_NOT_FOUND: &str = "Usuário não encontrado";
pub const MSG_AUTHENTICATED: &str = "Autenticação bem-sucedida";
pub const MSG_INTERNAL_ERROR: &str = "Erro interno do servidor";

/// Deterministic outcome → (status, body) mapping.
///
/// The 500 body is always the generic message; internal detail never
/// reaches the caller.
pub fn outcome_to_response(outcome: AuthenticationOutcome) -> Response {
    match outcome {
        AuthenticationOutcome::Authenticated => message(StatusCode::OK, MSG_AUTHENTICATED),
        AuthenticationOutcome::InvalidInput(InvalidReason::Missing) => {
            message(StatusCode::BAD_REQUEST, MSG_MISSING_CPF)
        }
        AuthenticationOutcome::InvalidInput(InvalidReason::Malformed) => {
            message(StatusCode::BAD_REQUEST, MSG_INVALID_CPF)
        }
        AuthenticationOutcome::NotFound => message(StatusCode::NOT_FOUND, MSG_USER_NOT_FOUND),
        AuthenticationOutcome::InternalError => {
            message(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
        }
    }
}

fn message(status: StatusCode, body: &'static str) -> Response {
    (status, Json(body)).into_response()
}
