use axum::{
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use tracing::warn;
use crate::core::controller::{AppState, ServerError};
use crate::core::library::LibraryError;

fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").map(str::trim).filter(|t| !t.is_empty())
}

fn check_token(expected: &str, header: Option<&str>) -> Result<(), LibraryError> {
    match header.and_then(bearer_token) {
        None => Err(LibraryError::access_denied("No token provided", None)),
        Some(token) if token == expected => Ok(()),
        Some(_) => Err(LibraryError::access_denied("Invalid token", None)),
    }
}

// Rejects REST calls without the configured bearer token. When no token is
// configured every call passes.
pub async fn verify_token<B>(
    State(state): State<AppState>,
    request: Request<B>,
    next: Next<B>) -> Result<Response, ServerError> {
    if let Some(expected) = state.config.api_token.as_deref() {
        let header = request.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        if let Err(err) = check_token(expected, header) {
            warn!(path = %request.uri().path(), reason = err.message(), "rejected unauthenticated request");
            return Err(ServerError::from(err));
        }
    }
    Ok(next.run(request).await)
}
