use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use crate::{error::ApiError, main_lib::AppState};

/// Token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(request: &Request<Body>) -> Option<&str> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())?;

    let mut parts = header.splitn(2, ' ');
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return None;
    };
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolves the bearer token against the auth service and makes the caller
/// available to handlers as an `Extension<AuthenticatedUser>`.
pub async fn require_user(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request)
        .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?
        .to_string();

    let user = state.auth_service.authenticate(&token).await?;
    tracing::debug!(user_id = %user.id, "Authenticated request");
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
