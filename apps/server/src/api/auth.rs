use std::sync::Arc;

use crate::{api::shared::ApiJson, error::ApiResult, main_lib::AppState};
use appfinance_core::{
    auth::{AuthSession, AuthUser, Profile, SignInRequest, SignUpRequest, SignUpResult},
    AuthenticatedUser,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest {
    refresh_token: String,
}

#[derive(Deserialize)]
struct ForgotPasswordRequest {
    email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    new_password: String,
}

#[derive(Serialize)]
struct OAuthUrlResponse {
    url: String,
}

#[derive(Serialize)]
struct MeResponse {
    user: AuthUser,
    profile: Option<Profile>,
}

async fn sign_up(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<SignUpRequest>,
) -> ApiResult<Json<SignUpResult>> {
    let result = state.auth_service.sign_up(request).await?;
    Ok(Json(result))
}

async fn sign_in(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<SignInRequest>,
) -> ApiResult<Json<AuthSession>> {
    let session = state.auth_service.sign_in(request).await?;
    Ok(Json(session))
}

async fn refresh(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<RefreshRequest>,
) -> ApiResult<Json<AuthSession>> {
    let session = state
        .auth_service
        .refresh_session(&request.refresh_token)
        .await?;
    Ok(Json(session))
}

async fn forgot_password(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<ForgotPasswordRequest>,
) -> ApiResult<StatusCode> {
    state
        .auth_service
        .request_password_reset(&request.email)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn google_sign_in(State(state): State<Arc<AppState>>) -> ApiResult<Json<OAuthUrlResponse>> {
    let url = state.auth_service.google_sign_in_url()?;
    Ok(Json(OAuthUrlResponse { url }))
}

async fn me(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MeResponse>> {
    let profile = state.auth_service.get_profile(&user).await?;
    Ok(Json(MeResponse {
        user: user.to_auth_user(),
        profile,
    }))
}

async fn change_password(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<ChangePasswordRequest>,
) -> ApiResult<StatusCode> {
    state
        .auth_service
        .change_password(&user, &request.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn sign_out(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.auth_service.sign_out(&user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Routes reachable without a session.
pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(sign_in))
        .route("/auth/refresh", post(refresh))
        .route("/auth/forgot-password", post(forgot_password))
        .route("/auth/oauth/google", get(google_sign_in))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/me", get(me))
        .route("/auth/change-password", post(change_password))
        .route("/auth/logout", post(sign_out))
}
