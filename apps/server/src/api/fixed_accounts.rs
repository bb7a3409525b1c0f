use std::sync::Arc;

use crate::{
    api::shared::{ApiJson, ApiQuery, PeriodQuery},
    error::ApiResult,
    main_lib::AppState,
};
use appfinance_core::{
    fixed_accounts::{FixedAccount, FixedAccountUpdate, FixedAccountsOverview, NewFixedAccount},
    utils::time_utils,
    AuthenticatedUser,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};

async fn get_overview(
    Extension(user): Extension<AuthenticatedUser>,
    ApiQuery(query): ApiQuery<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FixedAccountsOverview>> {
    let period = query.resolve()?;
    let overview = state
        .fixed_account_service
        .get_overview(&user, period, time_utils::today())
        .await?;
    Ok(Json(overview))
}

async fn create_fixed_account(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewFixedAccount>,
) -> ApiResult<Json<FixedAccount>> {
    let account = state
        .fixed_account_service
        .create_fixed_account(&user, payload, time_utils::today())
        .await?;
    Ok(Json(account))
}

async fn update_fixed_account(
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<FixedAccountUpdate>,
) -> ApiResult<Json<FixedAccount>> {
    let account = state
        .fixed_account_service
        .update_fixed_account(&user, &id, payload)
        .await?;
    Ok(Json(account))
}

async fn toggle_paid(
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FixedAccount>> {
    let account = state.fixed_account_service.toggle_paid(&user, &id).await?;
    Ok(Json(account))
}

async fn delete_fixed_account(
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .fixed_account_service
        .delete_fixed_account(&user, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/fixed-accounts",
            get(get_overview).post(create_fixed_account),
        )
        .route(
            "/fixed-accounts/{id}",
            put(update_fixed_account).delete(delete_fixed_account),
        )
        .route("/fixed-accounts/{id}/toggle-paid", post(toggle_paid))
}
