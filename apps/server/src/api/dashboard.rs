use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use appfinance_core::{dashboard::Dashboard, utils::time_utils, AuthenticatedUser};
use axum::{extract::State, routing::get, Extension, Json, Router};

async fn get_dashboard(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Dashboard>> {
    let dashboard = state
        .dashboard_service
        .get_dashboard(&user, time_utils::today())
        .await?;
    Ok(Json(dashboard))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
