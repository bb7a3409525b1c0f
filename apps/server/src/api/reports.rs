use std::sync::Arc;

use crate::{
    api::shared::{ApiQuery, PeriodQuery},
    error::ApiResult,
    main_lib::AppState,
};
use appfinance_core::{
    reports::{ExportFormat, MonthlyReport},
    AuthenticatedUser,
};
use axum::{
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};

async fn get_monthly_report(
    Extension(user): Extension<AuthenticatedUser>,
    ApiQuery(query): ApiQuery<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MonthlyReport>> {
    let period = query.resolve()?;
    let report = state
        .report_service
        .get_monthly_report(&user, period)
        .await?;
    Ok(Json(report))
}

/// `GET /reports/export/{csv|pdf}`, sent as a download.
async fn export_report(
    Extension(user): Extension<AuthenticatedUser>,
    Path(format): Path<String>,
    ApiQuery(query): ApiQuery<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let format: ExportFormat = format.parse()?;
    let period = query.resolve()?;
    let file = state
        .report_service
        .export_report(&user, period, format)
        .await?;
    tracing::info!(
        "Exported {} report for {} ({} bytes)",
        format,
        period,
        file.bytes.len()
    );

    let headers = [
        (CONTENT_TYPE, file.content_type.to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.file_name),
        ),
    ];
    Ok((headers, file.bytes))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reports", get(get_monthly_report))
        .route("/reports/export/{format}", get(export_report))
}
