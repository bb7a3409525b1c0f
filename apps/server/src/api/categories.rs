use std::sync::Arc;

use crate::{
    api::shared::{ApiJson, ApiQuery, PeriodQuery},
    error::ApiResult,
    main_lib::AppState,
};
use appfinance_core::{
    categories::{Category, CategoryUpdate, CategoryWithSpending, NewCategory},
    expenses::Expense,
    utils::time_utils,
    AuthenticatedUser,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

async fn list_categories(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.list_categories(&user).await?;
    Ok(Json(categories))
}

async fn list_categories_with_spending(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CategoryWithSpending>>> {
    let categories = state
        .category_service
        .list_categories_with_spending(&user, time_utils::today())
        .await?;
    Ok(Json(categories))
}

async fn create_category(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewCategory>,
) -> ApiResult<Json<Category>> {
    let category = state
        .category_service
        .create_category(&user, payload)
        .await?;
    Ok(Json(category))
}

async fn update_category(
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CategoryUpdate>,
) -> ApiResult<Json<Category>> {
    let category = state
        .category_service
        .update_category(&user, &id, payload)
        .await?;
    Ok(Json(category))
}

async fn delete_category(
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.category_service.delete_category(&user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_category_expenses(
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Expense>>> {
    let period = query.resolve()?;
    let expenses = state
        .expense_service
        .list_category_expenses(&user, &id, period)
        .await?;
    Ok(Json(expenses))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/spending", get(list_categories_with_spending))
        .route(
            "/categories/{id}",
            put(update_category).delete(delete_category),
        )
        .route("/categories/{id}/expenses", get(list_category_expenses))
}
