use std::sync::Arc;

use crate::{
    api::shared::{resolve_period, ApiJson, ApiQuery},
    error::ApiResult,
    main_lib::AppState,
};
use appfinance_core::{
    expenses::{Expense, ExpenseWithCategory, NewExpense},
    utils::time_utils,
    AuthenticatedUser,
};
use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;

/// Either a month (`?month=&year=`) or the latest entries (`?recent=N`).
#[derive(Debug, Default, Deserialize)]
struct ExpensesQuery {
    month: Option<u32>,
    year: Option<i32>,
    recent: Option<usize>,
}

async fn list_expenses(
    Extension(user): Extension<AuthenticatedUser>,
    ApiQuery(query): ApiQuery<ExpensesQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ExpenseWithCategory>>> {
    let expenses = match query.recent {
        Some(limit) => {
            state
                .expense_service
                .recent_expenses(&user, Some(limit))
                .await?
        }
        None => {
            let period = resolve_period(query.month, query.year, time_utils::today())?;
            state.expense_service.list_expenses(&user, period).await?
        }
    };
    Ok(Json(expenses))
}

async fn create_expense(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewExpense>,
) -> ApiResult<Json<Expense>> {
    let expense = state
        .expense_service
        .create_expense(&user, payload, time_utils::today())
        .await?;
    Ok(Json(expense))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/expenses", get(list_expenses).post(create_expense))
}
