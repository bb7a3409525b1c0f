use appfinance_core::{utils::time_utils, Period};
use axum::extract::{FromRequest, FromRequestParts};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// `Json` whose rejections use the API's error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` whose rejections use the API's error body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// `?month=&year=` selector. Missing parts default to the current month.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl PeriodQuery {
    pub fn resolve(&self) -> ApiResult<Period> {
        resolve_period(self.month, self.year, time_utils::today())
    }
}

pub fn resolve_period(
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) -> ApiResult<Period> {
    let current = Period::containing(today);
    Ok(Period::new(
        month.unwrap_or(current.month()),
        year.unwrap_or(current.year()),
    )?)
}
