//! Report domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::spending::SpendingAggregate;
use crate::utils::period::Period;

/// One category line of a monthly report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReportRow {
    pub category_id: String,
    pub category: String,
    pub color: String,
    pub amount: Decimal,
    pub count: usize,
    /// Percent of the report total.
    pub share: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    /// Largest amount first.
    pub categories: Vec<CategoryReportRow>,
    /// Ascending by date.
    pub daily: Vec<DailyTotal>,
    pub total: Decimal,
}

impl MonthlyReport {
    pub fn from_aggregate(aggregate: &SpendingAggregate) -> Self {
        let total = aggregate.total;
        let categories = aggregate
            .category_summaries()
            .into_iter()
            .map(|c| CategoryReportRow {
                share: share_of(c.total, total),
                category_id: c.category_id,
                category: c.category_name,
                color: c.color,
                amount: c.total,
                count: c.expense_count,
            })
            .collect();
        let daily = aggregate
            .daily
            .iter()
            .map(|(date, amount)| DailyTotal {
                date: *date,
                amount: *amount,
            })
            .collect();

        MonthlyReport {
            month: aggregate.period.month(),
            year: aggregate.period.year(),
            categories,
            daily,
            total,
        }
    }

    pub fn period(&self) -> Result<Period> {
        Period::new(self.month, self.year)
    }
}

fn share_of(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    amount
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
        .round_dp(DISPLAY_DECIMAL_PRECISION)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// `relatorio-{month}-{year}.{ext}`, month without padding.
    pub fn file_name(&self, month: u32, year: i32) -> String {
        format!("relatorio-{}-{}.{}", month, year, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(Error::invalid_input(format!(
                "Unsupported export format '{}'",
                other
            ))),
        }
    }
}

/// A rendered export, ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}
