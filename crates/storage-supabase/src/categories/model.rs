//! Row models for the `categories` table.

use appfinance_core::categories::{Category, CategoryDetails};
use appfinance_core::constants::DEFAULT_CATEGORY_COLOR;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Row as returned by the table API
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub limit_amount: Option<Decimal>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body for inserts and updates
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryWriteRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
    pub name: &'a str,
    pub limit_amount: Decimal,
    pub color: &'a str,
    pub icon: Option<&'a str>,
}

impl<'a> CategoryWriteRow<'a> {
    pub fn insert(user_id: &'a str, details: &'a CategoryDetails) -> Self {
        CategoryWriteRow {
            user_id: Some(user_id),
            ..Self::changes(details)
        }
    }

    pub fn changes(details: &'a CategoryDetails) -> Self {
        CategoryWriteRow {
            user_id: None,
            name: &details.name,
            limit_amount: details.limit_amount,
            color: &details.color,
            icon: details.icon.as_deref(),
        }
    }
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            limit_amount: row.limit_amount.unwrap_or(Decimal::ZERO),
            color: row
                .color
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            icon: row.icon,
            created_at: row.created_at,
        }
    }
}
