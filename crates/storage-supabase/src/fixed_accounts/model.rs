//! Row models for the `fixed_accounts` table.

use appfinance_core::fixed_accounts::FixedAccount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FixedAccountRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub due_day: u32,
    #[serde(default)]
    pub is_paid: bool,
    pub month: u32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewFixedAccountRow<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    pub amount: Decimal,
    pub due_day: u32,
    pub is_paid: bool,
    pub month: u32,
    pub year: i32,
}

/// Partial update body; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FixedAccountChangesRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
}

impl From<FixedAccountRow> for FixedAccount {
    fn from(row: FixedAccountRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            amount: row.amount,
            due_day: row.due_day,
            is_paid: row.is_paid,
            month: row.month,
            year: row.year,
            created_at: row.created_at,
        }
    }
}
