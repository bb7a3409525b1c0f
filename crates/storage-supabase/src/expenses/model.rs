//! Row models for the `expenses` table.

use appfinance_core::expenses::{Expense, ExpenseWithCategory};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Nested `categories(name,color)` selection. Absent when the category row
/// is gone or the join was not requested.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CategoryRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExpenseRow {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub categories: Option<CategoryRef>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewExpenseRow<'a> {
    pub user_id: &'a str,
    pub category_id: &'a str,
    pub amount: Decimal,
    pub description: Option<&'a str>,
    pub date: NaiveDate,
}

impl ExpenseRow {
    fn split(self) -> (Expense, Option<CategoryRef>) {
        let expense = Expense {
            id: self.id,
            user_id: self.user_id,
            category_id: self.category_id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            created_at: self.created_at,
        };
        (expense, self.categories)
    }
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        row.split().0
    }
}

impl From<ExpenseRow> for ExpenseWithCategory {
    fn from(row: ExpenseRow) -> Self {
        let (expense, category) = row.split();
        let category = category.unwrap_or_default();
        ExpenseWithCategory::new(expense, category.name, category.color)
    }
}
