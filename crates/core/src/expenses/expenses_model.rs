//! Expense domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CATEGORY_COLOR, MAX_AMOUNT, UNCATEGORIZED_NAME};
use crate::errors::{Error, Result};

/// Domain model representing a recorded expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// An expense joined with the name and color of its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseWithCategory {
    #[serde(flatten)]
    pub expense: Expense,
    #[serde(default = "default_category_name")]
    pub category_name: String,
    #[serde(default = "default_category_color")]
    pub category_color: String,
}

impl ExpenseWithCategory {
    /// Joins an expense with its category, falling back to the
    /// "Uncategorized" label when the category row is gone.
    pub fn new(expense: Expense, category_name: Option<String>, category_color: Option<String>) -> Self {
        ExpenseWithCategory {
            expense,
            category_name: category_name.unwrap_or_else(default_category_name),
            category_color: category_color.unwrap_or_else(default_category_color),
        }
    }
}

fn default_category_name() -> String {
    UNCATEGORIZED_NAME.to_string()
}

fn default_category_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

/// Input model for recording a new expense
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub category_id: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl NewExpense {
    /// Validates the input, dates it `today` when no date is given and drops
    /// a blank description.
    pub fn normalize(self, today: NaiveDate) -> Result<NewExpense> {
        let category_id = self.category_id.trim().to_string();
        if category_id.is_empty() {
            return Err(Error::missing_field("categoryId"));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::invalid_input("Amount must be greater than zero"));
        }
        if self.amount > MAX_AMOUNT {
            return Err(Error::invalid_input(format!(
                "Amount must not exceed {}",
                MAX_AMOUNT
            )));
        }
        Ok(NewExpense {
            category_id,
            amount: self.amount,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            date: Some(self.date.unwrap_or(today)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let expense = NewExpense {
            category_id: " c1 ".to_string(),
            amount: dec!(12.5),
            description: Some("   ".to_string()),
            date: None,
        }
        .normalize(today())
        .unwrap();

        assert_eq!(expense.category_id, "c1");
        assert_eq!(expense.description, None);
        assert_eq!(expense.date, Some(today()));
    }

    #[test]
    fn test_normalize_rejects_invalid_input() {
        let no_category = NewExpense {
            amount: dec!(10),
            ..Default::default()
        };
        assert!(no_category.normalize(today()).is_err());

        for amount in [dec!(0), dec!(-5)] {
            let expense = NewExpense {
                category_id: "c1".to_string(),
                amount,
                ..Default::default()
            };
            assert!(expense.normalize(today()).unwrap_err().is_validation());
        }
    }

    #[test]
    fn test_normalize_caps_amount() {
        let at_cap = NewExpense {
            category_id: "c1".to_string(),
            amount: MAX_AMOUNT,
            ..Default::default()
        };
        assert!(at_cap.clone().normalize(today()).is_ok());

        let oversized = NewExpense {
            amount: dec!(1000000000000000000000000000),
            ..at_cap
        };
        assert!(oversized.normalize(today()).unwrap_err().is_validation());
    }

    #[test]
    fn test_missing_category_fields_use_defaults() {
        let json = r#"{
            "id": "e1", "userId": "u1", "categoryId": "c1", "amount": 30.0,
            "description": null, "date": "2024-03-01",
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;
        let expense: ExpenseWithCategory = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category_name, UNCATEGORIZED_NAME);
        assert_eq!(expense.category_color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(expense.expense.amount, dec!(30));
    }
}
