use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::alerts::{AlertTier, CategoryAlert};
use crate::expenses::ExpenseWithCategory;
use crate::spending::SpendingAggregate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub month: u32,
    pub year: i32,
    pub total_month: Decimal,
    pub total_today: Decimal,
    /// Categories near or past their limit, exceeded first.
    pub alerts: Vec<CategoryAlert>,
    pub categories_over_limit: Vec<CategoryAlert>,
    pub recent_expenses: Vec<ExpenseWithCategory>,
}

impl Dashboard {
    pub fn new(
        aggregate: &SpendingAggregate,
        today: NaiveDate,
        recent_expenses: Vec<ExpenseWithCategory>,
    ) -> Self {
        let alerts = aggregate.alerts();
        let categories_over_limit = alerts
            .iter()
            .filter(|a| a.tier == AlertTier::Exceeded)
            .cloned()
            .collect();
        Dashboard {
            month: aggregate.period.month(),
            year: aggregate.period.year(),
            total_month: aggregate.total,
            total_today: aggregate.total_on(today),
            alerts,
            categories_over_limit,
            recent_expenses,
        }
    }
}
