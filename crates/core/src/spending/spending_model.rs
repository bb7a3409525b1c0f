//! Aggregation of expenses into per-category and per-day totals.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::alerts::{evaluate_alert, spending_percentage, AlertTier, CategoryAlert};
use crate::categories::Category;
use crate::constants::{DEFAULT_CATEGORY_COLOR, UNCATEGORIZED_NAME};
use crate::expenses::Expense;
use crate::utils::period::Period;

/// What was spent on one category during a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category_id: String,
    pub category_name: String,
    pub color: String,
    pub limit: Decimal,
    pub total: Decimal,
    pub expense_count: usize,
    pub percentage: Decimal,
    pub tier: AlertTier,
}

impl CategorySpending {
    fn empty(category_id: &str, name: &str, color: &str, limit: Decimal) -> Self {
        CategorySpending {
            category_id: category_id.to_string(),
            category_name: name.to_string(),
            color: color.to_string(),
            limit,
            total: Decimal::ZERO,
            expense_count: 0,
            percentage: Decimal::ZERO,
            tier: AlertTier::Normal,
        }
    }

    pub fn alert(&self) -> Option<CategoryAlert> {
        evaluate_alert(
            &self.category_id,
            &self.category_name,
            &self.color,
            self.total,
            self.limit,
        )
    }
}

/// Totals for one period. Recomputed on every read; nothing here is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingAggregate {
    pub period: Period,
    /// Keyed by category id. Every known category has an entry, even with no
    /// spending in the period.
    pub by_category: HashMap<String, CategorySpending>,
    pub daily: BTreeMap<NaiveDate, Decimal>,
    pub total: Decimal,
    pub expense_count: usize,
}

impl SpendingAggregate {
    /// Categories at or past the near-limit threshold, exceeded first, then
    /// by percentage.
    pub fn alerts(&self) -> Vec<CategoryAlert> {
        let mut alerts: Vec<CategoryAlert> = self
            .by_category
            .values()
            .filter_map(CategorySpending::alert)
            .collect();
        alerts.sort_by(|a, b| {
            b.tier
                .severity()
                .cmp(&a.tier.severity())
                .then_with(|| b.percentage.cmp(&a.percentage))
                .then_with(|| a.category_name.cmp(&b.category_name))
        });
        alerts
    }

    /// Categories with at least one expense, largest total first.
    pub fn category_summaries(&self) -> Vec<CategorySpending> {
        let mut rows: Vec<CategorySpending> = self
            .by_category
            .values()
            .filter(|c| c.expense_count > 0)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });
        rows
    }

    pub fn total_on(&self, date: NaiveDate) -> Decimal {
        self.daily.get(&date).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn category(&self, category_id: &str) -> Option<&CategorySpending> {
        self.by_category.get(category_id)
    }
}

/// Groups the expenses dated inside `period` by category and by day.
///
/// Expenses pointing at a category missing from `categories` are grouped
/// under an "Uncategorized" bucket with no limit.
pub fn aggregate_expenses<'a, I>(
    expenses: I,
    categories: &[Category],
    period: Period,
) -> SpendingAggregate
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut by_category: HashMap<String, CategorySpending> = categories
        .iter()
        .map(|c| {
            (
                c.id.clone(),
                CategorySpending::empty(&c.id, &c.name, &c.color, c.limit_amount),
            )
        })
        .collect();
    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut total = Decimal::ZERO;
    let mut expense_count = 0;

    for expense in expenses.into_iter().filter(|e| period.contains(e.date)) {
        let bucket = by_category
            .entry(expense.category_id.clone())
            .or_insert_with(|| {
                CategorySpending::empty(
                    &expense.category_id,
                    UNCATEGORIZED_NAME,
                    DEFAULT_CATEGORY_COLOR,
                    Decimal::ZERO,
                )
            });
        bucket.total = bucket.total.saturating_add(expense.amount);
        bucket.expense_count += 1;

        let day = daily.entry(expense.date).or_insert(Decimal::ZERO);
        *day = day.saturating_add(expense.amount);
        total = total.saturating_add(expense.amount);
        expense_count += 1;
    }

    for bucket in by_category.values_mut() {
        bucket.tier = AlertTier::from_amounts(bucket.total, bucket.limit);
        bucket.percentage = spending_percentage(bucket.total, bucket.limit);
    }

    SpendingAggregate {
        period,
        by_category,
        daily,
        total,
        expense_count,
    }
}
