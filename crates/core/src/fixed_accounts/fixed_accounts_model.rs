//! Fixed account domain models.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_AMOUNT;
use crate::errors::{Error, Result};
use crate::utils::period::Period;

/// A bill that recurs every month. Each period has its own row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedAccount {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub due_day: u32,
    pub is_paid: bool,
    pub month: u32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

impl FixedAccount {
    pub fn period(&self) -> Result<Period> {
        Period::new(self.month, self.year)
    }

    /// An unpaid account is overdue once its period is over, or once its due
    /// day has passed within the current period.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.is_paid {
            return false;
        }
        let current = (today.year(), today.month());
        let own = (self.year, self.month);
        if own < current {
            true
        } else if own == current {
            today.day() > self.due_day
        } else {
            false
        }
    }
}

/// Input model for creating a fixed account. Month and year default to the
/// current period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFixedAccount {
    pub name: String,
    pub amount: Decimal,
    pub due_day: u32,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl NewFixedAccount {
    /// Validates the input and resolves the period it belongs to.
    pub fn validate(&self, today: NaiveDate) -> Result<Period> {
        validate_fields(&self.name, self.amount, self.due_day)?;
        let current = Period::containing(today);
        Period::new(
            self.month.unwrap_or(current.month()),
            self.year.unwrap_or(current.year()),
        )
    }
}

/// Input model for editing a fixed account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedAccountUpdate {
    pub name: String,
    pub amount: Decimal,
    pub due_day: u32,
}

impl FixedAccountUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, self.amount, self.due_day)
    }
}

fn validate_fields(name: &str, amount: Decimal, due_day: u32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::missing_field("name"));
    }
    if amount <= Decimal::ZERO {
        return Err(Error::invalid_input("Amount must be greater than zero"));
    }
    if amount > MAX_AMOUNT {
        return Err(Error::invalid_input(format!(
            "Amount must not exceed {}",
            MAX_AMOUNT
        )));
    }
    if !(1..=31).contains(&due_day) {
        return Err(Error::invalid_input("Due day must be between 1 and 31"));
    }
    Ok(())
}

/// Totals over a list of fixed accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedAccountSummary {
    pub total: Decimal,
    pub paid: Decimal,
    pub pending: Decimal,
    pub overdue_count: usize,
}

impl FixedAccountSummary {
    pub fn from_accounts(accounts: &[FixedAccount], today: NaiveDate) -> Self {
        accounts
            .iter()
            .fold(FixedAccountSummary::default(), |mut summary, account| {
                summary.total = summary.total.saturating_add(account.amount);
                if account.is_paid {
                    summary.paid = summary.paid.saturating_add(account.amount);
                } else {
                    summary.pending = summary.pending.saturating_add(account.amount);
                }
                if account.is_overdue(today) {
                    summary.overdue_count += 1;
                }
                summary
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedAccountStatus {
    #[serde(flatten)]
    pub account: FixedAccount,
    pub is_overdue: bool,
}

/// The accounts of one period with their overdue flags and totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedAccountsOverview {
    pub month: u32,
    pub year: i32,
    pub accounts: Vec<FixedAccountStatus>,
    pub summary: FixedAccountSummary,
}

impl FixedAccountsOverview {
    pub fn new(period: Period, accounts: Vec<FixedAccount>, today: NaiveDate) -> Self {
        let summary = FixedAccountSummary::from_accounts(&accounts, today);
        FixedAccountsOverview {
            month: period.month(),
            year: period.year(),
            accounts: accounts
                .into_iter()
                .map(|account| FixedAccountStatus {
                    is_overdue: account.is_overdue(today),
                    account,
                })
                .collect(),
            summary,
        }
    }
}
