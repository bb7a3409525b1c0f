use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::AuthenticatedUser;
use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseWithCategory, NewExpense};
use crate::utils::period::Period;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    async fn create(&self, user: &AuthenticatedUser, new_expense: NewExpense) -> Result<Expense>;

    /// Expenses dated in `[start, end)`, newest date first.
    async fn list_in_range(
        &self,
        user: &AuthenticatedUser,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExpenseWithCategory>>;

    /// Expenses of one category dated in `[start, end)`.
    async fn list_by_category_in_range(
        &self,
        user: &AuthenticatedUser,
        category_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;

    /// Most recently created expenses.
    async fn list_recent(
        &self,
        user: &AuthenticatedUser,
        limit: usize,
    ) -> Result<Vec<ExpenseWithCategory>>;

    async fn delete_by_category(&self, user: &AuthenticatedUser, category_id: &str) -> Result<()>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn create_expense(
        &self,
        user: &AuthenticatedUser,
        new_expense: NewExpense,
        today: NaiveDate,
    ) -> Result<Expense>;
    async fn list_expenses(
        &self,
        user: &AuthenticatedUser,
        period: Period,
    ) -> Result<Vec<ExpenseWithCategory>>;
    async fn list_category_expenses(
        &self,
        user: &AuthenticatedUser,
        category_id: &str,
        period: Period,
    ) -> Result<Vec<Expense>>;
    async fn recent_expenses(
        &self,
        user: &AuthenticatedUser,
        limit: Option<usize>,
    ) -> Result<Vec<ExpenseWithCategory>>;
}
