use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::expenses_model::{Expense, ExpenseWithCategory, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::auth::AuthenticatedUser;
use crate::categories::CategoryRepositoryTrait;
use crate::constants::RECENT_EXPENSES_LIMIT;
use crate::errors::{Error, Result};
use crate::utils::period::Period;

pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        ExpenseService {
            expense_repository,
            category_repository,
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn create_expense(
        &self,
        user: &AuthenticatedUser,
        new_expense: NewExpense,
        today: NaiveDate,
    ) -> Result<Expense> {
        let new_expense = new_expense.normalize(today)?;

        if self
            .category_repository
            .get_by_id(user, &new_expense.category_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!(
                "Category {}",
                new_expense.category_id
            )));
        }

        debug!(
            "Recording expense of {} in category {}",
            new_expense.amount, new_expense.category_id
        );
        self.expense_repository.create(user, new_expense).await
    }

    async fn list_expenses(
        &self,
        user: &AuthenticatedUser,
        period: Period,
    ) -> Result<Vec<ExpenseWithCategory>> {
        self.expense_repository
            .list_in_range(user, period.start(), period.end())
            .await
    }

    async fn list_category_expenses(
        &self,
        user: &AuthenticatedUser,
        category_id: &str,
        period: Period,
    ) -> Result<Vec<Expense>> {
        self.expense_repository
            .list_by_category_in_range(user, category_id, period.start(), period.end())
            .await
    }

    async fn recent_expenses(
        &self,
        user: &AuthenticatedUser,
        limit: Option<usize>,
    ) -> Result<Vec<ExpenseWithCategory>> {
        let limit = limit.unwrap_or(RECENT_EXPENSES_LIMIT);
        self.expense_repository.list_recent(user, limit).await
    }
}
