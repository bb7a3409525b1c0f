use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::spending_model::{aggregate_expenses, SpendingAggregate};
use super::spending_traits::SpendingServiceTrait;
use crate::auth::AuthenticatedUser;
use crate::categories::CategoryRepositoryTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::utils::period::Period;

pub struct SpendingService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl SpendingService {
    pub fn new(
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        SpendingService {
            category_repository,
            expense_repository,
        }
    }
}

#[async_trait]
impl SpendingServiceTrait for SpendingService {
    async fn aggregate_period(
        &self,
        user: &AuthenticatedUser,
        period: Period,
    ) -> Result<SpendingAggregate> {
        let categories = self.category_repository.list(user).await?;
        let expenses = self
            .expense_repository
            .list_in_range(user, period.start(), period.end())
            .await?;
        debug!(
            "Aggregating {} expenses over {} categories for {}",
            expenses.len(),
            categories.len(),
            period
        );

        Ok(aggregate_expenses(
            expenses.iter().map(|e| &e.expense),
            &categories,
            period,
        ))
    }
}
