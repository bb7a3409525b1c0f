use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};

use super::categories_model::{Category, CategoryUpdate, CategoryWithSpending, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::alerts::AlertTier;
use crate::auth::AuthenticatedUser;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;
use crate::spending::aggregate_expenses;
use crate::utils::period::Period;

pub struct CategoryService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl CategoryService {
    pub fn new(
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        CategoryService {
            category_repository,
            expense_repository,
        }
    }

    async fn ensure_exists(&self, user: &AuthenticatedUser, id: &str) -> Result<()> {
        match self.category_repository.get_by_id(user, id).await? {
            Some(_) => Ok(()),
            None => Err(Error::NotFound(format!("Category {}", id))),
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn list_categories(&self, user: &AuthenticatedUser) -> Result<Vec<Category>> {
        self.category_repository.list(user).await
    }

    async fn list_categories_with_spending(
        &self,
        user: &AuthenticatedUser,
        today: NaiveDate,
    ) -> Result<Vec<CategoryWithSpending>> {
        let period = Period::containing(today);
        let categories = self.category_repository.list(user).await?;
        let expenses = self
            .expense_repository
            .list_in_range(user, period.start(), period.end())
            .await?;
        let aggregate = aggregate_expenses(expenses.iter().map(|e| &e.expense), &categories, period);

        Ok(categories
            .into_iter()
            .map(|category| {
                let spending = aggregate.category(&category.id);
                CategoryWithSpending {
                    spent: spending.map(|s| s.total).unwrap_or_default(),
                    expense_count: spending.map(|s| s.expense_count).unwrap_or_default(),
                    percentage: spending.map(|s| s.percentage).unwrap_or_default(),
                    tier: spending.map(|s| s.tier).unwrap_or(AlertTier::Normal),
                    category,
                }
            })
            .collect())
    }

    async fn create_category(
        &self,
        user: &AuthenticatedUser,
        new_category: NewCategory,
    ) -> Result<Category> {
        let details = new_category.into_details()?;
        debug!("Creating category '{}'", details.name);
        self.category_repository.create(user, details).await
    }

    async fn update_category(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        let details = update.into_details()?;
        self.ensure_exists(user, id).await?;
        self.category_repository.update(user, id, details).await
    }

    async fn delete_category(&self, user: &AuthenticatedUser, id: &str) -> Result<()> {
        self.ensure_exists(user, id).await?;
        // Expenses go first so none is left pointing at a missing category.
        self.expense_repository.delete_by_category(user, id).await?;
        self.category_repository.delete(user, id).await?;
        info!("Deleted category {} and its expenses", id);
        Ok(())
    }
}
