use std::sync::Arc;

use appfinance_core::errors::Error;
use appfinance_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseWithCategory, NewExpense};
use appfinance_core::{AuthenticatedUser, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{ExpenseRow, NewExpenseRow};
use crate::client::SupabaseClient;
use crate::query::Query;

const TABLE: &str = "expenses";
const WITH_CATEGORY: &str = "*,categories(name,color)";

pub struct ExpenseRepository {
    client: Arc<SupabaseClient>,
}

impl ExpenseRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        ExpenseRepository { client }
    }

    fn in_range(user: &AuthenticatedUser, start: NaiveDate, end: NaiveDate) -> Query {
        Query::new()
            .eq("user_id", &user.id)
            .gte("date", start)
            .lt("date", end)
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    async fn create(&self, user: &AuthenticatedUser, new_expense: NewExpense) -> Result<Expense> {
        let date = new_expense
            .date
            .ok_or_else(|| Error::missing_field("date"))?;
        let row = NewExpenseRow {
            user_id: &user.id,
            category_id: &new_expense.category_id,
            amount: new_expense.amount,
            description: new_expense.description.as_deref(),
            date,
        };
        let created: ExpenseRow = self.client.insert(user, TABLE, &row).await?;
        Ok(created.into())
    }

    async fn list_in_range(
        &self,
        user: &AuthenticatedUser,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExpenseWithCategory>> {
        let query = Self::in_range(user, start, end)
            .select(WITH_CATEGORY)
            .order("date", false)
            .order("created_at", false);
        let rows: Vec<ExpenseRow> = self.client.select(user, TABLE, &query).await?;
        Ok(rows.into_iter().map(ExpenseWithCategory::from).collect())
    }

    async fn list_by_category_in_range(
        &self,
        user: &AuthenticatedUser,
        category_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let query = Self::in_range(user, start, end)
            .eq("category_id", category_id)
            .select("*")
            .order("date", false);
        let rows: Vec<ExpenseRow> = self.client.select(user, TABLE, &query).await?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn list_recent(
        &self,
        user: &AuthenticatedUser,
        limit: usize,
    ) -> Result<Vec<ExpenseWithCategory>> {
        let query = Query::new()
            .select(WITH_CATEGORY)
            .eq("user_id", &user.id)
            .order("created_at", false)
            .limit(limit);
        let rows: Vec<ExpenseRow> = self.client.select(user, TABLE, &query).await?;
        Ok(rows.into_iter().map(ExpenseWithCategory::from).collect())
    }

    async fn delete_by_category(&self, user: &AuthenticatedUser, category_id: &str) -> Result<()> {
        let query = Query::new()
            .eq("user_id", &user.id)
            .eq("category_id", category_id);
        self.client.delete(user, TABLE, &query).await?;
        Ok(())
    }
}
