use std::sync::Arc;

use appfinance_core::errors::Error;
use appfinance_core::fixed_accounts::{
    FixedAccount, FixedAccountRepositoryTrait, FixedAccountUpdate, NewFixedAccount,
};
use appfinance_core::{AuthenticatedUser, Period, Result};
use async_trait::async_trait;

use super::model::{FixedAccountChangesRow, FixedAccountRow, NewFixedAccountRow};
use crate::client::SupabaseClient;
use crate::query::Query;

const TABLE: &str = "fixed_accounts";

pub struct FixedAccountRepository {
    client: Arc<SupabaseClient>,
}

impl FixedAccountRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        FixedAccountRepository { client }
    }

    async fn apply_changes(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        changes: FixedAccountChangesRow<'_>,
    ) -> Result<FixedAccount> {
        let query = Query::new().eq("user_id", &user.id).eq("id", id);
        let rows: Vec<FixedAccountRow> = self.client.update(user, TABLE, &query, &changes).await?;
        rows.into_iter()
            .next()
            .map(FixedAccount::from)
            .ok_or_else(|| Error::NotFound(format!("Fixed account {}", id)))
    }
}

#[async_trait]
impl FixedAccountRepositoryTrait for FixedAccountRepository {
    async fn list(&self, user: &AuthenticatedUser, period: Period) -> Result<Vec<FixedAccount>> {
        let query = Query::new()
            .select("*")
            .eq("user_id", &user.id)
            .eq("month", period.month())
            .eq("year", period.year())
            .order("due_day", true);
        let rows: Vec<FixedAccountRow> = self.client.select(user, TABLE, &query).await?;
        Ok(rows.into_iter().map(FixedAccount::from).collect())
    }

    async fn get_by_id(
        &self,
        user: &AuthenticatedUser,
        id: &str,
    ) -> Result<Option<FixedAccount>> {
        let query = Query::new()
            .select("*")
            .eq("user_id", &user.id)
            .eq("id", id)
            .limit(1);
        let rows: Vec<FixedAccountRow> = self.client.select(user, TABLE, &query).await?;
        Ok(rows.into_iter().next().map(FixedAccount::from))
    }

    async fn create(
        &self,
        user: &AuthenticatedUser,
        new_account: NewFixedAccount,
        period: Period,
    ) -> Result<FixedAccount> {
        let row = NewFixedAccountRow {
            user_id: &user.id,
            name: &new_account.name,
            amount: new_account.amount,
            due_day: new_account.due_day,
            is_paid: false,
            month: period.month(),
            year: period.year(),
        };
        let created: FixedAccountRow = self.client.insert(user, TABLE, &row).await?;
        Ok(created.into())
    }

    async fn update(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        update: FixedAccountUpdate,
    ) -> Result<FixedAccount> {
        let changes = FixedAccountChangesRow {
            name: Some(update.name.as_str()),
            amount: Some(update.amount),
            due_day: Some(update.due_day),
            is_paid: None,
        };
        self.apply_changes(user, id, changes).await
    }

    async fn set_paid(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        is_paid: bool,
    ) -> Result<FixedAccount> {
        let changes = FixedAccountChangesRow {
            is_paid: Some(is_paid),
            ..Default::default()
        };
        self.apply_changes(user, id, changes).await
    }

    async fn delete(&self, user: &AuthenticatedUser, id: &str) -> Result<()> {
        let query = Query::new().eq("user_id", &user.id).eq("id", id);
        self.client.delete(user, TABLE, &query).await?;
        Ok(())
    }
}
