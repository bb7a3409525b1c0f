use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::fixed_accounts_model::{
    FixedAccount, FixedAccountUpdate, FixedAccountsOverview, NewFixedAccount,
};
use super::fixed_accounts_traits::{FixedAccountRepositoryTrait, FixedAccountServiceTrait};
use crate::auth::AuthenticatedUser;
use crate::errors::{Error, Result};
use crate::utils::period::Period;

pub struct FixedAccountService {
    repository: Arc<dyn FixedAccountRepositoryTrait>,
}

impl FixedAccountService {
    pub fn new(repository: Arc<dyn FixedAccountRepositoryTrait>) -> Self {
        FixedAccountService { repository }
    }

    async fn get_existing(&self, user: &AuthenticatedUser, id: &str) -> Result<FixedAccount> {
        self.repository
            .get_by_id(user, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Fixed account {}", id)))
    }
}

#[async_trait]
impl FixedAccountServiceTrait for FixedAccountService {
    async fn list_fixed_accounts(
        &self,
        user: &AuthenticatedUser,
        period: Period,
    ) -> Result<Vec<FixedAccount>> {
        self.repository.list(user, period).await
    }

    async fn get_overview(
        &self,
        user: &AuthenticatedUser,
        period: Period,
        today: NaiveDate,
    ) -> Result<FixedAccountsOverview> {
        let accounts = self.repository.list(user, period).await?;
        Ok(FixedAccountsOverview::new(period, accounts, today))
    }

    async fn create_fixed_account(
        &self,
        user: &AuthenticatedUser,
        new_account: NewFixedAccount,
        today: NaiveDate,
    ) -> Result<FixedAccount> {
        let period = new_account.validate(today)?;
        let new_account = NewFixedAccount {
            name: new_account.name.trim().to_string(),
            ..new_account
        };
        debug!("Creating fixed account '{}' for {}", new_account.name, period);
        self.repository.create(user, new_account, period).await
    }

    async fn update_fixed_account(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        update: FixedAccountUpdate,
    ) -> Result<FixedAccount> {
        update.validate()?;
        self.get_existing(user, id).await?;
        let update = FixedAccountUpdate {
            name: update.name.trim().to_string(),
            ..update
        };
        self.repository.update(user, id, update).await
    }

    async fn toggle_paid(&self, user: &AuthenticatedUser, id: &str) -> Result<FixedAccount> {
        let account = self.get_existing(user, id).await?;
        self.repository.set_paid(user, id, !account.is_paid).await
    }

    async fn delete_fixed_account(&self, user: &AuthenticatedUser, id: &str) -> Result<()> {
        self.get_existing(user, id).await?;
        self.repository.delete(user, id).await
    }
}
