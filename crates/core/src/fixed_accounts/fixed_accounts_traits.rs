use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::AuthenticatedUser;
use crate::errors::Result;
use crate::fixed_accounts::fixed_accounts_model::{
    FixedAccount, FixedAccountUpdate, FixedAccountsOverview, NewFixedAccount,
};
use crate::utils::period::Period;

/// Trait for fixed account repository operations
#[async_trait]
pub trait FixedAccountRepositoryTrait: Send + Sync {
    /// Accounts of one period ordered by due day.
    async fn list(&self, user: &AuthenticatedUser, period: Period) -> Result<Vec<FixedAccount>>;
    async fn get_by_id(&self, user: &AuthenticatedUser, id: &str)
        -> Result<Option<FixedAccount>>;
    async fn create(
        &self,
        user: &AuthenticatedUser,
        new_account: NewFixedAccount,
        period: Period,
    ) -> Result<FixedAccount>;
    async fn update(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        update: FixedAccountUpdate,
    ) -> Result<FixedAccount>;
    async fn set_paid(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        is_paid: bool,
    ) -> Result<FixedAccount>;
    async fn delete(&self, user: &AuthenticatedUser, id: &str) -> Result<()>;
}

/// Trait for fixed account service operations
#[async_trait]
pub trait FixedAccountServiceTrait: Send + Sync {
    async fn list_fixed_accounts(
        &self,
        user: &AuthenticatedUser,
        period: Period,
    ) -> Result<Vec<FixedAccount>>;
    async fn get_overview(
        &self,
        user: &AuthenticatedUser,
        period: Period,
        today: NaiveDate,
    ) -> Result<FixedAccountsOverview>;
    async fn create_fixed_account(
        &self,
        user: &AuthenticatedUser,
        new_account: NewFixedAccount,
        today: NaiveDate,
    ) -> Result<FixedAccount>;
    async fn update_fixed_account(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        update: FixedAccountUpdate,
    ) -> Result<FixedAccount>;
    async fn toggle_paid(&self, user: &AuthenticatedUser, id: &str) -> Result<FixedAccount>;
    async fn delete_fixed_account(&self, user: &AuthenticatedUser, id: &str) -> Result<()>;
}
