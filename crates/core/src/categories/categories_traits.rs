use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::AuthenticatedUser;
use crate::categories::categories_model::{
    Category, CategoryDetails, CategoryUpdate, CategoryWithSpending, NewCategory,
};
use crate::errors::Result;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Lists the user's categories ordered by name.
    async fn list(&self, user: &AuthenticatedUser) -> Result<Vec<Category>>;
    async fn get_by_id(&self, user: &AuthenticatedUser, id: &str) -> Result<Option<Category>>;
    async fn create(&self, user: &AuthenticatedUser, details: CategoryDetails) -> Result<Category>;
    async fn update(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        details: CategoryDetails,
    ) -> Result<Category>;
    async fn delete(&self, user: &AuthenticatedUser, id: &str) -> Result<()>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    async fn list_categories(&self, user: &AuthenticatedUser) -> Result<Vec<Category>>;
    async fn list_categories_with_spending(
        &self,
        user: &AuthenticatedUser,
        today: NaiveDate,
    ) -> Result<Vec<CategoryWithSpending>>;
    async fn create_category(
        &self,
        user: &AuthenticatedUser,
        new_category: NewCategory,
    ) -> Result<Category>;
    async fn update_category(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;
    async fn delete_category(&self, user: &AuthenticatedUser, id: &str) -> Result<()>;
}
