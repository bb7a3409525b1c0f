use std::sync::Arc;

use appfinance_core::categories::{Category, CategoryDetails, CategoryRepositoryTrait};
use appfinance_core::errors::Error;
use appfinance_core::{AuthenticatedUser, Result};
use async_trait::async_trait;

use super::model::{CategoryRow, CategoryWriteRow};
use crate::client::SupabaseClient;
use crate::query::Query;

const TABLE: &str = "categories";

pub struct CategoryRepository {
    client: Arc<SupabaseClient>,
}

impl CategoryRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        CategoryRepository { client }
    }

    fn owned_by(user: &AuthenticatedUser) -> Query {
        Query::new().eq("user_id", &user.id)
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn list(&self, user: &AuthenticatedUser) -> Result<Vec<Category>> {
        let query = Self::owned_by(user).select("*").order("name", true);
        let rows: Vec<CategoryRow> = self.client.select(user, TABLE, &query).await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn get_by_id(&self, user: &AuthenticatedUser, id: &str) -> Result<Option<Category>> {
        let query = Self::owned_by(user).select("*").eq("id", id).limit(1);
        let rows: Vec<CategoryRow> = self.client.select(user, TABLE, &query).await?;
        Ok(rows.into_iter().next().map(Category::from))
    }

    async fn create(&self, user: &AuthenticatedUser, details: CategoryDetails) -> Result<Category> {
        let row: CategoryRow = self
            .client
            .insert(user, TABLE, &CategoryWriteRow::insert(&user.id, &details))
            .await?;
        Ok(row.into())
    }

    async fn update(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        details: CategoryDetails,
    ) -> Result<Category> {
        let query = Self::owned_by(user).eq("id", id);
        let rows: Vec<CategoryRow> = self
            .client
            .update(user, TABLE, &query, &CategoryWriteRow::changes(&details))
            .await?;
        rows.into_iter()
            .next()
            .map(Category::from)
            .ok_or_else(|| Error::NotFound(format!("Category {}", id)))
    }

    async fn delete(&self, user: &AuthenticatedUser, id: &str) -> Result<()> {
        let query = Self::owned_by(user).eq("id", id);
        self.client.delete(user, TABLE, &query).await?;
        Ok(())
    }
}
