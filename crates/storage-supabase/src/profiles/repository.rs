use std::sync::Arc;

use appfinance_core::auth::{Profile, ProfileRepositoryTrait};
use appfinance_core::{AuthenticatedUser, Result};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::client::SupabaseClient;
use crate::query::Query;

const TABLE: &str = "profiles";

/// Row of the `profiles` table, used for both reads and inserts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRow {
    pub user_id: String,
    pub username: String,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            user_id: row.user_id,
            username: row.username,
        }
    }
}

pub struct ProfileRepository {
    client: Arc<SupabaseClient>,
}

impl ProfileRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        ProfileRepository { client }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    async fn create_profile(&self, user: &AuthenticatedUser, username: &str) -> Result<Profile> {
        debug!("Creating profile for {}", user.id);
        let row = ProfileRow {
            user_id: user.id.clone(),
            username: username.to_string(),
        };
        let created: ProfileRow = self.client.insert(user, TABLE, &row).await?;
        Ok(created.into())
    }

    async fn get_profile(&self, user: &AuthenticatedUser) -> Result<Option<Profile>> {
        let query = Query::new()
            .select("user_id,username")
            .eq("user_id", &user.id)
            .limit(1);
        let rows: Vec<ProfileRow> = self.client.select(user, TABLE, &query).await?;
        Ok(rows.into_iter().next().map(Profile::from))
    }
}
