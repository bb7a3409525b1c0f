use async_trait::async_trait;

use crate::auth::AuthenticatedUser;
use crate::errors::Result;
use crate::spending::spending_model::SpendingAggregate;
use crate::utils::period::Period;

/// Trait for spending aggregation
#[async_trait]
pub trait SpendingServiceTrait: Send + Sync {
    /// Loads the user's categories and the period's expenses and aggregates them.
    async fn aggregate_period(
        &self,
        user: &AuthenticatedUser,
        period: Period,
    ) -> Result<SpendingAggregate>;
}
