use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::dashboard_model::Dashboard;
use crate::auth::AuthenticatedUser;
use crate::constants::RECENT_EXPENSES_LIMIT;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::spending::SpendingServiceTrait;
use crate::utils::period::Period;

/// Trait for dashboard service operations
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn get_dashboard(&self, user: &AuthenticatedUser, today: NaiveDate) -> Result<Dashboard>;
}

pub struct DashboardService {
    spending_service: Arc<dyn SpendingServiceTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        spending_service: Arc<dyn SpendingServiceTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        DashboardService {
            spending_service,
            expense_repository,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard(&self, user: &AuthenticatedUser, today: NaiveDate) -> Result<Dashboard> {
        let aggregate = self
            .spending_service
            .aggregate_period(user, Period::containing(today))
            .await?;
        let recent = self
            .expense_repository
            .list_recent(user, RECENT_EXPENSES_LIMIT)
            .await?;
        Ok(Dashboard::new(&aggregate, today, recent))
    }
}
