use async_trait::async_trait;

use crate::auth::AuthenticatedUser;
use crate::errors::Result;
use crate::reports::reports_model::{ExportFormat, ExportedFile, MonthlyReport};
use crate::utils::period::Period;

/// Trait for report service operations
#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    async fn get_monthly_report(
        &self,
        user: &AuthenticatedUser,
        period: Period,
    ) -> Result<MonthlyReport>;

    async fn export_report(
        &self,
        user: &AuthenticatedUser,
        period: Period,
        format: ExportFormat,
    ) -> Result<ExportedFile>;
}
