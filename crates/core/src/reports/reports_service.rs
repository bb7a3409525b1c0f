use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::csv_export::export_csv;
use super::pdf_export::export_pdf;
use super::reports_model::{ExportFormat, ExportedFile, MonthlyReport};
use super::reports_traits::ReportServiceTrait;
use crate::auth::AuthenticatedUser;
use crate::errors::Result;
use crate::spending::SpendingServiceTrait;
use crate::utils::period::Period;

pub struct ReportService {
    spending_service: Arc<dyn SpendingServiceTrait>,
}

impl ReportService {
    pub fn new(spending_service: Arc<dyn SpendingServiceTrait>) -> Self {
        ReportService { spending_service }
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn get_monthly_report(
        &self,
        user: &AuthenticatedUser,
        period: Period,
    ) -> Result<MonthlyReport> {
        let aggregate = self.spending_service.aggregate_period(user, period).await?;
        Ok(MonthlyReport::from_aggregate(&aggregate))
    }

    async fn export_report(
        &self,
        user: &AuthenticatedUser,
        period: Period,
        format: ExportFormat,
    ) -> Result<ExportedFile> {
        let report = self.get_monthly_report(user, period).await?;
        let bytes = match format {
            ExportFormat::Csv => export_csv(&report.categories)?.into_bytes(),
            ExportFormat::Pdf => export_pdf(&report)?,
        };
        debug!(
            "Exported {} report for {} ({} bytes)",
            format,
            period,
            bytes.len()
        );

        Ok(ExportedFile {
            file_name: format.file_name(report.month, report.year),
            content_type: format.content_type(),
            bytes,
        })
    }
}
