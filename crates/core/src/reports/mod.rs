//! Reports module - monthly spending reports and their CSV/PDF exports.

mod csv_export;
mod pdf_export;
mod reports_model;
mod reports_service;
mod reports_traits;

pub use csv_export::export_csv;
pub use pdf_export::export_pdf;
pub use reports_model::{CategoryReportRow, DailyTotal, ExportFormat, ExportedFile, MonthlyReport};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
