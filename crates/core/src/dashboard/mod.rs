//! Dashboard module - the month-at-a-glance summary.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::Dashboard;
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
