//! Spending module - per-period aggregation of expenses against categories.

mod spending_model;
mod spending_service;
mod spending_traits;

pub use spending_model::{aggregate_expenses, CategorySpending, SpendingAggregate};
pub use spending_service::SpendingService;
pub use spending_traits::SpendingServiceTrait;
