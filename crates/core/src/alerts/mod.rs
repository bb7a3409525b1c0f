//! Alerts module - spending tiers against category limits.

mod alerts_model;


pub use alerts_model::{evaluate_alert, spending_percentage, AlertTier, CategoryAlert};
