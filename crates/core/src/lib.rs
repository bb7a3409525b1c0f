//! AppFinance Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the AppFinance expense tracker.
//! It is backend-agnostic and defines repository traits that are implemented
//! by the `storage-supabase` crate.

pub mod alerts;
pub mod auth;
pub mod categories;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod fixed_accounts;
pub mod reports;
pub mod spending;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export types used across every service signature
pub use auth::AuthenticatedUser;
pub use utils::period::Period;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
