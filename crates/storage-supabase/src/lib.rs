//! Supabase storage implementation for AppFinance.
//!
//! This crate talks to the hosted backend over HTTP and implements the
//! repository and auth traits defined in `appfinance-core`:
//! - `client` wraps the REST table API (`/rest/v1`) and auth API (`/auth/v1`)
//! - `query` builds PostgREST filter strings
//! - one module per table with its row models and repository
//!
//! ```text
//!        core (domain)
//!             │
//!             ▼
//!  storage-supabase (this crate)
//!             │  HTTPS + JSON
//!             ▼
//!   hosted tables / auth service
//! ```
//!
//! Every table request carries the caller's access token, so the backend's
//! row-level policies apply on top of the explicit `user_id` filters.

pub mod client;
pub mod errors;
pub mod query;

pub mod auth;
pub mod categories;
pub mod expenses;
pub mod fixed_accounts;
pub mod profiles;

pub use client::SupabaseClient;
pub use errors::{StorageError, StorageResult};
pub use query::Query;

pub use auth::SupabaseAuthProvider;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use fixed_accounts::FixedAccountRepository;
pub use profiles::ProfileRepository;

// Re-export from appfinance-core for convenience
pub use appfinance_core::errors::{BackendError, Error, Result};
