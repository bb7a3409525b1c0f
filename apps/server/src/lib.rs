pub mod api;
pub mod auth;
pub mod config;
pub mod error;
mod main_lib;

pub use main_lib::{build_services, build_state, init_tracing, AppState, Repositories};
