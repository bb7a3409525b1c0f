//! Auth module - session models, provider traits, and the validating auth service.

mod auth_model;
mod auth_service;
mod auth_traits;

pub use auth_model::{
    is_valid_email, AuthSession, AuthUser, AuthenticatedUser, OAuthProvider, Profile,
    SignInRequest, SignUpRequest, SignUpResult,
};
pub use auth_service::{AuthRedirects, AuthService};
pub use auth_traits::{AuthProviderTrait, AuthServiceTrait, ProfileRepositoryTrait};
