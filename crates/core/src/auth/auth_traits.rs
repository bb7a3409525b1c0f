use async_trait::async_trait;

use crate::auth::auth_model::{
    AuthSession, AuthUser, AuthenticatedUser, OAuthProvider, Profile, SignInRequest,
    SignUpRequest, SignUpResult,
};
use crate::errors::Result;

/// Trait for the hosted auth service. Credentials never stay in this process;
/// every call is forwarded to the provider.
#[async_trait]
pub trait AuthProviderTrait: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResult>;
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession>;
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession>;
    async fn send_password_reset(&self, email: &str, redirect_to: Option<&str>) -> Result<()>;
    async fn update_password(&self, access_token: &str, new_password: &str) -> Result<AuthUser>;
    async fn get_user(&self, access_token: &str) -> Result<AuthUser>;
    async fn sign_out(&self, access_token: &str) -> Result<()>;
    fn oauth_authorize_url(&self, provider: OAuthProvider, redirect_to: Option<&str>)
        -> Result<String>;
}

/// Trait for profile repository operations
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    async fn create_profile(&self, user: &AuthenticatedUser, username: &str) -> Result<Profile>;
    async fn get_profile(&self, user: &AuthenticatedUser) -> Result<Option<Profile>>;
}

/// Trait for auth service operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResult>;
    async fn sign_in(&self, request: SignInRequest) -> Result<AuthSession>;
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession>;
    async fn request_password_reset(&self, email: &str) -> Result<()>;
    async fn change_password(&self, user: &AuthenticatedUser, new_password: &str) -> Result<()>;
    /// Resolves a bearer token into the calling user.
    async fn authenticate(&self, access_token: &str) -> Result<AuthenticatedUser>;
    async fn sign_out(&self, user: &AuthenticatedUser) -> Result<()>;
    async fn get_profile(&self, user: &AuthenticatedUser) -> Result<Option<Profile>>;
    fn google_sign_in_url(&self) -> Result<String>;
}
