use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};

use super::auth_model::{
    is_valid_email, validate_password, AuthSession, AuthenticatedUser, OAuthProvider, Profile,
    SignInRequest, SignUpRequest, SignUpResult,
};
use super::auth_traits::{AuthProviderTrait, AuthServiceTrait, ProfileRepositoryTrait};
use crate::errors::{AuthError, Error, Result};

/// Where the auth service sends users back to after email links and OAuth.
#[derive(Debug, Clone, Default)]
pub struct AuthRedirects {
    pub password_reset: Option<String>,
    pub oauth: Option<String>,
}

pub struct AuthService {
    provider: Arc<dyn AuthProviderTrait>,
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
    redirects: AuthRedirects,
}

impl AuthService {
    pub fn new(
        provider: Arc<dyn AuthProviderTrait>,
        profile_repository: Arc<dyn ProfileRepositoryTrait>,
        redirects: AuthRedirects,
    ) -> Self {
        AuthService {
            provider,
            profile_repository,
            redirects,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResult> {
        request.validate()?;
        let email = request.email.trim();
        debug!("Signing up {}", email);

        let result = self.provider.sign_up(email, &request.password).await?;

        // Without a session the profile insert runs with the anonymous key.
        let token = result
            .session
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_default();
        let scope = AuthenticatedUser::new(result.user.clone(), token);
        self.profile_repository
            .create_profile(&scope, request.username.trim())
            .await
            .map_err(|e| {
                error!("Failed to create profile for {}: {}", scope.id, e);
                Error::Auth(AuthError::ProfileCreationFailed(e.to_string()))
            })?;

        Ok(result)
    }

    async fn sign_in(&self, request: SignInRequest) -> Result<AuthSession> {
        request.validate()?;
        self.provider
            .sign_in_with_password(request.email.trim(), &request.password)
            .await
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession> {
        if refresh_token.trim().is_empty() {
            return Err(Error::missing_field("refreshToken"));
        }
        self.provider.refresh_session(refresh_token.trim()).await
    }

    async fn request_password_reset(&self, email: &str) -> Result<()> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(Error::invalid_input("Email address is not valid"));
        }
        self.provider
            .send_password_reset(email, self.redirects.password_reset.as_deref())
            .await
    }

    async fn change_password(&self, user: &AuthenticatedUser, new_password: &str) -> Result<()> {
        validate_password(new_password)?;
        self.provider
            .update_password(&user.access_token, new_password)
            .await?;
        Ok(())
    }

    async fn authenticate(&self, access_token: &str) -> Result<AuthenticatedUser> {
        let token = access_token.trim();
        if token.is_empty() {
            return Err(Error::Auth(AuthError::Unauthorized));
        }
        let user = self.provider.get_user(token).await?;
        Ok(AuthenticatedUser::new(user, token))
    }

    async fn sign_out(&self, user: &AuthenticatedUser) -> Result<()> {
        self.provider.sign_out(&user.access_token).await
    }

    async fn get_profile(&self, user: &AuthenticatedUser) -> Result<Option<Profile>> {
        self.profile_repository.get_profile(user).await
    }

    fn google_sign_in_url(&self) -> Result<String> {
        self.provider
            .oauth_authorize_url(OAuthProvider::Google, self.redirects.oauth.as_deref())
    }
}
