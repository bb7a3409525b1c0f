use std::sync::Arc;

use appfinance_core::auth::{AuthProviderTrait, AuthSession, AuthUser, OAuthProvider, SignUpResult};
use appfinance_core::errors::{AuthError, Error};
use appfinance_core::Result;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Method;

use super::model::{
    PasswordCredentials, PasswordUpdate, RecoverBody, RefreshTokenBody, SessionResponse,
    SignUpResponse, UserResponse,
};
use crate::client::SupabaseClient;
use crate::errors::StorageError;

/// Auth provider backed by the hosted auth API (`/auth/v1`).
pub struct SupabaseAuthProvider {
    client: Arc<SupabaseClient>,
}

impl SupabaseAuthProvider {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        SupabaseAuthProvider { client }
    }
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Maps client errors (4xx) of an auth call to `on_client_error`; everything
/// else goes through the regular conversion.
fn map_auth_error(err: StorageError, on_client_error: fn(String) -> AuthError) -> Error {
    match err {
        StorageError::Status { status, message } if (400..500).contains(&status) => {
            warn!("Auth request rejected ({}): {}", status, message);
            Error::Auth(on_client_error(message))
        }
        other => other.into(),
    }
}

#[async_trait]
impl AuthProviderTrait for SupabaseAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResult> {
        let body = PasswordCredentials { email, password };
        let response: SignUpResponse = self
            .client
            .auth_send(Method::POST, "signup", &[], None, Some(&body))
            .await
            .map_err(|e| map_auth_error(e, AuthError::SignUpRejected))?;
        Ok(response.into())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession> {
        let body = PasswordCredentials { email, password };
        let session: SessionResponse = self
            .client
            .auth_send(
                Method::POST,
                "token",
                &pairs(&[("grant_type", "password")]),
                None,
                Some(&body),
            )
            .await
            .map_err(|e| map_auth_error(e, AuthError::InvalidCredentials))?;
        debug!("Signed in user {}", session.user.id);
        Ok(session.into())
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession> {
        let body = RefreshTokenBody { refresh_token };
        let session: SessionResponse = self
            .client
            .auth_send(
                Method::POST,
                "token",
                &pairs(&[("grant_type", "refresh_token")]),
                None,
                Some(&body),
            )
            .await
            .map_err(|e| map_auth_error(e, |_| AuthError::Unauthorized))?;
        Ok(session.into())
    }

    async fn send_password_reset(&self, email: &str, redirect_to: Option<&str>) -> Result<()> {
        let query = match redirect_to {
            Some(redirect) => pairs(&[("redirect_to", redirect)]),
            None => Vec::new(),
        };
        self.client
            .auth_send_empty(Method::POST, "recover", &query, None, Some(&RecoverBody { email }))
            .await
            .map_err(|e| map_auth_error(e, AuthError::Provider))
    }

    async fn update_password(&self, access_token: &str, new_password: &str) -> Result<AuthUser> {
        let body = PasswordUpdate {
            password: new_password,
        };
        let user: UserResponse = self
            .client
            .auth_send(Method::PUT, "user", &[], Some(access_token), Some(&body))
            .await
            .map_err(|e| match e.status() {
                Some(401 | 403) => Error::from(e),
                _ => map_auth_error(e, AuthError::Provider),
            })?;
        Ok(user.into())
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        let user: UserResponse = self
            .client
            .auth_send::<(), _>(Method::GET, "user", &[], Some(access_token), None)
            .await
            .map_err(|e| map_auth_error(e, |_| AuthError::Unauthorized))?;
        Ok(user.into())
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        self.client
            .auth_send_empty::<()>(Method::POST, "logout", &[], Some(access_token), None)
            .await
            .map_err(|e| map_auth_error(e, |_| AuthError::Unauthorized))
    }

    fn oauth_authorize_url(
        &self,
        provider: OAuthProvider,
        redirect_to: Option<&str>,
    ) -> Result<String> {
        let mut query = vec![("provider", provider.as_str())];
        if let Some(redirect) = redirect_to {
            query.push(("redirect_to", redirect));
        }
        let url = self.client.auth_url("authorize", &pairs(&query))?;
        Ok(url.to_string())
    }
}
