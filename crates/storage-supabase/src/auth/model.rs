//! Wire models of the auth API.

use appfinance_core::auth::{AuthSession, AuthUser, SignUpResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    pub user: UserResponse,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Sign-up replies with a full session when email confirmation is off, and
/// with the bare user otherwise.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(SessionResponse),
    User(UserResponse),
}

#[derive(Debug, Serialize)]
pub struct PasswordCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenBody<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RecoverBody<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PasswordUpdate<'a> {
    pub password: &'a str,
}

impl From<UserResponse> for AuthUser {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

impl From<SessionResponse> for AuthSession {
    fn from(session: SessionResponse) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            user: session.user.into(),
        }
    }
}

impl From<SignUpResponse> for SignUpResult {
    fn from(response: SignUpResponse) -> Self {
        match response {
            SignUpResponse::Session(session) => {
                let session = AuthSession::from(session);
                SignUpResult {
                    user: session.user.clone(),
                    session: Some(session),
                }
            }
            SignUpResponse::User(user) => SignUpResult {
                user: user.into(),
                session: None,
            },
        }
    }
}
