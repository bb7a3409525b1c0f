use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub password_reset_redirect: Option<String>,
    pub oauth_redirect: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("AF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid AF_LISTEN_ADDR")?;
        let supabase_url = required("AF_SUPABASE_URL")?;
        let supabase_anon_key = required("AF_SUPABASE_ANON_KEY")?;
        let cors_allow = std::env::var("AF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("AF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            supabase_url,
            supabase_anon_key,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            password_reset_redirect: optional("AF_PASSWORD_RESET_REDIRECT"),
            oauth_redirect: optional("AF_OAUTH_REDIRECT"),
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    optional(key).ok_or_else(|| anyhow!("{} must be set", key))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
