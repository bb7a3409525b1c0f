//! HTTP client for the hosted backend's REST table and auth APIs.

use std::time::Duration;

use appfinance_core::AuthenticatedUser;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::errors::{StorageError, StorageResult};
use crate::query::Query;

/// Default timeout for backend requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const APIKEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "prefer";

/// Shared client for one backend project.
///
/// Cloning is cheap: the underlying connection pool is reference counted, so
/// every repository can hold its own copy.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: Url,
    anon_key: String,
}

impl SupabaseClient {
    /// Create a client for the project at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot be
    /// initialized.
    pub fn new(base_url: &str, anon_key: &str) -> StorageResult<Self> {
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url,
            anon_key: anon_key.to_string(),
        })
    }

    /// `{base}/{path}?{query}`
    pub fn endpoint(&self, path: &str, query: &[(String, String)]) -> StorageResult<Url> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Headers for a request made on behalf of `access_token`. Without a
    /// token the anonymous key is sent as the bearer.
    fn headers(&self, access_token: Option<&str>) -> StorageResult<HeaderMap> {
        let bearer = access_token
            .filter(|t| !t.is_empty())
            .unwrap_or(self.anon_key.as_str());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(APIKEY_HEADER, HeaderValue::from_str(&self.anon_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", bearer))?,
        );
        Ok(headers)
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        access_token: Option<&str>,
    ) -> StorageResult<RequestBuilder> {
        debug!("[Supabase] {} {}", method, url.path());
        Ok(self
            .client
            .request(method, url)
            .headers(self.headers(access_token)?))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Table API
    // ─────────────────────────────────────────────────────────────────────────

    fn table_url(&self, table: &str, query: &Query) -> StorageResult<Url> {
        self.endpoint(&format!("rest/v1/{}", table), query.pairs())
    }

    /// Rows of `table` matching `query`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        user: &AuthenticatedUser,
        table: &str,
        query: &Query,
    ) -> StorageResult<Vec<T>> {
        let url = self.table_url(table, query)?;
        let response = self
            .request(Method::GET, url, Some(&user.access_token))?
            .send()
            .await?;
        parse_response(response).await
    }

    /// Inserts one row and returns it as stored.
    pub async fn insert<B, T>(&self, user: &AuthenticatedUser, table: &str, row: &B) -> StorageResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(table, &Query::new())?;
        let response = self
            .request(Method::POST, url, Some(&user.access_token))?
            .header(PREFER_HEADER, "return=representation")
            .json(row)
            .send()
            .await?;
        first_row(parse_response(response).await?, table)
    }

    /// Applies `changes` to the rows matching `query` and returns them.
    pub async fn update<B, T>(
        &self,
        user: &AuthenticatedUser,
        table: &str,
        query: &Query,
        changes: &B,
    ) -> StorageResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(table, query)?;
        let response = self
            .request(Method::PATCH, url, Some(&user.access_token))?
            .header(PREFER_HEADER, "return=representation")
            .json(changes)
            .send()
            .await?;
        parse_response(response).await
    }

    pub async fn delete(&self, user: &AuthenticatedUser, table: &str, query: &Query) -> StorageResult<()> {
        let url = self.table_url(table, query)?;
        let response = self
            .request(Method::DELETE, url, Some(&user.access_token))?
            .send()
            .await?;
        expect_success(response).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Auth API
    // ─────────────────────────────────────────────────────────────────────────

    pub fn auth_url(&self, path: &str, query: &[(String, String)]) -> StorageResult<Url> {
        self.endpoint(&format!("auth/v1/{}", path), query)
    }

    /// Sends a JSON body to an auth endpoint and decodes the reply.
    pub async fn auth_send<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        access_token: Option<&str>,
        body: Option<&B>,
    ) -> StorageResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .auth_request(method, path, query, access_token, body)?
            .send()
            .await?;
        parse_response(response).await
    }

    /// Like [`auth_send`](Self::auth_send) for endpoints whose reply body is
    /// not needed.
    pub async fn auth_send_empty<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        access_token: Option<&str>,
        body: Option<&B>,
    ) -> StorageResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .auth_request(method, path, query, access_token, body)?
            .send()
            .await?;
        expect_success(response).await
    }

    fn auth_request<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        access_token: Option<&str>,
        body: Option<&B>,
    ) -> StorageResult<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let url = self.auth_url(path, query)?;
        let request = self.request(method, url, access_token)?;
        Ok(match body {
            Some(body) => request.json(body),
            None => request,
        })
    }
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> StorageResult<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(StorageError::from_response(status.as_u16(), &body));
    }
    Ok(serde_json::from_str(&body)?)
}

async fn expect_success(response: reqwest::Response) -> StorageResult<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(StorageError::from_response(status.as_u16(), &body))
}

/// The single row a write with `return=representation` sends back.
pub(crate) fn first_row<T>(rows: Vec<T>, table: &str) -> StorageResult<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| StorageError::EmptyResult(table.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new("https://project.supabase.co/", "anon-key").unwrap()
    }

    #[test]
    fn test_table_url_carries_filters() {
        let query = Query::new()
            .select("*")
            .eq("user_id", "u1")
            .order("name", true);
        let url = client().table_url("categories", &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://project.supabase.co/rest/v1/categories?select=*&user_id=eq.u1&order=name.asc"
        );
    }

    #[test]
    fn test_auth_url() {
        let url = client()
            .auth_url(
                "token",
                &[("grant_type".to_string(), "password".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://project.supabase.co/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn test_headers_fall_back_to_anon_key() {
        let client = client();
        let anonymous = client.headers(Some("")).unwrap();
        assert_eq!(anonymous.get(AUTHORIZATION).unwrap(), "Bearer anon-key");
        assert_eq!(anonymous.get("apikey").unwrap(), "anon-key");

        let signed_in = client.headers(Some("user-token")).unwrap();
        assert_eq!(signed_in.get(AUTHORIZATION).unwrap(), "Bearer user-token");
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        assert!(matches!(
            client().headers(Some("bad\ntoken")),
            Err(StorageError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_first_row() {
        assert_eq!(first_row(vec![1, 2], "t").unwrap(), 1);
        assert!(matches!(
            first_row::<i32>(vec![], "t"),
            Err(StorageError::EmptyResult(_))
        ));
    }
}
