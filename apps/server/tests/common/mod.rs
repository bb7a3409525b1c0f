//! In-memory stand-ins for the hosted backend, wired through the real
//! services and router.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use appfinance_core::{
    auth::{
        AuthProviderTrait, AuthRedirects, AuthSession, AuthUser, OAuthProvider, Profile,
        ProfileRepositoryTrait, SignUpResult,
    },
    categories::{Category, CategoryDetails, CategoryRepositoryTrait},
    errors::{AuthError, Error, Result},
    expenses::{Expense, ExpenseRepositoryTrait, ExpenseWithCategory, NewExpense},
    fixed_accounts::{
        FixedAccount, FixedAccountRepositoryTrait, FixedAccountUpdate, NewFixedAccount,
    },
    AuthenticatedUser, Period,
};
use appfinance_server::{api::app_router, build_services, config::Config, Repositories};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;

pub const PASSWORD: &str = "correct-password";
pub const TOKEN: &str = "token-1";
pub const OTHER_TOKEN: &str = "token-2";

// =============================================================================
// Auth
// =============================================================================

struct Account {
    email: String,
    password: String,
    user: AuthUser,
}

pub struct FakeAuthProvider {
    accounts: RwLock<Vec<Account>>,
    sessions: RwLock<HashMap<String, AuthUser>>,
}

impl Default for FakeAuthProvider {
    fn default() -> Self {
        let ana = AuthUser {
            id: "user-1".to_string(),
            email: Some("ana@example.com".to_string()),
        };
        let bruno = AuthUser {
            id: "user-2".to_string(),
            email: Some("bruno@example.com".to_string()),
        };
        let sessions = HashMap::from([
            (TOKEN.to_string(), ana.clone()),
            (OTHER_TOKEN.to_string(), bruno.clone()),
        ]);
        FakeAuthProvider {
            accounts: RwLock::new(vec![
                Account {
                    email: "ana@example.com".to_string(),
                    password: PASSWORD.to_string(),
                    user: ana,
                },
                Account {
                    email: "bruno@example.com".to_string(),
                    password: PASSWORD.to_string(),
                    user: bruno,
                },
            ]),
            sessions: RwLock::new(sessions),
        }
    }
}

impl FakeAuthProvider {
    fn open_session(&self, user: AuthUser) -> AuthSession {
        let access_token = format!("token-{}", user.id);
        self.sessions
            .write()
            .unwrap()
            .insert(access_token.clone(), user.clone());
        AuthSession {
            access_token,
            refresh_token: format!("refresh-{}", user.id),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            user,
        }
    }
}

#[async_trait]
impl AuthProviderTrait for FakeAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResult> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::SignUpRejected("User already registered".to_string()).into());
        }
        let user = AuthUser {
            id: format!("user-{}", accounts.len() + 1),
            email: Some(email.to_string()),
        };
        accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            user: user.clone(),
        });
        drop(accounts);
        let session = self.open_session(user.clone());
        Ok(SignUpResult {
            user,
            session: Some(session),
        })
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession> {
        let user = self
            .accounts
            .read()
            .unwrap()
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(|a| a.user.clone())
            .ok_or_else(|| AuthError::InvalidCredentials("Invalid login credentials".into()))?;
        Ok(self.open_session(user))
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession> {
        let user_id = refresh_token
            .strip_prefix("refresh-")
            .ok_or(AuthError::Unauthorized)?;
        let user = self
            .accounts
            .read()
            .unwrap()
            .iter()
            .find(|a| a.user.id == user_id)
            .map(|a| a.user.clone())
            .ok_or(AuthError::Unauthorized)?;
        Ok(self.open_session(user))
    }

    async fn send_password_reset(&self, _email: &str, _redirect_to: Option<&str>) -> Result<()> {
        Ok(())
    }

    async fn update_password(&self, access_token: &str, new_password: &str) -> Result<AuthUser> {
        let user = self.get_user(access_token).await?;
        let mut accounts = self.accounts.write().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| a.user.id == user.id) {
            account.password = new_password.to_string();
        }
        Ok(user)
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        self.sessions
            .read()
            .unwrap()
            .get(access_token)
            .cloned()
            .ok_or_else(|| AuthError::Unauthorized.into())
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        self.sessions.write().unwrap().remove(access_token);
        Ok(())
    }

    fn oauth_authorize_url(
        &self,
        provider: OAuthProvider,
        redirect_to: Option<&str>,
    ) -> Result<String> {
        let mut url = format!(
            "https://project.supabase.co/auth/v1/authorize?provider={}",
            provider.as_str()
        );
        if let Some(redirect) = redirect_to {
            url.push_str(&format!("&redirect_to={}", redirect));
        }
        Ok(url)
    }
}

#[derive(Default)]
pub struct InMemoryProfiles {
    profiles: RwLock<Vec<Profile>>,
}

#[async_trait]
impl ProfileRepositoryTrait for InMemoryProfiles {
    async fn create_profile(&self, user: &AuthenticatedUser, username: &str) -> Result<Profile> {
        let profile = Profile {
            user_id: user.id.clone(),
            username: username.to_string(),
        };
        self.profiles.write().unwrap().push(profile.clone());
        Ok(profile)
    }

    async fn get_profile(&self, user: &AuthenticatedUser) -> Result<Option<Profile>> {
        Ok(self
            .profiles
            .read()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user.id)
            .cloned())
    }
}

// =============================================================================
// Tables
// =============================================================================

#[derive(Default)]
pub struct InMemoryCategories {
    rows: RwLock<Vec<Category>>,
    next_id: Mutex<u32>,
}

impl InMemoryCategories {
    fn find(&self, user_id: &str, id: &str) -> Option<Category> {
        self.rows
            .read()
            .unwrap()
            .iter()
            .find(|c| c.user_id == user_id && c.id == id)
            .cloned()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryCategories {
    async fn list(&self, user: &AuthenticatedUser) -> Result<Vec<Category>> {
        let mut rows: Vec<Category> = self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user.id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn get_by_id(&self, user: &AuthenticatedUser, id: &str) -> Result<Option<Category>> {
        Ok(self.find(&user.id, id))
    }

    async fn create(&self, user: &AuthenticatedUser, details: CategoryDetails) -> Result<Category> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let category = Category {
            id: format!("cat-{}", next_id),
            user_id: user.id.clone(),
            name: details.name,
            limit_amount: details.limit_amount,
            color: details.color,
            icon: details.icon,
            created_at: Utc::now(),
        };
        self.rows.write().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        details: CategoryDetails,
    ) -> Result<Category> {
        let mut rows = self.rows.write().unwrap();
        let category = rows
            .iter_mut()
            .find(|c| c.user_id == user.id && c.id == id)
            .ok_or_else(|| Error::NotFound(format!("Category {}", id)))?;
        category.name = details.name;
        category.limit_amount = details.limit_amount;
        category.color = details.color;
        category.icon = details.icon;
        Ok(category.clone())
    }

    async fn delete(&self, user: &AuthenticatedUser, id: &str) -> Result<()> {
        self.rows
            .write()
            .unwrap()
            .retain(|c| !(c.user_id == user.id && c.id == id));
        Ok(())
    }
}

pub struct InMemoryExpenses {
    rows: RwLock<Vec<Expense>>,
    categories: Arc<InMemoryCategories>,
}

impl InMemoryExpenses {
    pub fn new(categories: Arc<InMemoryCategories>) -> Self {
        InMemoryExpenses {
            rows: RwLock::new(Vec::new()),
            categories,
        }
    }

    pub fn count(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    fn join(&self, expense: Expense) -> ExpenseWithCategory {
        let category = self.categories.find(&expense.user_id, &expense.category_id);
        ExpenseWithCategory::new(
            expense,
            category.as_ref().map(|c| c.name.clone()),
            category.map(|c| c.color),
        )
    }

    fn for_user(&self, user: &AuthenticatedUser) -> Vec<Expense> {
        self.rows
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user.id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryExpenses {
    async fn create(&self, user: &AuthenticatedUser, new_expense: NewExpense) -> Result<Expense> {
        let mut rows = self.rows.write().unwrap();
        let expense = Expense {
            id: format!("exp-{}", rows.len() + 1),
            user_id: user.id.clone(),
            category_id: new_expense.category_id,
            amount: new_expense.amount,
            description: new_expense.description,
            date: new_expense
                .date
                .ok_or_else(|| Error::missing_field("date"))?,
            created_at: Utc::now(),
        };
        rows.push(expense.clone());
        Ok(expense)
    }

    async fn list_in_range(
        &self,
        user: &AuthenticatedUser,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExpenseWithCategory>> {
        let mut rows: Vec<Expense> = self
            .for_user(user)
            .into_iter()
            .filter(|e| e.date >= start && e.date < end)
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows.into_iter().map(|e| self.join(e)).collect())
    }

    async fn list_by_category_in_range(
        &self,
        user: &AuthenticatedUser,
        category_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        Ok(self
            .for_user(user)
            .into_iter()
            .filter(|e| e.category_id == category_id && e.date >= start && e.date < end)
            .collect())
    }

    async fn list_recent(
        &self,
        user: &AuthenticatedUser,
        limit: usize,
    ) -> Result<Vec<ExpenseWithCategory>> {
        let mut rows = self.for_user(user);
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|e| self.join(e))
            .collect())
    }

    async fn delete_by_category(&self, user: &AuthenticatedUser, category_id: &str) -> Result<()> {
        self.rows
            .write()
            .unwrap()
            .retain(|e| !(e.user_id == user.id && e.category_id == category_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryFixedAccounts {
    rows: RwLock<Vec<FixedAccount>>,
}

impl InMemoryFixedAccounts {
    fn modify<F>(&self, user: &AuthenticatedUser, id: &str, f: F) -> Result<FixedAccount>
    where
        F: FnOnce(&mut FixedAccount),
    {
        let mut rows = self.rows.write().unwrap();
        let account = rows
            .iter_mut()
            .find(|a| a.user_id == user.id && a.id == id)
            .ok_or_else(|| Error::NotFound(format!("Fixed account {}", id)))?;
        f(account);
        Ok(account.clone())
    }
}

#[async_trait]
impl FixedAccountRepositoryTrait for InMemoryFixedAccounts {
    async fn list(&self, user: &AuthenticatedUser, period: Period) -> Result<Vec<FixedAccount>> {
        let mut rows: Vec<FixedAccount> = self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|a| {
                a.user_id == user.id && a.month == period.month() && a.year == period.year()
            })
            .cloned()
            .collect();
        rows.sort_by_key(|a| a.due_day);
        Ok(rows)
    }

    async fn get_by_id(
        &self,
        user: &AuthenticatedUser,
        id: &str,
    ) -> Result<Option<FixedAccount>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|a| a.user_id == user.id && a.id == id)
            .cloned())
    }

    async fn create(
        &self,
        user: &AuthenticatedUser,
        new_account: NewFixedAccount,
        period: Period,
    ) -> Result<FixedAccount> {
        let mut rows = self.rows.write().unwrap();
        let account = FixedAccount {
            id: format!("fa-{}", rows.len() + 1),
            user_id: user.id.clone(),
            name: new_account.name,
            amount: new_account.amount,
            due_day: new_account.due_day,
            is_paid: false,
            month: period.month(),
            year: period.year(),
            created_at: Utc::now(),
        };
        rows.push(account.clone());
        Ok(account)
    }

    async fn update(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        update: FixedAccountUpdate,
    ) -> Result<FixedAccount> {
        self.modify(user, id, |a| {
            a.name = update.name;
            a.amount = update.amount;
            a.due_day = update.due_day;
        })
    }

    async fn set_paid(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        is_paid: bool,
    ) -> Result<FixedAccount> {
        self.modify(user, id, |a| a.is_paid = is_paid)
    }

    async fn delete(&self, user: &AuthenticatedUser, id: &str) -> Result<()> {
        self.rows
            .write()
            .unwrap()
            .retain(|a| !(a.user_id == user.id && a.id == id));
        Ok(())
    }
}

// =============================================================================
// Router harness
// =============================================================================

pub struct TestApp {
    pub router: Router,
    pub expenses: Arc<InMemoryExpenses>,
}

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        supabase_url: "https://project.supabase.co".to_string(),
        supabase_anon_key: "anon-key".to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        password_reset_redirect: None,
        oauth_redirect: Some("http://localhost:5173/dashboard".to_string()),
    }
}

pub fn test_app() -> TestApp {
    let config = test_config();
    let categories = Arc::new(InMemoryCategories::default());
    let expenses = Arc::new(InMemoryExpenses::new(categories.clone()));
    let repositories = Repositories {
        auth_provider: Arc::new(FakeAuthProvider::default()),
        profiles: Arc::new(InMemoryProfiles::default()),
        categories,
        expenses: expenses.clone(),
        fixed_accounts: Arc::new(InMemoryFixedAccounts::default()),
    };
    let redirects = AuthRedirects {
        password_reset: config.password_reset_redirect.clone(),
        oauth: config.oauth_redirect.clone(),
    };
    let state = build_services(repositories, redirects);
    TestApp {
        router: app_router(state, &config),
        expenses,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::POST, uri, token, Some(body)).await
    }
}
