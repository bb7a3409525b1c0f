use std::sync::Arc;

use crate::config::Config;
use appfinance_core::{
    auth::{
        AuthProviderTrait, AuthRedirects, AuthService, AuthServiceTrait, ProfileRepositoryTrait,
    },
    categories::{CategoryRepositoryTrait, CategoryService, CategoryServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    expenses::{ExpenseRepositoryTrait, ExpenseService, ExpenseServiceTrait},
    fixed_accounts::{FixedAccountRepositoryTrait, FixedAccountService, FixedAccountServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    spending::{SpendingService, SpendingServiceTrait},
};
use appfinance_storage_supabase::{
    CategoryRepository, ExpenseRepository, FixedAccountRepository, ProfileRepository,
    SupabaseAuthProvider, SupabaseClient,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub fixed_account_service: Arc<dyn FixedAccountServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
}

/// Storage adapters the services are wired on top of.
pub struct Repositories {
    pub auth_provider: Arc<dyn AuthProviderTrait>,
    pub profiles: Arc<dyn ProfileRepositoryTrait>,
    pub categories: Arc<dyn CategoryRepositoryTrait>,
    pub expenses: Arc<dyn ExpenseRepositoryTrait>,
    pub fixed_accounts: Arc<dyn FixedAccountRepositoryTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("AF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_services(repositories: Repositories, redirects: AuthRedirects) -> Arc<AppState> {
    let Repositories {
        auth_provider,
        profiles,
        categories,
        expenses,
        fixed_accounts,
    } = repositories;

    let auth_service = Arc::new(AuthService::new(auth_provider, profiles, redirects));
    let spending_service: Arc<dyn SpendingServiceTrait> = Arc::new(SpendingService::new(
        categories.clone(),
        expenses.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(categories.clone(), expenses.clone()));
    let expense_service = Arc::new(ExpenseService::new(expenses.clone(), categories));
    let fixed_account_service = Arc::new(FixedAccountService::new(fixed_accounts));
    let dashboard_service = Arc::new(DashboardService::new(spending_service.clone(), expenses));
    let report_service = Arc::new(ReportService::new(spending_service));

    Arc::new(AppState {
        auth_service,
        category_service,
        expense_service,
        fixed_account_service,
        dashboard_service,
        report_service,
    })
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = Arc::new(SupabaseClient::new(
        &config.supabase_url,
        &config.supabase_anon_key,
    )?);
    tracing::info!("Using backend at {}", config.supabase_url);

    let repositories = Repositories {
        auth_provider: Arc::new(SupabaseAuthProvider::new(client.clone())),
        profiles: Arc::new(ProfileRepository::new(client.clone())),
        categories: Arc::new(CategoryRepository::new(client.clone())),
        expenses: Arc::new(ExpenseRepository::new(client.clone())),
        fixed_accounts: Arc::new(FixedAccountRepository::new(client)),
    };
    let redirects = AuthRedirects {
        password_reset: config.password_reset_redirect.clone(),
        oauth: config.oauth_redirect.clone(),
    };

    Ok(build_services(repositories, redirects))
}
