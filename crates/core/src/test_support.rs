//! In-memory repositories and fixtures shared by the unit tests.

use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::auth::AuthenticatedUser;
use crate::categories::{Category, CategoryDetails, CategoryRepositoryTrait};
use crate::errors::{Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait, ExpenseWithCategory, NewExpense};
use crate::fixed_accounts::{
    FixedAccount, FixedAccountRepositoryTrait, FixedAccountUpdate, NewFixedAccount,
};
use crate::utils::period::Period;

pub fn user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: "user-1".to_string(),
        email: Some("ana@example.com".to_string()),
        access_token: "token-1".to_string(),
    }
}

pub fn other_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: "user-2".to_string(),
        email: None,
        access_token: "token-2".to_string(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn category(id: &str, name: &str, limit: Decimal) -> Category {
    Category {
        id: id.to_string(),
        user_id: user().id,
        name: name.to_string(),
        limit_amount: limit,
        color: "#3B82F6".to_string(),
        icon: None,
        created_at: base_time(),
    }
}

pub fn expense(category_id: &str, amount: Decimal, date: NaiveDate) -> Expense {
    Expense {
        id: format!("{}-{}-{}", category_id, date, amount),
        user_id: user().id,
        category_id: category_id.to_string(),
        amount,
        description: None,
        date,
        created_at: base_time(),
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
    next_id: Mutex<u32>,
}

impl InMemoryCategoryRepository {
    pub fn with(categories: Vec<Category>) -> Self {
        InMemoryCategoryRepository {
            categories: RwLock::new(categories),
            next_id: Mutex::new(0),
        }
    }

    pub fn all(&self) -> Vec<Category> {
        self.categories.read().unwrap().clone()
    }

    fn find(&self, user_id: &str, id: &str) -> Option<Category> {
        self.categories
            .read()
            .unwrap()
            .iter()
            .find(|c| c.user_id == user_id && c.id == id)
            .cloned()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryCategoryRepository {
    async fn list(&self, user: &AuthenticatedUser) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .all()
            .into_iter()
            .filter(|c| c.user_id == user.id)
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
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
            created_at: base_time(),
        };
        self.categories.write().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        details: CategoryDetails,
    ) -> Result<Category> {
        let mut categories = self.categories.write().unwrap();
        let category = categories
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
        self.categories
            .write()
            .unwrap()
            .retain(|c| !(c.user_id == user.id && c.id == id));
        Ok(())
    }
}

/// Expense store that joins category names from a linked category store.
#[derive(Default)]
pub struct InMemoryExpenseRepository {
    expenses: RwLock<Vec<Expense>>,
    categories: Option<Arc<InMemoryCategoryRepository>>,
    range_queries: Mutex<usize>,
}

impl InMemoryExpenseRepository {
    pub fn linked(categories: Arc<InMemoryCategoryRepository>) -> Self {
        InMemoryExpenseRepository {
            categories: Some(categories),
            ..Default::default()
        }
    }

    pub fn all(&self) -> Vec<Expense> {
        self.expenses.read().unwrap().clone()
    }

    pub fn range_queries(&self) -> usize {
        *self.range_queries.lock().unwrap()
    }

    /// Stores an expense for `user()`. Each call gets a later `created_at`.
    pub fn seed(&self, category_id: &str, amount: Decimal, date: NaiveDate) -> Expense {
        let mut expenses = self.expenses.write().unwrap();
        let position = expenses.len();
        let expense = Expense {
            id: format!("exp-{}", position + 1),
            created_at: base_time() + Duration::seconds(position as i64),
            ..expense(category_id, amount, date)
        };
        expenses.push(expense.clone());
        expense
    }

    fn join(&self, expense: Expense) -> ExpenseWithCategory {
        let category = self
            .categories
            .as_ref()
            .and_then(|c| c.find(&expense.user_id, &expense.category_id));
        ExpenseWithCategory::new(
            expense,
            category.as_ref().map(|c| c.name.clone()),
            category.map(|c| c.color),
        )
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryExpenseRepository {
    async fn create(&self, user: &AuthenticatedUser, new_expense: NewExpense) -> Result<Expense> {
        let mut expenses = self.expenses.write().unwrap();
        let position = expenses.len();
        let expense = Expense {
            id: format!("exp-{}", position + 1),
            user_id: user.id.clone(),
            category_id: new_expense.category_id,
            amount: new_expense.amount,
            description: new_expense.description,
            date: new_expense
                .date
                .ok_or_else(|| Error::missing_field("date"))?,
            created_at: base_time() + Duration::seconds(position as i64),
        };
        expenses.push(expense.clone());
        Ok(expense)
    }

    async fn list_in_range(
        &self,
        user: &AuthenticatedUser,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExpenseWithCategory>> {
        *self.range_queries.lock().unwrap() += 1;
        let mut rows: Vec<Expense> = self
            .all()
            .into_iter()
            .filter(|e| e.user_id == user.id && e.date >= start && e.date < end)
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
            .all()
            .into_iter()
            .filter(|e| {
                e.user_id == user.id
                    && e.category_id == category_id
                    && e.date >= start
                    && e.date < end
            })
            .collect())
    }

    async fn list_recent(
        &self,
        user: &AuthenticatedUser,
        limit: usize,
    ) -> Result<Vec<ExpenseWithCategory>> {
        let mut rows: Vec<Expense> = self
            .all()
            .into_iter()
            .filter(|e| e.user_id == user.id)
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|e| self.join(e))
            .collect())
    }

    async fn delete_by_category(&self, user: &AuthenticatedUser, category_id: &str) -> Result<()> {
        self.expenses
            .write()
            .unwrap()
            .retain(|e| !(e.user_id == user.id && e.category_id == category_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryFixedAccountRepository {
    accounts: RwLock<Vec<FixedAccount>>,
}

impl InMemoryFixedAccountRepository {
    pub fn all(&self) -> Vec<FixedAccount> {
        self.accounts.read().unwrap().clone()
    }

    fn modify<F>(&self, user: &AuthenticatedUser, id: &str, f: F) -> Result<FixedAccount>
    where
        F: FnOnce(&mut FixedAccount),
    {
        let mut accounts = self.accounts.write().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.user_id == user.id && a.id == id)
            .ok_or_else(|| Error::NotFound(format!("Fixed account {}", id)))?;
        f(account);
        Ok(account.clone())
    }
}

#[async_trait]
impl FixedAccountRepositoryTrait for InMemoryFixedAccountRepository {
    async fn list(&self, user: &AuthenticatedUser, period: Period) -> Result<Vec<FixedAccount>> {
        let mut accounts: Vec<FixedAccount> = self
            .all()
            .into_iter()
            .filter(|a| {
                a.user_id == user.id && a.month == period.month() && a.year == period.year()
            })
            .collect();
        accounts.sort_by_key(|a| a.due_day);
        Ok(accounts)
    }

    async fn get_by_id(
        &self,
        user: &AuthenticatedUser,
        id: &str,
    ) -> Result<Option<FixedAccount>> {
        Ok(self
            .all()
            .into_iter()
            .find(|a| a.user_id == user.id && a.id == id))
    }

    async fn create(
        &self,
        user: &AuthenticatedUser,
        new_account: NewFixedAccount,
        period: Period,
    ) -> Result<FixedAccount> {
        let mut accounts = self.accounts.write().unwrap();
        let account = FixedAccount {
            id: format!("fa-{}", accounts.len() + 1),
            user_id: user.id.clone(),
            name: new_account.name,
            amount: new_account.amount,
            due_day: new_account.due_day,
            is_paid: false,
            month: period.month(),
            year: period.year(),
            created_at: base_time(),
        };
        accounts.push(account.clone());
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
        self.accounts
            .write()
            .unwrap()
            .retain(|a| !(a.user_id == user.id && a.id == id));
        Ok(())
    }
}
