//! Fixed accounts module - recurring monthly bills.

mod fixed_accounts_model;
mod fixed_accounts_service;
mod fixed_accounts_traits;


pub use fixed_accounts_model::{
    FixedAccount, FixedAccountStatus, FixedAccountSummary, FixedAccountUpdate,
    FixedAccountsOverview, NewFixedAccount,
};
pub use fixed_accounts_service::FixedAccountService;
pub use fixed_accounts_traits::{FixedAccountRepositoryTrait, FixedAccountServiceTrait};
