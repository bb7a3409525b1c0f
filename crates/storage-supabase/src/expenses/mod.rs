mod model;
mod repository;

pub use model::{CategoryRef, ExpenseRow, NewExpenseRow};
pub use repository::ExpenseRepository;
