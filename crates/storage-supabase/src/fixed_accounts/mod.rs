mod model;
mod repository;

pub use model::{FixedAccountChangesRow, FixedAccountRow, NewFixedAccountRow};
pub use repository::FixedAccountRepository;
