mod model;
mod repository;

pub use model::{CategoryRow, CategoryWriteRow};
pub use repository::CategoryRepository;
