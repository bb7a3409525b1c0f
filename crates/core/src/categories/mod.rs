//! Categories module - domain models, services, and traits.

mod categories_model;
mod categories_service;
mod categories_traits;


pub use categories_model::{
    is_valid_hex_color, Category, CategoryDetails, CategoryUpdate, CategoryWithSpending,
    NewCategory,
};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
