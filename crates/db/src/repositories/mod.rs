//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod dish_repo;
pub mod ingredient_repo;

pub use dish_repo::DishRepo;
pub use ingredient_repo::IngredientRepo;
