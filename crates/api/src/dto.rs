//! Wire-format transfer shapes and their conversions from row models.
//!
//! The storage models in `dishes_db` never cross the HTTP boundary; every
//! response body goes through one of these DTOs via an explicit `From`
//! impl, and every request body is validated here before touching storage.

use dishes_core::types::DbId;
use dishes_db::models::dish::Dish;
use dishes_db::models::ingredient::Ingredient;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Read projection of a dish.
#[derive(Debug, Clone, Serialize)]
pub struct DishDto {
    pub id: DbId,
    pub name: String,
}

impl From<Dish> for DishDto {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
        }
    }
}

/// Read projection of an ingredient.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientDto {
    pub id: DbId,
    pub dish_id: DbId,
    pub name: String,
}

impl From<Ingredient> for IngredientDto {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            dish_id: ingredient.dish_id,
            name: ingredient.name,
        }
    }
}

/// Creation payload: name only, the server generates the id.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DishForCreation {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

/// Update payload: only the name is mutable after creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DishForUpdate {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}
