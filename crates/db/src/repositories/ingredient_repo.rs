//! Repository for the `ingredients` table.
//!
//! Ingredients have no independent HTTP surface; they are created alongside
//! dish management (seed data, fixtures) and read through their owning dish.

use dishes_core::types::DbId;
use uuid::Uuid;

use crate::models::ingredient::Ingredient;
use crate::DbPool;

const COLUMNS: &str = "id, dish_id, name";

pub struct IngredientRepo;

impl IngredientRepo {
    /// Insert an ingredient for an existing dish, returning the created row.
    ///
    /// Fails with a foreign-key violation if the dish does not exist.
    pub async fn create(
        pool: &DbPool,
        dish_id: DbId,
        name: &str,
    ) -> Result<Ingredient, sqlx::Error> {
        let query = format!(
            "INSERT INTO ingredients (id, dish_id, name)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(Uuid::new_v4())
            .bind(dish_id)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// List all ingredients owned by a dish, alphabetically.
    pub async fn list_by_dish(
        pool: &DbPool,
        dish_id: DbId,
    ) -> Result<Vec<Ingredient>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ingredients WHERE dish_id = ?1 ORDER BY name ASC"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(dish_id)
            .fetch_all(pool)
            .await
    }
}
