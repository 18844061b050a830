use dishes_core::types::DbId;
use sqlx::FromRow;

/// A row from the `ingredients` table. Every ingredient belongs to exactly
/// one dish (`dish_id` is a cascading foreign key).
#[derive(Debug, Clone, FromRow)]
pub struct Ingredient {
    pub id: DbId,
    pub dish_id: DbId,
    pub name: String,
}
