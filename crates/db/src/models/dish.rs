use dishes_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `dishes` table.
///
/// This is the storage shape; the wire shape (`DishDto`) lives in the api
/// crate and is produced by an explicit conversion.
#[derive(Debug, Clone, FromRow)]
pub struct Dish {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
