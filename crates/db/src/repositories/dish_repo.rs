//! Repository for the `dishes` table.

use chrono::Utc;
use dishes_core::types::DbId;
use uuid::Uuid;

use crate::models::dish::Dish;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Escape `%`, `_`, and the escape character itself so a bound filter
/// matches literally inside a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(filter: &str) -> String {
    filter
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Provides CRUD operations for dishes.
pub struct DishRepo;

impl DishRepo {
    /// Insert a new dish with a server-generated id, returning the created row.
    pub async fn create(pool: &DbPool, name: &str) -> Result<Dish, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO dishes (id, name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dish>(&query)
            .bind(Uuid::new_v4())
            .bind(name)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a dish by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Dish>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dishes WHERE id = ?1");
        sqlx::query_as::<_, Dish>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first dish whose name matches exactly, oldest first.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Dish>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dishes WHERE name = ?1
             ORDER BY created_at ASC LIMIT 1"
        );
        sqlx::query_as::<_, Dish>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List dishes, optionally keeping only names containing `name_filter`
    /// (SQLite `LIKE`, so matching is case-insensitive for ASCII).
    /// `%` and `_` in the filter match literally, not as wildcards.
    /// `None` or an empty filter returns every dish.
    pub async fn list(
        pool: &DbPool,
        name_filter: Option<&str>,
    ) -> Result<Vec<Dish>, sqlx::Error> {
        match name_filter.filter(|f| !f.is_empty()) {
            Some(filter) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM dishes
                     WHERE name LIKE '%' || ?1 || '%' ESCAPE '\\'
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Dish>(&query)
                    .bind(escape_like(filter))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM dishes ORDER BY created_at DESC");
                sqlx::query_as::<_, Dish>(&query).fetch_all(pool).await
            }
        }
    }

    /// Overwrite the dish's name. Returns `None` if no row with `id` exists.
    pub async fn update_name(
        pool: &DbPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Dish>, sqlx::Error> {
        let query = format!(
            "UPDATE dishes SET name = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dish>(&query)
            .bind(id)
            .bind(name)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a dish by id. Ingredients go with it via `ON DELETE CASCADE`.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dishes WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a dish with the given id exists.
    pub async fn exists(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM dishes WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }
}
