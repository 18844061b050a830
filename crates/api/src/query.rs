//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /dishes` (`?name=` substring filter).
#[derive(Debug, Deserialize)]
pub struct DishListParams {
    pub name: Option<String>,
}
