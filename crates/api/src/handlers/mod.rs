//! Handler layer: one module per resource.

pub mod dishes;
pub mod ingredients;

use dishes_core::error::CoreError;
use dishes_core::types::DbId;

use crate::error::AppError;

/// Parse a path segment as a dish id.
///
/// An unparseable id can never name an existing dish, so it is reported as
/// a missing dish rather than a bad request.
pub(crate) fn parse_dish_id(key: &str) -> Result<DbId, AppError> {
    key.parse().map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: "Dish",
            key: key.to_string(),
        })
    })
}
