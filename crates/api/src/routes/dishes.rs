//! Route definitions for the `/dishes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dishes, ingredients};
use crate::state::AppState;

/// Routes mounted at `/dishes`.
///
/// ```text
/// GET    /dishes                      -> list (optional ?name= filter)
/// POST   /dishes                      -> create
/// GET    /dishes/{dish}               -> get by id or exact name
/// PUT    /dishes/{dish}               -> update
/// DELETE /dishes/{dish}               -> delete
/// GET    /dishes/{dish}/ingredients   -> list ingredients
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dishes", get(dishes::list).post(dishes::create))
        .route(
            "/dishes/{dish}",
            get(dishes::get_by_id_or_name)
                .put(dishes::update)
                .delete(dishes::delete),
        )
        .route("/dishes/{dish}/ingredients", get(ingredients::list_for_dish))
}
