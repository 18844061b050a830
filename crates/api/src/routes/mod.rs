pub mod dishes;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree (everything except `/health`).
///
/// ```text
/// /dishes                      list (public), create (admin-from-country)
/// /dishes/{id-or-name}         get (public), update, delete (admin-from-country)
/// /dishes/{id}/ingredients     list ingredients (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(dishes::router())
}
