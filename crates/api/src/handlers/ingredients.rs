//! Handlers for the ingredients of a dish.

use axum::extract::{Path, State};
use axum::Json;
use dishes_core::error::CoreError;
use dishes_db::repositories::{DishRepo, IngredientRepo};

use crate::dto::IngredientDto;
use crate::error::{AppError, AppResult};
use crate::handlers::parse_dish_id;
use crate::state::AppState;

/// GET /dishes/{id}/ingredients
///
/// 404 when the dish does not exist; otherwise the (possibly empty) list
/// of its ingredients. A missing dish is never an empty-but-OK response.
pub async fn list_for_dish(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Vec<IngredientDto>>> {
    let dish_id = parse_dish_id(&key)?;

    if !DishRepo::exists(&state.pool, dish_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Dish",
            key,
        }));
    }

    let ingredients = IngredientRepo::list_by_dish(&state.pool, dish_id).await?;
    Ok(Json(
        ingredients.into_iter().map(IngredientDto::from).collect(),
    ))
}
