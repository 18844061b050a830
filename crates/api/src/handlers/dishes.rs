//! Handlers for the `/dishes` resource.
//!
//! Reads are public; mutations are gated by the `admin-from-country`
//! policy extractor. `GET /dishes/{dish}` accepts either an id or an exact
//! name: axum has no per-route type constraints, so the single handler
//! tries the id interpretation first.

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use dishes_core::error::CoreError;
use dishes_db::repositories::DishRepo;
use validator::Validate;

use crate::dto::{DishDto, DishForCreation, DishForUpdate};
use crate::error::{AppError, AppResult};
use crate::handlers::parse_dish_id;
use crate::middleware::rbac::RequireAdminFromCountry;
use crate::query::DishListParams;
use crate::state::AppState;

/// GET /dishes?name=
///
/// Lists all dishes, optionally filtered to names containing the `name`
/// query substring.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DishListParams>,
) -> AppResult<Json<Vec<DishDto>>> {
    let dishes = DishRepo::list(&state.pool, params.name.as_deref()).await?;
    Ok(Json(dishes.into_iter().map(DishDto::from).collect()))
}

/// GET /dishes/{dish}
///
/// Looks up by id when the segment parses as a UUID, otherwise by exact name.
pub async fn get_by_id_or_name(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DishDto>> {
    let dish = match key.parse() {
        Ok(id) => DishRepo::find_by_id(&state.pool, id).await?,
        Err(_) => DishRepo::find_by_name(&state.pool, &key).await?,
    };

    let dish = dish.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Dish",
        key,
    }))?;
    Ok(Json(DishDto::from(dish)))
}

/// POST /dishes
///
/// Creates a dish with a server-generated id and answers 201 with a
/// `Location` header pointing at the new resource.
pub async fn create(
    State(state): State<AppState>,
    RequireAdminFromCountry(user): RequireAdminFromCountry,
    Json(input): Json<DishForCreation>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<DishDto>)> {
    input.validate()?;

    let dish = DishRepo::create(&state.pool, &input.name).await?;
    tracing::info!(user_id = %user.user_id, dish_id = %dish.id, "Dish created");

    let location = format!("/dishes/{}", dish.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DishDto::from(dish)),
    ))
}

/// PUT /dishes/{id}
///
/// Overwrites the dish name. 204 on success, 404 when the dish is absent.
pub async fn update(
    State(state): State<AppState>,
    RequireAdminFromCountry(user): RequireAdminFromCountry,
    Path(key): Path<String>,
    Json(input): Json<DishForUpdate>,
) -> AppResult<StatusCode> {
    let id = parse_dish_id(&key)?;
    input.validate()?;

    let updated = DishRepo::update_name(&state.pool, id, &input.name).await?;
    match updated {
        Some(dish) => {
            tracing::info!(user_id = %user.user_id, dish_id = %dish.id, "Dish updated");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Dish",
            key,
        })),
    }
}

/// DELETE /dishes/{id}
///
/// Removes the dish and, by cascade, its ingredients. 204 on success.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminFromCountry(user): RequireAdminFromCountry,
    Path(key): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_dish_id(&key)?;

    if DishRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = %user.user_id, dish_id = %id, "Dish deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Dish",
            key,
        }))
    }
}
