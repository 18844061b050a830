//! Policy extractors gating the mutating routes.
//!
//! Each extractor wraps [`AuthUser`] and rejects callers that do not meet
//! the policy, so authorization is enforced at the type level in the
//! handler signature. Unprotected routes simply omit the extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use dishes_core::error::CoreError;
use dishes_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// The `admin-from-country` policy: requires the `admin` role AND a
/// `country` claim equal to the configured `admin_country`. Rejects with
/// 403 Forbidden otherwise (401 if the token itself is missing/invalid).
///
/// ```ignore
/// async fn mutate(RequireAdminFromCountry(user): RequireAdminFromCountry) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin from the configured country
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdminFromCountry(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdminFromCountry {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        if user.country != state.config.admin_country {
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Admin must be from {}",
                state.config.admin_country
            ))));
        }
        Ok(RequireAdminFromCountry(user))
    }
}
