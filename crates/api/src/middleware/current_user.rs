//! Extractor for the user a request acts as.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use holonet_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Request header naming the acting user.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The user a request acts as.
///
/// Taken from the `X-User-Id` header when present, otherwise from
/// [`ServerConfig::current_user_id`](crate::config::ServerConfig). No
/// authentication is performed; the id is trusted as given.
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(raw) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(CurrentUser {
                user_id: state.config.current_user_id,
            });
        };

        let user_id = raw
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<DbId>().ok())
            .ok_or_else(|| AppError::BadRequest("Invalid X-User-Id header".into()))?;

        Ok(CurrentUser { user_id })
    }
}
