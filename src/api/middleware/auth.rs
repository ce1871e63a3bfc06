use crate::utils::auth::validate_jwt;
use crate::{AppState, entities::prelude::Users};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use sea_orm::EntityTrait;
use uuid::Uuid;

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|s| s.to_string());

    if let Some(token) = token {
        if let Ok(claims) = validate_jwt(&token, &state.config.jwt_secret) {
            // The token subject must still resolve to an existing user.
            if let Ok(user_id) = Uuid::parse_str(&claims.sub) {
                let user_exists = Users::find_by_id(user_id)
                    .one(&state.db)
                    .await
                    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
                    .is_some();

                if user_exists {
                    req.extensions_mut().insert(claims);
                    return Ok(next.run(req).await);
                }
            }
        }
    }

    Err(StatusCode::UNAUTHORIZED)
}
