//! Token authentication middleware - the auth gate.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::errors::AppError;

/// Authenticated identity extracted from a verified token.
///
/// The token's subject is the only claim downstream code may trust.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: u64,
}

/// Token authentication middleware.
///
/// Verifies the bearer token from the Authorization header and injects the
/// resulting CurrentUser into the request extensions. Pure verification:
/// no state is mutated and token contents are never logged.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::MissingToken)?;

    // The bearer token is the second whitespace-delimited segment
    let token = auth_header
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| AppError::Jwt(jsonwebtoken::errors::ErrorKind::InvalidToken.into()))?;

    let claims = state.auth_service.verify_token(token)?;

    request
        .extensions_mut()
        .insert(CurrentUser { id: claims.sub });

    Ok(next.run(request).await)
}
