use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::AppError;

/// Rejects requests without an `Authorization` header. Only presence is
/// checked here; the token itself is validated downstream.
pub async fn require_authorization(req: Request, next: Next) -> Result<Response, AppError> {
    if !req.headers().contains_key(AUTHORIZATION) {
        warn!("Rejected {} {}: missing Authorization header", req.method(), req.uri().path());
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(req).await)
}
