use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::domain::{get_api_key, ApiKey};

/// Rejects requests whose `Authorization` header does not carry a well-formed
/// `ApiKey <token>` value. On success the extracted key is stored in request
/// extensions so handlers can receive it through the [`ApiKey`] extractor.
///
/// Only the shape of the header is checked here; whether the key is actually
/// known to the system is left to downstream consumers.
pub async fn api_key_auth(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let api_key = get_api_key(request.headers()).map_err(|e| {
        debug!(error = %e, "Rejected request without a valid API key");
        StatusCode::UNAUTHORIZED
    })?;

    request.extensions_mut().insert(api_key);
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKey>()
            .cloned()
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
