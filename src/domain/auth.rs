use axum::http::{header, HeaderMap};

use crate::domain::errors::AuthError;

/// Scheme prefix clients must send in the `Authorization` header.
/// Matched byte-for-byte; `apikey` and `APIKEY` are rejected.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Opaque API key token. No structure is assumed beyond what extraction
/// enforces; special characters pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Extracts the API key from the `Authorization` header.
///
/// The first header value must have the shape `ApiKey <token>`. Fields are
/// split on runs of whitespace, so tabs and repeated spaces delimit the same
/// way a single space does. Anything after the second field is ignored.
///
/// Returns [`AuthError::NoAuthHeader`] when the header is missing or its
/// value is empty, and [`AuthError::MalformedHeader`] for every other shape
/// violation (wrong scheme, missing token, undecodable value).
pub fn get_api_key(headers: &HeaderMap) -> Result<ApiKey, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) => value.to_str().map_err(|_| AuthError::MalformedHeader)?,
        None => return Err(AuthError::NoAuthHeader),
    };

    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(scheme), Some(token)) if scheme == API_KEY_SCHEME => Ok(ApiKey(token.to_string())),
        _ => Err(AuthError::MalformedHeader),
    }
}
