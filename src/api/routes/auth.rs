use axum::Json;
use serde::Serialize;

use crate::domain::ApiKey;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub api_key: String,
}

/// Echoes the key extracted by the auth middleware back to its owner.
pub async fn whoami(api_key: ApiKey) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        api_key: api_key.into_inner(),
    })
}
