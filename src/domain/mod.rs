pub mod auth;
pub mod errors;

pub use auth::{get_api_key, ApiKey, API_KEY_SCHEME};
pub use errors::{AuthError, Result};
