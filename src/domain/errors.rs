use thiserror::Error;

/// Terminal outcomes of API key extraction. The caller decides what a failure
/// means for the request (typically a 401).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,

    #[error("malformed authorization header")]
    MalformedHeader,
}

pub type Result<T> = std::result::Result<T, AuthError>;
