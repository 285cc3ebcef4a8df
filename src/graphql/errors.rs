use async_graphql::{Error, ErrorExtensions};
use log::error;

use crate::store::errors::StoreError;

/// User-visible failures; each carries an apollo-style `code`
/// extension so clients can branch without parsing messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("you must be signed in")]
    Unauthenticated,

    #[error("you don't have permission to modify this note")]
    Forbidden,

    #[error("not found")]
    NotFound,

    /// Uniform for unknown identity and wrong password; the message
    /// must not reveal which one it was.
    #[error("error signing in")]
    SignInFailed,

    #[error("error creating account")]
    AccountCreation,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated | ApiError::SignInFailed => "UNAUTHENTICATED",
            ApiError::Forbidden => "FORBIDDEN",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::AccountCreation => "BAD_USER_INPUT",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Store failures with no user-visible meaning.
pub fn internal(err: StoreError) -> Error {
    error!("store operation failed: {err}");
    Error::new("internal server error")
}

/// Store failures where an absent document is a user-visible
/// not-found and anything else is internal.
pub fn store_err(err: StoreError) -> Error {
    match err {
        StoreError::NotFound => ApiError::NotFound.extend(),
        other => internal(other),
    }
}
