use std::io;

use josekit::JoseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessTokenGeneratorError {
    #[error("cryptographic operation failed: {0}")]
    Crypto(#[from] JoseError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("error serializing token claims: {0}")]
    Serialization(#[from] serde_json::Error),
}
