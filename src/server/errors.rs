use rocket::figment;
use thiserror::Error;

use crate::access_token::decoder::errors::AccessTokenDecoderError;
use crate::access_token::generator::errors::AccessTokenGeneratorError;

#[derive(Debug, Error)]
pub enum ServerSetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] figment::Error),

    #[error("failed to load the token verification key: {0}")]
    TokenDecoder(#[from] AccessTokenDecoderError),

    #[error("failed to load the token signing key: {0}")]
    TokenGenerator(#[from] AccessTokenGeneratorError),

    #[error("invalid hasher parameters: {0}")]
    HasherParams(#[from] argon2::Error),
}
