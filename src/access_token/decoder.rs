pub mod errors;

use std::fs;
use std::path::Path;

use josekit::jwk::Jwk;
use josekit::jws::alg::hmac::{HmacJwsAlgorithm, HmacJwsVerifier};
use josekit::jwt;
use log::info;
use uuid::Uuid;

use crate::access_token::data::{AccessTokenData, USER_ID_CLAIM_NAME};
use errors::AccessTokenDecoderError;

pub struct AccessTokenDecoder {
    verifier: HmacJwsVerifier,
}

impl AccessTokenDecoder {
    pub fn from_jwk(jwk: &Jwk) -> Result<Self, AccessTokenDecoderError> {
        Ok(
            AccessTokenDecoder {
                verifier: HmacJwsAlgorithm::Hs512.verifier_from_jwk(jwk)?,
            }
        )
    }

    pub fn from_file(
        path: impl AsRef<Path>,
    ) -> Result<Self, AccessTokenDecoderError> {
        Self::from_jwk(&Jwk::from_bytes(fs::read(path)?)?)
    }

    /// Decode and verify an access token.
    ///
    /// # Errors
    /// All possible error values signify incorrect [token] data; the
    /// caller must treat every one of them as the same invalid-session
    /// condition and never use a partially decoded identity.
    pub fn decode_token(
        &self,
        token: impl AsRef<[u8]>,
    ) -> Result<AccessTokenData, AccessTokenDecoderError> {
        let token = token.as_ref();
        let (payload, _) = jwt::decode_with_verifier(
            token,
            &self.verifier,
        )?;
        let user_id = payload.claim(USER_ID_CLAIM_NAME)
            .map(|v| serde_json::from_value::<Uuid>(v.clone()))
            .transpose()
            .map_err(|e| {
                info!(
                    "invalid user id in access token {}: {e}",
                    String::from_utf8_lossy(token),
                );
                AccessTokenDecoderError::PayloadParse(e)
            })?
            .ok_or_else(|| missing_field(token, USER_ID_CLAIM_NAME))?;
        Ok(
            AccessTokenData {
                user_id,
            }
        )
    }
}

fn missing_field(token: &[u8], part: &'static str) -> AccessTokenDecoderError {
    info!(
        "missing field {part} in access token {}",
        String::from_utf8_lossy(token),
    );
    AccessTokenDecoderError::PayloadMissing { part }
}
