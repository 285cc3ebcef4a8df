pub mod errors;

use std::fs;
use std::path::Path;

use josekit::jwk::Jwk;
use josekit::jws::alg::hmac::{HmacJwsAlgorithm, HmacJwsSigner};
use josekit::jws::JwsHeader;
use josekit::jwt;
use josekit::jwt::JwtPayload;
use uuid::Uuid;

use crate::access_token::data::USER_ID_CLAIM_NAME;
use errors::AccessTokenGeneratorError;

pub struct AccessTokenGenerator {
    signer: HmacJwsSigner,
}

impl AccessTokenGenerator {
    pub fn from_jwk(key: &Jwk) -> Result<Self, AccessTokenGeneratorError> {
        Ok(
            AccessTokenGenerator {
                signer: HmacJwsAlgorithm::Hs512.signer_from_jwk(key)?,
            }
        )
    }

    pub fn from_file(
        path: impl AsRef<Path>,
    ) -> Result<Self, AccessTokenGeneratorError> {
        Self::from_jwk(&Jwk::from_bytes(fs::read(path)?)?)
    }

    /// Sign a compact token carrying the user id only, no expiry.
    pub fn generate_token(
        &self,
        user_id: Uuid,
    ) -> Result<String, AccessTokenGeneratorError> {
        let mut payload = JwtPayload::new();
        payload.set_claim(
            USER_ID_CLAIM_NAME,
            Some(serde_json::to_value(user_id)?),
        )?;

        Ok(
            jwt::encode_with_signer(
                &payload,
                &JwsHeader::new(),
                &self.signer,
            )?
        )
    }
}
