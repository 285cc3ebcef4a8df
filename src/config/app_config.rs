use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bin_constants::DEFAULT_JWT_KEY;
use crate::config::hasher_config::HasherConfig;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    /// Path to the oct JWK used for both signing and verifying
    /// access tokens.
    pub jwt_key: PathBuf,
    pub hasher_config: HasherConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            jwt_key: PathBuf::from(DEFAULT_JWT_KEY),
            hasher_config: HasherConfig::default(),
        }
    }
}
