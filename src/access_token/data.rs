use uuid::Uuid;

pub const USER_ID_CLAIM_NAME: &str = "id";

/// Verified claims of a bearer token.
///
/// The token deliberately carries no expiry: it stays valid until the
/// signing key is rotated.
#[derive(Debug)]
pub struct AccessTokenData {
    pub user_id: Uuid,
}
