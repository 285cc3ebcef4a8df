
use md5::{Digest, Md5};

const AVATAR_SERVICE_URL: &str = "https://www.gravatar.com/avatar";

/// Derive a gravatar URI from an email address.
///
/// Pure function of the trimmed, lowercased email; calling it with an
/// already-normalized address is a no-op normalization.
pub fn derive_avatar(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    let hash: String = digest.iter()
        .map(|byte| format!("{byte:02x}"))
        .collect();
    format!("{AVATAR_SERVICE_URL}/{hash}")
}
