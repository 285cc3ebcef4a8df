#[cfg(test)] mod tests;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, Version};
use log::warn;

pub trait Hasher: Send + Sync {
    fn generate_hash(&self, password: &str) -> String;

    /// Check [password] against a stored PHC hash string.
    ///
    /// Any malformed stored hash counts as a mismatch.
    fn check_hash(&self, hash: &str, password: &str) -> bool;
}

pub struct ProductionHasher {
    params: Params,
}

impl ProductionHasher {
    pub fn new(params: Params) -> Self {
        ProductionHasher {
            params,
        }
    }

    fn get_hasher(&self) -> Argon2<'_> {
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
    }
}

impl Hasher for ProductionHasher {
    fn generate_hash(&self, password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        self.get_hasher()
            .hash_password(password.as_bytes(), &salt)
            .expect("password hashing failed")
            .serialize()
            .to_string()
    }

    fn check_hash(&self, hash: &str, password: &str) -> bool {
        let hash = match PasswordHash::new(hash) {
            Ok(hash) => hash,
            Err(e) => {
                warn!("stored password hash is not a valid PHC string: {e}");
                return false;
            }
        };
        hash.verify_password(&[&self.get_hasher()], password)
            .is_ok()
    }
}
