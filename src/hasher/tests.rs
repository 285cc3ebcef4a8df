use super::*;

// small parameters so the tests don't burn cpu
fn make_hasher() -> ProductionHasher {
    ProductionHasher::new(
        Params::new(64, 1, 1, Some(32))
            .expect("invalid test params"),
    )
}

#[test]
fn hash_then_check() {
    let hasher = make_hasher();
    let hash = hasher.generate_hash("pw123");
    assert!(hasher.check_hash(&hash, "pw123"));
}

#[test]
fn wrong_password_rejected() {
    let hasher = make_hasher();
    let hash = hasher.generate_hash("pw123");
    assert!(!hasher.check_hash(&hash, "pw124"));
}

#[test]
fn hash_is_not_the_plaintext() {
    let hasher = make_hasher();
    assert_ne!(hasher.generate_hash("pw123"), "pw123");
}

#[test]
fn hashes_are_salted() {
    let hasher = make_hasher();
    assert_ne!(hasher.generate_hash("pw123"), hasher.generate_hash("pw123"));
}

#[test]
fn malformed_stored_hash_is_a_mismatch() {
    let hasher = make_hasher();
    assert!(!hasher.check_hash("not a phc string", "pw123"));
}
