//! Common test utilities shared across integration tests.

use modp_dh::{GroupId, KeyPair};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Subsequent calls are safe and will be ignored.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("modp_dh=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Generates one key pair in each group and returns the secret each side
/// derives from the other's public value.
#[allow(dead_code)]
pub fn exchange(alice_group: GroupId, bob_group: GroupId) -> (Vec<u8>, Vec<u8>) {
    let alice = KeyPair::generate_in(alice_group).expect("key generation should succeed");
    let bob = KeyPair::generate_in(bob_group).expect("key generation should succeed");

    let alice_secret = alice.compute_secret(bob.public_key());
    let bob_secret = bob.compute_secret(alice.public_key());
    (alice_secret, bob_secret)
}
