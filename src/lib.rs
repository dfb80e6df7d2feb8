//! Diffie-Hellman key exchange over the RFC 3526 MODP groups.
//!
//! Supported groups are 5, 14, 15, 16, 17 and 18, all with generator 2.
//! Group 14 (2048-bit modulus) is the default.
//!
//! This crate provides unauthenticated DH only. Transport of public values,
//! key derivation from the raw shared secret, and key storage belong to the
//! embedding application.
//!
//! ```rust
//! use modp_dh::{compute_secret, generate_key_pair, ExchangeConfig};
//!
//! let config = ExchangeConfig::default();
//! let alice = generate_key_pair(&config).unwrap();
//! let bob = generate_key_pair(&config).unwrap();
//!
//! assert_eq!(
//!     compute_secret(&alice, bob.public_key()),
//!     compute_secret(&bob, alice.public_key()),
//! );
//! ```

/// Exchange configuration.
pub mod config;
/// Modular arithmetic and secure randomness.
pub mod crypto;
/// Error types.
pub mod error;
/// RFC 3526 group registry.
pub mod groups;
/// Key pairs and shared secrets.
pub mod keypair;

use num_bigint::BigUint;

pub use config::{ExchangeConfig, ExponentPolicy};
pub use error::{Error, Result};
pub use groups::{Group, GroupId, GENERATOR};
pub use keypair::{validate_public_key, KeyPair};

/// Generates a key pair for the group named by `config`.
///
/// # Errors
/// Returns [`Error::RandomSource`] if the OS entropy source fails.
pub fn generate_key_pair(config: &ExchangeConfig) -> Result<KeyPair> {
    KeyPair::from_config(config)
}

/// Rebuilds a key pair from stored values. Always bound to the default group.
pub fn reconstruct_key_pair(public_key: BigUint, private_key: BigUint) -> KeyPair {
    KeyPair::reconstruct(public_key, private_key)
}

/// Derives the shared secret between `key_pair` and `peer_public`.
pub fn compute_secret(key_pair: &KeyPair, peer_public: &BigUint) -> Vec<u8> {
    key_pair.compute_secret(peer_public)
}
