/// Modular arithmetic primitives.
pub mod field;
/// Cryptographically secure random number generation.
pub mod rng;

pub use rng::generate_private_key;
