//! Error types for MODP Diffie-Hellman

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested group number is not one of the RFC 3526 groups we carry.
    #[error("Unsupported group: {0}. Available groups: 5, 14, 15, 16, 17, 18")]
    UnsupportedGroup(u32),

    /// The entropy source failed while sampling a private exponent.
    #[error("Random source failure: {0}")]
    RandomSource(#[source] rand::Error),

    /// A peer public value failed range validation.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Arithmetic parameters are unusable (e.g. a zero modulus).
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

/// Result type alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
