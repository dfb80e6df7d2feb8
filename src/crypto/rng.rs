//! Private exponent sampling from a cryptographically secure source.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::warn;

use crate::{Error, Result};

/// Draws a private exponent of `byte_length` random bytes, read as a
/// big-endian unsigned integer.
///
/// The result lies in `[0, 2^(8 * byte_length))`. No rejection sampling is
/// done here. A failing source is reported as [`Error::RandomSource`] and is
/// never retried or replaced.
pub fn generate_private_key<R>(rng: &mut R, byte_length: usize) -> Result<BigUint>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let mut buf = vec![0u8; byte_length];
    if let Err(e) = rng.try_fill_bytes(&mut buf) {
        warn!(byte_length, error = %e, "entropy source failed");
        return Err(Error::RandomSource(e));
    }
    Ok(BigUint::from_bytes_be(&buf))
}
