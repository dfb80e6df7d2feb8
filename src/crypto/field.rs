use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Error, Result};

/// Computes `base^exp mod modulus`.
///
/// Delegates to `BigUint::modpow`, which is not constant-time. The only
/// failure is a zero modulus.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidParams("modulus cannot be zero".to_string()));
    }
    Ok(base.modpow(exp, modulus))
}

/// Encodes `value` as exactly `width` big-endian bytes, left-padded with zeros.
///
/// Returns `None` if the value does not fit.
pub fn to_fixed_be_bytes(value: &BigUint, width: usize) -> Option<Vec<u8>> {
    let bytes = minimal_be_bytes(value);
    if bytes.len() > width {
        return None;
    }
    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(&bytes);
    Some(out)
}

/// Big-endian bytes with every leading zero byte dropped, so zero encodes as
/// an empty vector.
pub fn minimal_be_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return Vec::new();
    }
    value.to_bytes_be()
}
