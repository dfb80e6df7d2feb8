//! Diffie-Hellman key pairs and shared secret derivation.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::config::{ExchangeConfig, ExponentPolicy};
use crate::crypto::field::{minimal_be_bytes, mod_pow, to_fixed_be_bytes};
use crate::crypto::generate_private_key;
use crate::groups::{self, Group, GroupId};
use crate::{Error, Result};

/// A private exponent, its public value, and the group both belong to.
///
/// The modulus is borrowed from the process-wide group table and is never
/// copied. Only [`KeyPair::generate`] and its variants guarantee that
/// `public_key == 2^private_key mod p`; reconstructed pairs hold whatever the
/// caller supplied.
#[derive(Clone)]
pub struct KeyPair {
    private_key: BigUint,
    public_key: BigUint,
    group: &'static Group,
}

impl KeyPair {
    /// Generates a key pair in the default group (14).
    ///
    /// # Errors
    /// Returns [`Error::RandomSource`] if the OS entropy source fails.
    pub fn generate() -> Result<Self> {
        Self::from_config(&ExchangeConfig::default())
    }

    /// Generates a key pair in `group`.
    ///
    /// # Errors
    /// Returns [`Error::RandomSource`] if the OS entropy source fails.
    pub fn generate_in(group: GroupId) -> Result<Self> {
        Self::from_config(&ExchangeConfig::new(group))
    }

    /// Generates a key pair as described by `config`, drawing from the OS
    /// entropy source.
    ///
    /// # Errors
    /// Returns [`Error::RandomSource`] if the OS entropy source fails.
    pub fn from_config(config: &ExchangeConfig) -> Result<Self> {
        Self::generate_with_rng(config, &mut OsRng)
    }

    /// Generates a key pair as described by `config`, drawing from `rng`.
    ///
    /// The private exponent is `byte_length` random bytes of the group's
    /// modulus. Under [`ExponentPolicy::Strict`] it is resampled until it lies
    /// in `[1, p - 2]`.
    ///
    /// # Errors
    /// Returns [`Error::RandomSource`] if `rng` fails. Nothing is retried.
    pub fn generate_with_rng<R>(config: &ExchangeConfig, rng: &mut R) -> Result<Self>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        let group = groups::lookup(config.group);
        let private_key = sample_exponent(group, config.exponent_policy, rng)?;
        let public_key = exponentiate(&group.generator(), &private_key, group);

        debug!(group = %group.id(), policy = ?config.exponent_policy, "generated key pair");

        Ok(Self {
            private_key,
            public_key,
            group,
        })
    }

    /// Rebuilds a key pair from caller-held values, bound to the default
    /// group's modulus.
    ///
    /// No group is accepted or inferred. A pair generated under any other group
    /// will not reproduce its secrets here; use [`KeyPair::reconstruct_in`]
    /// with the group tracked by the caller instead.
    pub fn reconstruct(public_key: BigUint, private_key: BigUint) -> Self {
        Self::reconstruct_in(GroupId::DEFAULT, public_key, private_key)
    }

    /// Rebuilds a key pair from caller-held values in an explicit group.
    ///
    /// The values are not checked against each other.
    pub fn reconstruct_in(group: GroupId, public_key: BigUint, private_key: BigUint) -> Self {
        Self {
            private_key,
            public_key,
            group: groups::lookup(group),
        }
    }

    /// Returns the public value.
    pub fn public_key(&self) -> &BigUint {
        &self.public_key
    }

    /// Returns the private exponent.
    pub fn private_key(&self) -> &BigUint {
        &self.private_key
    }

    /// Returns the modulus this pair computes under.
    pub fn modulus(&self) -> &'static BigUint {
        self.group.modulus()
    }

    /// Returns the group this pair is bound to.
    pub fn group(&self) -> &'static Group {
        self.group
    }

    /// Returns the number of the group this pair is bound to.
    pub fn group_id(&self) -> GroupId {
        self.group.id()
    }

    /// Derives the shared secret `peer_public^private mod p`.
    ///
    /// The result is the minimal big-endian encoding: leading zero bytes are
    /// dropped, so its length varies. Use [`KeyPair::compute_secret_padded`]
    /// when fixed-width output is needed.
    ///
    /// `peer_public` is not checked in any way. A value produced under a
    /// different group's modulus yields an unrelated result rather than an
    /// error.
    pub fn compute_secret(&self, peer_public: &BigUint) -> Vec<u8> {
        minimal_be_bytes(&self.shared_value(peer_public))
    }

    /// Like [`KeyPair::compute_secret`], left-padded with zeros to the group's
    /// byte length.
    pub fn compute_secret_padded(&self, peer_public: &BigUint) -> Vec<u8> {
        let width = self.group.byte_length();
        to_fixed_be_bytes(&self.shared_value(peer_public), width)
            .unwrap_or_else(|| unreachable!("values reduced mod p fit in {width} bytes"))
    }

    /// Like [`KeyPair::compute_secret`], but first rejects peer values outside
    /// `[2, p - 2]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPublicKey`] for 0, 1, `p - 1`, and anything
    /// at or above `p`.
    pub fn compute_secret_checked(&self, peer_public: &BigUint) -> Result<Vec<u8>> {
        validate_public_key(self.group, peer_public)?;
        Ok(self.compute_secret(peer_public))
    }

    fn shared_value(&self, peer_public: &BigUint) -> BigUint {
        let shared = exponentiate(peer_public, &self.private_key, self.group);
        debug!(group = %self.group.id(), "derived shared secret");
        shared
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("group", &self.group.id())
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Checks that `value` is a usable public value in `group`: `2 <= value <= p - 2`.
///
/// # Errors
/// Returns [`Error::InvalidPublicKey`] describing the violated bound.
pub fn validate_public_key(group: &Group, value: &BigUint) -> Result<()> {
    let p = group.modulus();
    if *value < BigUint::from(2u32) {
        return Err(Error::InvalidPublicKey(
            "public value must be at least 2".to_string(),
        ));
    }
    if *value >= p - 1u32 {
        return Err(Error::InvalidPublicKey(format!(
            "public value must be below p - 1 for group {}",
            group.id()
        )));
    }
    Ok(())
}

fn sample_exponent<R>(group: &Group, policy: ExponentPolicy, rng: &mut R) -> Result<BigUint>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let upper = group.modulus() - 2u32;
    loop {
        let x = generate_private_key(rng, group.byte_length())?;
        match policy {
            ExponentPolicy::Unrestricted => return Ok(x),
            ExponentPolicy::Strict if !x.is_zero() && x <= upper => return Ok(x),
            ExponentPolicy::Strict => {
                debug!(group = %group.id(), "resampling out-of-range exponent");
            }
        }
    }
}

fn exponentiate(base: &BigUint, exp: &BigUint, group: &Group) -> BigUint {
    mod_pow(base, exp, group.modulus())
        .unwrap_or_else(|_| unreachable!("RFC 3526 moduli are non-zero"))
}

#[cfg(test)]
mod tests {
    use num_traits::One;

    use super::*;

    struct Constant(u8);

    impl RngCore for Constant {
        fn next_u32(&mut self) -> u32 {
            u32::from_ne_bytes([self.0; 4])
        }

        fn next_u64(&mut self) -> u64 {
            u64::from_ne_bytes([self.0; 8])
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for Constant {}

    /// Yields all-zero output once, then all-0x42 output.
    struct ZeroThenConstant(bool);

    impl RngCore for ZeroThenConstant {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let byte = if self.0 { 0x42 } else { 0 };
            self.0 = true;
            dest.fill(byte)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ZeroThenConstant {}

    #[test]
    fn generated_pair_is_consistent() {
        let pair = KeyPair::generate().unwrap();
        let g = BigUint::from(2u32);
        assert_eq!(pair.group_id(), GroupId::Modp2048);
        assert_eq!(
            *pair.public_key(),
            g.modpow(pair.private_key(), pair.modulus())
        );
    }

    #[test]
    fn unrestricted_accepts_zero_exponent() {
        let config = ExchangeConfig::default();
        let pair = KeyPair::generate_with_rng(&config, &mut Constant(0)).unwrap();
        assert!(pair.private_key().is_zero());
        assert!(pair.public_key().is_one());
    }

    #[test]
    fn strict_resamples_zero_exponent() {
        let config = ExchangeConfig::default().with_exponent_policy(ExponentPolicy::Strict);
        let pair = KeyPair::generate_with_rng(&config, &mut ZeroThenConstant(false)).unwrap();
        assert_eq!(pair.private_key().to_bytes_be(), vec![0x42; 256]);
    }

    #[test]
    fn modulus_is_shared_with_registry() {
        let pair = KeyPair::generate_in(GroupId::Modp1536).unwrap();
        assert!(std::ptr::eq(
            pair.modulus(),
            groups::lookup(GroupId::Modp1536).modulus()
        ));
    }

    #[test]
    fn reconstruct_binds_default_group() {
        let pair = KeyPair::reconstruct(BigUint::from(4u32), BigUint::from(2u32));
        assert_eq!(pair.group_id(), GroupId::DEFAULT);
        assert_eq!(*pair.public_key(), BigUint::from(4u32));
        assert_eq!(*pair.private_key(), BigUint::from(2u32));
    }

    #[test]
    fn padded_secret_has_modulus_width() {
        // 2^1 = 2 under private key 1 encodes as a single byte unpadded.
        let pair = KeyPair::reconstruct(BigUint::from(2u32), BigUint::one());
        let peer = BigUint::from(2u32);
        assert_eq!(pair.compute_secret(&peer), vec![2]);

        let padded = pair.compute_secret_padded(&peer);
        assert_eq!(padded.len(), 256);
        assert_eq!(padded[255], 2);
        assert!(padded[..255].iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_secret_encodes_empty() {
        let pair = KeyPair::reconstruct(BigUint::from(2u32), BigUint::one());
        assert!(pair.compute_secret(&BigUint::zero()).is_empty());
        assert_eq!(pair.compute_secret_padded(&BigUint::zero()), vec![0; 256]);
    }

    #[test]
    fn checked_secret_rejects_degenerate_peers() {
        let pair = KeyPair::generate().unwrap();
        let p = pair.modulus();
        for bad in [BigUint::zero(), BigUint::one(), p - 1u32, p.clone(), p + 5u32] {
            assert!(matches!(
                pair.compute_secret_checked(&bad),
                Err(Error::InvalidPublicKey(_))
            ));
        }
        let peer = KeyPair::generate().unwrap();
        assert_eq!(
            pair.compute_secret_checked(peer.public_key()).unwrap(),
            pair.compute_secret(peer.public_key())
        );
    }

    #[test]
    fn debug_output_hides_private_key() {
        let pair = KeyPair::reconstruct(BigUint::from(9u32), BigUint::from(123456789u32));
        let rendered = format!("{pair:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("123456789"));
    }
}
