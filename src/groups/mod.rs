//! Registry of the RFC 3526 MODP groups.
//!
//! The table is decoded once, on first access, and is read-only afterwards.
//! Every [`crate::KeyPair`] borrows its modulus from here.

/// Prime constants for each supported group.
mod rfc3526;

use core::fmt;
use std::sync::LazyLock;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Generator shared by every MODP group.
pub const GENERATOR: u32 = 2;

/// An RFC 3526 MODP group number.
///
/// Only the numbers listed here are accepted. Converting any other integer
/// through [`TryFrom<u32>`] fails with [`Error::UnsupportedGroup`]; there is no
/// fallback to the default.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum GroupId {
    /// 1536-bit modulus.
    Modp1536 = 5,
    /// 2048-bit modulus.
    #[default]
    Modp2048 = 14,
    /// 3072-bit modulus.
    Modp3072 = 15,
    /// 4096-bit modulus.
    Modp4096 = 16,
    /// 6144-bit modulus.
    Modp6144 = 17,
    /// 8192-bit modulus.
    Modp8192 = 18,
}

impl GroupId {
    /// Group used whenever the caller does not pick one.
    pub const DEFAULT: Self = Self::Modp2048;

    /// Every supported group, smallest modulus first.
    pub const ALL: [Self; 6] = [
        Self::Modp1536,
        Self::Modp2048,
        Self::Modp3072,
        Self::Modp4096,
        Self::Modp6144,
        Self::Modp8192,
    ];

    /// Returns the RFC 3526 group number.
    pub const fn number(self) -> u32 {
        self as u32
    }

    fn index(self) -> usize {
        match self {
            Self::Modp1536 => 0,
            Self::Modp2048 => 1,
            Self::Modp3072 => 2,
            Self::Modp4096 => 3,
            Self::Modp6144 => 4,
            Self::Modp8192 => 5,
        }
    }

    fn prime_hex(self) -> &'static str {
        match self {
            Self::Modp1536 => rfc3526::MODP_1536_P,
            Self::Modp2048 => rfc3526::MODP_2048_P,
            Self::Modp3072 => rfc3526::MODP_3072_P,
            Self::Modp4096 => rfc3526::MODP_4096_P,
            Self::Modp6144 => rfc3526::MODP_6144_P,
            Self::Modp8192 => rfc3526::MODP_8192_P,
        }
    }
}

impl TryFrom<u32> for GroupId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        match id {
            5 => Ok(Self::Modp1536),
            14 => Ok(Self::Modp2048),
            15 => Ok(Self::Modp3072),
            16 => Ok(Self::Modp4096),
            17 => Ok(Self::Modp6144),
            18 => Ok(Self::Modp8192),
            other => Err(Error::UnsupportedGroup(other)),
        }
    }
}

impl From<GroupId> for u32 {
    fn from(id: GroupId) -> Self {
        id.number()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A MODP group: its number, prime modulus, and modulus length in bytes.
#[derive(Debug, Eq, PartialEq)]
pub struct Group {
    id: GroupId,
    modulus: BigUint,
    byte_length: usize,
}

impl Group {
    fn decode(id: GroupId) -> Self {
        let bytes = hex::decode(id.prime_hex())
            .unwrap_or_else(|e| unreachable!("RFC 3526 constants are valid hex: {e}"));
        Self {
            id,
            byte_length: bytes.len(),
            modulus: BigUint::from_bytes_be(&bytes),
        }
    }

    /// Returns the group number.
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns the modulus length in bytes, which is also the number of random
    /// bytes drawn for a private exponent.
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Returns the modulus size in bits.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Returns the generator `g`.
    pub fn generator(&self) -> BigUint {
        BigUint::from(GENERATOR)
    }
}

static REGISTRY: LazyLock<[Group; 6]> = LazyLock::new(|| GroupId::ALL.map(Group::decode));

/// Resolves a group number to its parameters.
pub fn lookup(id: GroupId) -> &'static Group {
    &REGISTRY[id.index()]
}

/// Resolves a raw group number, rejecting anything outside the supported set.
pub fn lookup_id(id: u32) -> Result<&'static Group> {
    GroupId::try_from(id).map(lookup)
}
