use modp_dh::{groups, Error, ExchangeConfig, GroupId, KeyPair};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("infallible path must not be used")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("infallible path must not be used")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("infallible path must not be used")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new("entropy source unavailable"))
    }
}

impl CryptoRng for FailingRng {}

#[test]
fn reject_unsupported_group_numbers() {
    for raw in [0, 1, 9, 89, 1004] {
        assert!(
            matches!(ExchangeConfig::with_group_id(raw), Err(Error::UnsupportedGroup(n)) if n == raw),
            "group {raw} should be rejected"
        );
        assert!(groups::lookup_id(raw).is_err());
    }
}

#[test]
fn unsupported_group_is_never_coerced_to_default() {
    let err = GroupId::try_from(2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported group: 2. Available groups: 5, 14, 15, 16, 17, 18"
    );
}

#[test]
fn random_source_failure_aborts_generation() {
    for id in GroupId::ALL {
        let config = ExchangeConfig::new(id);
        let result = KeyPair::generate_with_rng(&config, &mut FailingRng);
        assert!(
            matches!(result, Err(Error::RandomSource(_))),
            "group {id} should surface the entropy failure"
        );
    }
}

#[test]
fn cross_group_public_key_yields_unrelated_secret() {
    let alice = KeyPair::generate_in(GroupId::Modp2048).unwrap();
    let bob = KeyPair::generate_in(GroupId::Modp3072).unwrap();

    let alice_secret = alice.compute_secret(bob.public_key());
    let bob_secret = bob.compute_secret(alice.public_key());

    assert_ne!(alice_secret, bob_secret);
}

#[test]
fn checked_secret_rejects_small_subgroup_values() {
    let pair = KeyPair::generate().unwrap();
    let p = pair.modulus();

    for bad in [BigUint::from(0u32), BigUint::from(1u32), p - 1u32] {
        assert!(matches!(
            pair.compute_secret_checked(&bad),
            Err(Error::InvalidPublicKey(_))
        ));
    }
}

#[test]
fn unchecked_secret_accepts_degenerate_peer() {
    // Peer value 1 forces the shared secret to 1 regardless of the private key.
    let pair = KeyPair::generate().unwrap();
    assert_eq!(pair.compute_secret(&BigUint::from(1u32)), vec![1]);
}
