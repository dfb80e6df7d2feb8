#![no_main]

use libfuzzer_sys::fuzz_target;
use modp_dh::{groups, KeyPair};
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let Ok(group) = groups::lookup_id(u32::from(selector)) else {
        return;
    };
    if rest.len() > group.byte_length() {
        return;
    }

    let peer = BigUint::from_bytes_be(rest);
    let pair = KeyPair::reconstruct_in(group.id(), BigUint::from(4u32), BigUint::from(2u32));

    let raw = pair.compute_secret(&peer);
    let padded = pair.compute_secret_padded(&peer);
    assert_eq!(padded.len(), group.byte_length());
    assert!(padded.ends_with(&raw));

    if pair.compute_secret_checked(&peer).is_ok() {
        assert!(peer >= BigUint::from(2u32));
        assert!(peer < group.modulus() - 1u32);
    }
});
