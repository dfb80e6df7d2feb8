//! Walks every supported group, timing a full exchange in each and showing
//! how the raw secret length can differ from the modulus length.

use std::time::Instant;

use modp_dh::{groups, ExchangeConfig, ExponentPolicy, GroupId, KeyPair};

fn main() {
    println!("MODP Diffie-Hellman: Group Survey\n");

    for id in GroupId::ALL {
        let group = groups::lookup(id);
        let config = ExchangeConfig::new(id).with_exponent_policy(ExponentPolicy::Strict);

        let start = Instant::now();
        let alice = KeyPair::from_config(&config).expect("Key generation should succeed");
        let bob = KeyPair::from_config(&config).expect("Key generation should succeed");
        let secret = alice.compute_secret(bob.public_key());
        let padded = alice.compute_secret_padded(bob.public_key());
        let elapsed = start.elapsed();

        assert_eq!(secret, bob.compute_secret(alice.public_key()));

        println!(
            "group {:>2} ({:>4} bits): raw secret {:>4} bytes, padded {:>4} bytes, {:?}",
            id.number(),
            group.bits(),
            secret.len(),
            padded.len(),
            elapsed
        );
    }
}
