//! Basic usage example of MODP Diffie-Hellman.
//!
//! This example demonstrates:
//! - Choosing a group through the exchange configuration
//! - Generating key pairs for two parties
//! - Deriving the shared secret on both sides
//! - Restoring a key pair from stored values

use modp_dh::{compute_secret, generate_key_pair, reconstruct_key_pair, ExchangeConfig};

fn main() {
    println!("MODP Diffie-Hellman: Basic Example\n");

    println!("Step 1: Pick the default configuration");
    let config = ExchangeConfig::default();
    println!("  Using RFC 3526 group {}\n", config.group);

    println!("Step 2: Alice and Bob generate key pairs");
    let alice = generate_key_pair(&config).expect("Key generation should succeed");
    let bob = generate_key_pair(&config).expect("Key generation should succeed");
    println!(
        "  Public values are {} and {} bytes\n",
        alice.public_key().to_bytes_be().len(),
        bob.public_key().to_bytes_be().len()
    );

    println!("Step 3: Each side derives the shared secret");
    let alice_secret = compute_secret(&alice, bob.public_key());
    let bob_secret = compute_secret(&bob, alice.public_key());
    println!("  Alice: {}...", hex::encode(&alice_secret[..alice_secret.len().min(8)]));
    println!("  Bob:   {}...\n", hex::encode(&bob_secret[..bob_secret.len().min(8)]));

    println!("Step 4: Compare");
    if alice_secret == bob_secret {
        println!("  Secrets match ({} bytes)\n", alice_secret.len());
    } else {
        println!("  Secrets differ\n");
        std::process::exit(1);
    }

    println!("Step 5: Restore Alice from stored values");
    let restored = reconstruct_key_pair(alice.public_key().clone(), alice.private_key().clone());
    let restored_secret = compute_secret(&restored, bob.public_key());
    println!(
        "  Restored pair reproduces the secret: {}",
        restored_secret == alice_secret
    );
}
