use clap::{Parser, Subcommand};
use modp_dh::{groups, ExchangeConfig, GroupId, KeyPair};
use num_bigint::BigUint;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "dh")]
#[command(about = "Diffie-Hellman over the RFC 3526 MODP groups", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported groups
    Groups,

    /// Generate a key pair and print it as hex
    Keygen {
        /// RFC 3526 group number (defaults to the configured group)
        #[arg(short, long, env = "DH_GROUP", value_parser = parse_group)]
        group: Option<GroupId>,
    },

    /// Derive a shared secret from a private key and a peer public key
    Secret {
        /// Own private exponent, hex encoded
        #[arg(long)]
        private: String,

        /// Peer public value, hex encoded
        #[arg(long)]
        peer: String,

        /// RFC 3526 group number (defaults to the configured group)
        #[arg(short, long, env = "DH_GROUP", value_parser = parse_group)]
        group: Option<GroupId>,

        /// Left-pad the secret to the modulus length
        #[arg(long, default_value = "false")]
        padded: bool,
    },

    /// Run a local two-party exchange and check that both sides agree
    Exchange {
        /// RFC 3526 group number (defaults to the configured group)
        #[arg(short, long, env = "DH_GROUP", value_parser = parse_group)]
        group: Option<GroupId>,
    },
}

fn parse_group(raw: &str) -> Result<GroupId, String> {
    let id: u32 = raw.parse().map_err(|e| format!("{raw}: {e}"))?;
    GroupId::try_from(id).map_err(|e| e.to_string())
}

fn parse_hex(label: &str, raw: &str) -> Result<BigUint, String> {
    let bytes = hex::decode(raw.trim_start_matches("0x"))
        .map_err(|e| format!("{label} is not valid hex: {e}"))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let base = ExchangeConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {e}");
        e
    })?;
    let config_for = |group: Option<GroupId>| ExchangeConfig {
        group: group.unwrap_or(base.group),
        ..base
    };

    match cli.command {
        Commands::Groups => {
            for id in GroupId::ALL {
                let group = groups::lookup(id);
                let marker = if id == GroupId::DEFAULT { " (default)" } else { "" };
                println!(
                    "group {:>2}: {:>4}-bit modulus, {:>4}-byte private keys{marker}",
                    id.number(),
                    group.bits(),
                    group.byte_length()
                );
            }
        }

        Commands::Keygen { group } => {
            let config = config_for(group);
            let pair = KeyPair::from_config(&config)?;
            info!(group = %pair.group_id(), "generated key pair");

            println!("group:   {}", pair.group_id());
            println!("public:  {}", hex::encode(pair.public_key().to_bytes_be()));
            println!("private: {}", hex::encode(pair.private_key().to_bytes_be()));
        }

        Commands::Secret {
            private,
            peer,
            group,
            padded,
        } => {
            let config = config_for(group);
            let private = parse_hex("private key", &private)?;
            let peer = parse_hex("peer public key", &peer)?;

            let group = groups::lookup(config.group);
            let public = group.generator().modpow(&private, group.modulus());
            let pair = KeyPair::reconstruct_in(config.group, public, private);

            let secret = if padded {
                pair.compute_secret_padded(&peer)
            } else {
                pair.compute_secret(&peer)
            };
            println!("{}", hex::encode(secret));
        }

        Commands::Exchange { group } => {
            let config = config_for(group);
            let alice = KeyPair::from_config(&config)?;
            let bob = KeyPair::from_config(&config)?;

            let alice_secret = alice.compute_secret(bob.public_key());
            let bob_secret = bob.compute_secret(alice.public_key());

            if alice_secret == bob_secret {
                info!(group = %config.group, bytes = alice_secret.len(), "secrets agree");
                println!("Success: both parties derived {} bytes", alice_secret.len());
            } else {
                error!(group = %config.group, "secrets differ");
                eprintln!("Failed: derived secrets differ");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
