use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mauth_core::{
    crypto::{KeyPair, SealedChannel},
    mutual::MutualAuthenticator,
    protocol::AuthMessage,
};
use mauth_crypto_dalek::{generate_keypair, keypair_from_secret, DalekSealedChannel};

#[derive(Parser)]
#[command(name = "mauth", version, about = "mauth CLI demo")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    // Generate an X25519 key pair and print it as hex.
    Keygen,

    // Run the three-message handshake between two in-process sessions.
    Run {
        // Nonce length in bytes, must match on both sides.
        #[arg(long, default_value_t = 8)]
        nonce_len: usize,

        // Initiator secret key as hex (64 hex chars). Generated if absent.
        #[arg(long)]
        initiator_key: Option<String>,

        // Responder secret key as hex (64 hex chars). Generated if absent.
        #[arg(long)]
        responder_key: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Keygen => keygen(),
        Command::Run {
            nonce_len,
            initiator_key,
            responder_key,
        } => run(nonce_len, initiator_key, responder_key),
    }
}

fn keygen() -> Result<()> {
    let pair = generate_keypair();
    println!("public: {}", hex::encode(pair.public.as_bytes()));
    println!("secret: {}", hex::encode(pair.secret.as_bytes()));
    Ok(())
}

fn run(
    nonce_len: usize,
    initiator_key: Option<String>,
    responder_key: Option<String>,
) -> Result<()> {
    let key1 = load_or_generate(initiator_key).context("initiator key")?;
    let key2 = load_or_generate(responder_key).context("responder key")?;

    let crypto: Arc<dyn SealedChannel> = Arc::new(DalekSealedChannel::new());

    let mut initiator =
        MutualAuthenticator::new(&key1, key2.public.clone(), nonce_len, crypto.clone());
    let mut responder = MutualAuthenticator::new(&key2, key1.public.clone(), nonce_len, crypto);

    let challenge = initiator.initiate()?;
    info!(bytes = challenge.encode().len(), "initiator -> responder: challenge");

    let response = responder
        .consume(&challenge)?
        .context("responder produced no response")?;
    info!(bytes = response.encode().len(), "responder -> initiator: response");

    let finalize = initiator
        .consume(&response)?
        .context("initiator produced no finalize")?;
    info!(
        bytes = finalize.encode().len(),
        initiator_authenticated = initiator.peer_authenticated(),
        "initiator -> responder: finalize"
    );

    let done: Option<AuthMessage> = responder.consume(&finalize)?;
    if done.is_some() {
        bail!("responder produced an unexpected message after finalize");
    }

    if !(initiator.peer_authenticated() && responder.peer_authenticated()) {
        bail!("handshake completed without mutual authentication");
    }

    info!("both peers authenticated");
    Ok(())
}

fn load_or_generate(secret_hex: Option<String>) -> Result<KeyPair> {
    let Some(secret_hex) = secret_hex else {
        return Ok(generate_keypair());
    };

    let secret = hex::decode(secret_hex.trim()).context("invalid hex")?;
    let secret: [u8; 32] = secret
        .as_slice()
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected a 32-byte secret key, got {} bytes", secret.len()))?;

    Ok(keypair_from_secret(secret))
}
