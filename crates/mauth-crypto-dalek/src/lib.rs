/*
    mauth-crypto-dalek
      - x25519-dalek + AES-256-GCM implementation of mauth-core's SealedChannel.
      - Sealing key: SHA3-256("mauth-seal-v1" || X25519(own_secret, peer_public)).
        DH symmetry makes both directions derive the same key, so `open`
        succeeds exactly when the key-pair/public-key pairing matches;
        any mismatch or tampering fails the GCM tag.
 */

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use rand::RngCore;
use sha3::{Digest, Sha3_256};
use x25519_dalek::{PublicKey as XPublicKey, StaticSecret};

use mauth_core::crypto::{CryptoError, KeyPair, PrivateKey, PublicKey, SealedChannel};

const GCM_NONCE_LEN: usize = 12;
const GCM_TAG_LEN: usize = 16;
const SEAL_DOMAIN: &[u8] = b"mauth-seal-v1";

/// Sealed channel backed by X25519 + AES-256-GCM.
#[derive(Debug, Default, Clone)]
pub struct DalekSealedChannel;

impl DalekSealedChannel {
    pub fn new() -> Self {
        Self
    }
}

/// Generate a fresh X25519 key pair in the format this backend expects:
/// 32-byte secret, 32-byte public key.
pub fn generate_keypair() -> KeyPair {
    keypair_from_secret(rand::random())
}

/// Rebuild a key pair from a 32-byte secret, re-deriving the public key.
pub fn keypair_from_secret(secret: [u8; 32]) -> KeyPair {
    let x_secret = StaticSecret::from(secret);
    let public = XPublicKey::from(&x_secret);

    KeyPair {
        public: PublicKey(public.as_bytes().to_vec()),
        secret: PrivateKey(secret.to_vec()),
    }
}

fn key32(bytes: &[u8]) -> Result<[u8; 32], CryptoError> {
    bytes.try_into().map_err(|_| CryptoError::InvalidKey)
}

fn derive_seal_key(own_secret: &[u8], peer_public: &[u8]) -> Result<[u8; 32], CryptoError> {
    let secret = StaticSecret::from(key32(own_secret)?);
    let peer = XPublicKey::from(key32(peer_public)?);
    let shared = secret.diffie_hellman(&peer);

    let mut h = Sha3_256::new();
    h.update(SEAL_DOMAIN);
    h.update(shared.as_bytes());
    Ok(h.finalize().into())
}

impl SealedChannel for DalekSealedChannel {
    // Output layout: [gcm_nonce 12][ciphertext || tag].
    fn seal(&self, own: &KeyPair, peer: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let key = derive_seal_key(own.secret.as_bytes(), peer.as_bytes())?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

        let mut nonce_bytes = [0u8; GCM_NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ct = cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| CryptoError::SealFailure)?;

        let mut out = Vec::with_capacity(GCM_NONCE_LEN + ct.len());
        out.extend_from_slice(&nonce_bytes);
        out.extend_from_slice(&ct);
        Ok(out)
    }

    fn open(&self, own: &KeyPair, peer: &PublicKey, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < GCM_NONCE_LEN + GCM_TAG_LEN {
            return Err(CryptoError::OpenFailure);
        }
        let (nonce_bytes, body) = ciphertext.split_at(GCM_NONCE_LEN);

        let key = derive_seal_key(own.secret.as_bytes(), peer.as_bytes())?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

        cipher
            .decrypt(Nonce::from_slice(nonce_bytes), body)
            .map_err(|_| CryptoError::OpenFailure)
    }

    fn random_bytes(&self, out: &mut [u8]) -> Result<(), CryptoError> {
        rand::thread_rng().fill_bytes(out);
        Ok(())
    }
}
