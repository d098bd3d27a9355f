use std::sync::atomic::{AtomicU64, Ordering};

use crate::crypto::{constant_time_eq, CryptoError, KeyPair, PrivateKey, PublicKey, SealedChannel};

// Deterministic toy sealed channel for state-machine tests.
//
// Mock key pairs: the secret is the public key with every byte shifted up
// by one, so `derive_public_from_secret` recovers the claimed public key
// exactly when the pair is genuine. The seal key derives from the sorted
// pair of public keys (own derived from the secret, peer as claimed), so
// both directions agree only when each side's secret matches the public
// key the other side believes in.
//
// The XOR keystream and MAC alone cannot detect a key mismatch (the key
// delta cancels between decrypt and verify), so each blob additionally
// carries a binding hash of the seal key. `open` recomputes the binding
// from its own derivation and rejects on any difference, which is what
// keeps the sealed-channel contract: a corrupted secret on either side
// fails every `open` against it instead of yielding garbage plaintext.

pub(crate) const MOCK_KEY_LEN: usize = 32;

const BINDING_LEN: usize = 32;
const MAC_LEN: usize = 32;
const HEADER_LEN: usize = BINDING_LEN + MAC_LEN;

pub(crate) fn test_keypair(tag: u8) -> KeyPair {
    KeyPair {
        public: PublicKey(vec![tag; MOCK_KEY_LEN]),
        secret: PrivateKey(vec![tag.wrapping_add(1); MOCK_KEY_LEN]),
    }
}

fn derive_public_from_secret(secret: &[u8]) -> Vec<u8> {
    secret.iter().map(|b| b.wrapping_sub(1)).collect()
}

fn weak_hash32(key: Option<&[u8]>, data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];

    if let Some(k) = key {
        for (i, b) in k.iter().enumerate() {
            out[i % 32] ^= b.wrapping_add((i as u8).wrapping_mul(31));
        }
    }

    for (i, b) in data.iter().enumerate() {
        out[i % 32] ^= b.wrapping_add((i as u8).wrapping_mul(17));
    }

    out
}

fn pair_key(own: &KeyPair, peer: &PublicKey) -> [u8; 32] {
    let own_pub = derive_public_from_secret(own.secret.as_bytes());

    let mut pks = [own_pub.as_slice(), peer.as_bytes()];
    pks.sort();

    let mut joined = Vec::with_capacity(pks[0].len() + pks[1].len());
    joined.extend_from_slice(pks[0]);
    joined.extend_from_slice(pks[1]);
    weak_hash32(None, &joined)
}

fn binding(key: &[u8; 32]) -> [u8; 32] {
    weak_hash32(Some(key), b"pair-binding")
}

fn xor_stream(key: &[u8; 32], data: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, b)| b ^ key[i % 32] ^ (i as u8))
        .collect()
}

#[derive(Debug, Default)]
pub(crate) struct MockSealedChannel {
    ctr: AtomicU64,
}

impl SealedChannel for MockSealedChannel {
    // Blob layout: [binding 32][mac 32][body ..].
    fn seal(&self, own: &KeyPair, peer: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let k = pair_key(own, peer);
        let mac = weak_hash32(Some(&k), plaintext);

        let mut out = Vec::with_capacity(HEADER_LEN + plaintext.len());
        out.extend_from_slice(&binding(&k));
        out.extend_from_slice(&mac);
        out.extend_from_slice(&xor_stream(&k, plaintext));
        Ok(out)
    }

    fn open(&self, own: &KeyPair, peer: &PublicKey, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < HEADER_LEN {
            return Err(CryptoError::OpenFailure);
        }
        let (sealed_binding, rest) = ciphertext.split_at(BINDING_LEN);
        let (mac, body) = rest.split_at(MAC_LEN);

        let k = pair_key(own, peer);
        if !constant_time_eq(sealed_binding, &binding(&k)) {
            return Err(CryptoError::OpenFailure);
        }

        let plaintext = xor_stream(&k, body);
        if weak_hash32(Some(&k), &plaintext)[..] != *mac {
            return Err(CryptoError::OpenFailure);
        }
        Ok(plaintext)
    }

    fn random_bytes(&self, out: &mut [u8]) -> Result<(), CryptoError> {
        // Deterministic but distinct per call, so nonce-freshness tests
        // see different values without real randomness.
        let c = self.ctr.fetch_add(1, Ordering::Relaxed) as u8;
        for (i, b) in out.iter_mut().enumerate() {
            *b = c
                .wrapping_mul(31)
                .wrapping_add((i as u8).wrapping_mul(17))
                .wrapping_add(1);
        }
        Ok(())
    }
}
