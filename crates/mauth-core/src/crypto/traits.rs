use crate::crypto::{CryptoError, KeyPair, PublicKey};

// Trait boundary for the sealed-channel primitive and nonce randomness.
// Core protocol logic must depend on this trait, never on concrete crypto backends.
//
// Contract for implementations: `open` succeeds only for ciphertext produced
// by `seal` with the matching key-pair/public-key combination on the other
// side. Tampering or a key mismatch must fail, never yield garbage plaintext.
pub trait SealedChannel: Send + Sync {
    // Seal `plaintext` from `own` to the holder of `peer`.
    fn seal(&self, own: &KeyPair, peer: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>;

    // Open ciphertext sealed by the holder of `peer` for `own`.
    fn open(&self, own: &KeyPair, peer: &PublicKey, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError>;

    // Fill `out` with cryptographically random bytes.
    fn random_bytes(&self, out: &mut [u8]) -> Result<(), CryptoError>;
}
