//! Fixed-layout sealed payloads. Nonce length is a session-wide constant
//! known to both sides, so nonces are concatenated with no separators.

use crate::mutual::AuthError;

// Challenge payload: [n1]
pub fn challenge(n1: &[u8]) -> Vec<u8> {
    n1.to_vec()
}

// Response payload: [n1 || n2]
pub fn response(n1: &[u8], n2: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(n1.len() + n2.len());
    out.extend_from_slice(n1);
    out.extend_from_slice(n2);
    out
}

// Finalize payload: [n2]
pub fn finalize(n2: &[u8]) -> Vec<u8> {
    n2.to_vec()
}

// A payload whose length disagrees with the configured nonce length is
// indistinguishable from a corrupted one (e.g. peers configured with
// different lengths) and fails the same way a bad ciphertext does.

pub fn split_challenge(payload: &[u8], nonce_len: usize) -> Result<&[u8], AuthError> {
    if payload.len() != nonce_len {
        return Err(AuthError::DecryptFailed);
    }
    Ok(payload)
}

pub fn split_response(payload: &[u8], nonce_len: usize) -> Result<(&[u8], &[u8]), AuthError> {
    if payload.len() != nonce_len * 2 {
        return Err(AuthError::DecryptFailed);
    }
    Ok(payload.split_at(nonce_len))
}

pub fn split_finalize(payload: &[u8], nonce_len: usize) -> Result<&[u8], AuthError> {
    if payload.len() != nonce_len {
        return Err(AuthError::DecryptFailed);
    }
    Ok(payload)
}
