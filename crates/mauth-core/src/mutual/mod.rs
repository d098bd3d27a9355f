pub mod payload;
pub mod session;
pub mod types;

pub use session::MutualAuthenticator;
pub use types::*;

#[cfg(test)]
pub(crate) mod test_crypto;


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    // Sealed-channel `open` rejected the ciphertext, or the recovered
    // payload does not fit the configured nonce length. Key mismatch on
    // either side, corruption, and tampering all land here.
    #[error("sealed payload could not be opened")]
    DecryptFailed,

    // The peer echoed a nonce that differs from the one issued locally.
    #[error("nonce mismatch")]
    NonceMismatch,

    #[error("unexpected message type: expected {expected:#x}, got {got:#x}")]
    UnexpectedMessage { expected: u8, got: u8 },

    #[error("handshake already initiated")]
    AlreadyInitiated,

    #[error("session is in a terminal state")]
    Terminal,

    #[error("crypto error: {0}")]
    Crypto(String),
}
