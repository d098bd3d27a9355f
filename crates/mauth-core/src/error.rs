use thiserror::Error;

use crate::{crypto::CryptoError, mutual::AuthError, protocol::ProtocolError};

#[derive(Debug, Error)]
pub enum MauthError {
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}
