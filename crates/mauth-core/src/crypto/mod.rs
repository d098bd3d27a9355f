pub mod compare;
pub mod traits;
pub mod types;

pub use compare::*;
pub use traits::*;
pub use types::*;


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("randomness generation failed")]
    RngFailure,

    #[error("sealing failed")]
    SealFailure,

    #[error("opening failed")]
    OpenFailure,

    #[error("invalid key material")]
    InvalidKey,
}
