pub mod types;

pub use types::*;


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed message")]
    Malformed,

    #[error("unknown message type: {0:#x}")]
    UnknownType(u8),
}
