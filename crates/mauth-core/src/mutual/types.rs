/// A single-use random byte string of the session's configured length.
/// Generated once per handshake and side, consumed by validation, never
/// reused across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce(pub Vec<u8>);

impl Nonce {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Initiator,
    Responder,
}

// In-flight nonces live in the state variants: a nonce exists exactly as
// long as the state that awaits its echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    New,
    ChallengeSent { n1: Nonce },
    ResponseSent { n2: Nonce },
    Authenticated,
    Failed,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Authenticated | SessionState::Failed)
    }
}
