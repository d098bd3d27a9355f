use std::sync::Arc;

use crate::{
    crypto::{constant_time_eq, KeyPair, PublicKey, SealedChannel},
    mutual::{payload, AuthError, Nonce, Role, SessionState},
    protocol::{AuthMessage, MSG_CHALLENGE, MSG_FINALIZE, MSG_RESPONSE},
};

/// One side of the three-message mutual authentication handshake.
///
/// The session borrows the local key pair, is bound to a single peer
/// public key for its lifetime, and takes exactly one role, fixed by
/// whichever operation runs first: `initiate()` makes it the initiator,
/// consuming a `Challenge` makes it the responder.
///
/// Message flow:
///
/// ```text
/// Initiator                        Responder
/// ─────────                        ─────────
/// Challenge(seal(n1))  ──────────►
///                      ◄──────────  Response(seal(n1 || n2))
/// Finalize(seal(n2))   ──────────►
/// ```
///
/// Each operation is a synchronous computation over in-memory buffers;
/// the caller owns transport, scheduling, and deadlines. A session that
/// returns a decrypt or nonce error is `Failed` and must be discarded.
pub struct MutualAuthenticator<'k> {
    own: &'k KeyPair,
    peer: PublicKey,
    nonce_len: usize,
    crypto: Arc<dyn SealedChannel>,
    state: SessionState,
    role: Option<Role>,
    peer_authenticated: bool,
}

impl<'k> MutualAuthenticator<'k> {
    /// `nonce_len` is the byte length of each generated nonce. It must
    /// match the peer's out of band; it is not validated here beyond
    /// being used as-is (nonce-size policy belongs to the caller).
    pub fn new(
        own: &'k KeyPair,
        peer: PublicKey,
        nonce_len: usize,
        crypto: Arc<dyn SealedChannel>,
    ) -> Self {
        Self {
            own,
            peer,
            nonce_len,
            crypto,
            state: SessionState::New,
            role: None,
            peer_authenticated: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// `None` until the first operation fixes the role.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// True once this side has verified that a nonce it generated was
    /// correctly echoed back under the peer's claimed key pair. Flips
    /// `false → true` at most once and never resets.
    pub fn peer_authenticated(&self) -> bool {
        self.peer_authenticated
    }

    /// Start the handshake as initiator. Valid only from `New`.
    pub fn initiate(&mut self) -> Result<AuthMessage, AuthError> {
        match self.state {
            SessionState::New => {
                // Backend failures here leave the session in `New`:
                // nothing has been emitted, a retry is harmless.
                let n1 = self.fresh_nonce()?;
                let sealed = self
                    .crypto
                    .seal(self.own, &self.peer, &payload::challenge(n1.as_bytes()))
                    .map_err(|e| AuthError::Crypto(e.to_string()))?;

                self.role = Some(Role::Initiator);
                self.state = SessionState::ChallengeSent { n1 };
                Ok(AuthMessage::Challenge(sealed))
            }
            SessionState::ChallengeSent { .. } | SessionState::ResponseSent { .. } => {
                Err(AuthError::AlreadyInitiated)
            }
            SessionState::Authenticated | SessionState::Failed => Err(AuthError::Terminal),
        }
    }

    /// Feed the next inbound handshake message. Returns the message to
    /// send back, or `None` when the handshake just completed on the
    /// responder side.
    pub fn consume(&mut self, msg: &AuthMessage) -> Result<Option<AuthMessage>, AuthError> {
        if self.state.is_terminal() {
            return Err(AuthError::Terminal);
        }

        match (&self.state, msg) {
            (SessionState::New, AuthMessage::Challenge(ct)) => {
                self.role = Some(Role::Responder);

                let plain = match self.crypto.open(self.own, &self.peer, ct) {
                    Ok(p) => p,
                    Err(_) => return Err(self.fail(AuthError::DecryptFailed)),
                };
                let n1 = match payload::split_challenge(&plain, self.nonce_len) {
                    Ok(n1) => n1.to_vec(),
                    Err(e) => return Err(self.fail(e)),
                };

                let n2 = match self.fresh_nonce() {
                    Ok(n2) => n2,
                    Err(e) => return Err(self.fail(e)),
                };
                let sealed = match self.crypto.seal(
                    self.own,
                    &self.peer,
                    &payload::response(&n1, n2.as_bytes()),
                ) {
                    Ok(sealed) => sealed,
                    Err(e) => return Err(self.fail(AuthError::Crypto(e.to_string()))),
                };

                // The initiator is not authenticated yet: no proof of its
                // private key has been verified locally.
                self.state = SessionState::ResponseSent { n2 };
                Ok(Some(AuthMessage::Response(sealed)))
            }

            (SessionState::ChallengeSent { n1 }, AuthMessage::Response(ct)) => {
                let n1 = n1.clone();

                let plain = match self.crypto.open(self.own, &self.peer, ct) {
                    Ok(p) => p,
                    Err(_) => return Err(self.fail(AuthError::DecryptFailed)),
                };
                let (n1_echo, n2) = match payload::split_response(&plain, self.nonce_len) {
                    Ok(parts) => parts,
                    Err(e) => return Err(self.fail(e)),
                };

                if !constant_time_eq(n1_echo, n1.as_bytes()) {
                    return Err(self.fail(AuthError::NonceMismatch));
                }

                // A valid echo of n1, sealed under the claimed key pair,
                // proves the responder holds the matching private key.
                let sealed = match self.crypto.seal(self.own, &self.peer, &payload::finalize(n2)) {
                    Ok(sealed) => sealed,
                    Err(e) => return Err(self.fail(AuthError::Crypto(e.to_string()))),
                };

                self.peer_authenticated = true;
                self.state = SessionState::Authenticated;
                Ok(Some(AuthMessage::Finalize(sealed)))
            }

            (SessionState::ResponseSent { n2 }, AuthMessage::Finalize(ct)) => {
                let n2 = n2.clone();

                let plain = match self.crypto.open(self.own, &self.peer, ct) {
                    Ok(p) => p,
                    Err(_) => return Err(self.fail(AuthError::DecryptFailed)),
                };
                let n2_echo = match payload::split_finalize(&plain, self.nonce_len) {
                    Ok(n2_echo) => n2_echo,
                    Err(e) => return Err(self.fail(e)),
                };

                if !constant_time_eq(n2_echo, n2.as_bytes()) {
                    return Err(self.fail(AuthError::NonceMismatch));
                }

                self.peer_authenticated = true;
                self.state = SessionState::Authenticated;
                Ok(None)
            }

            (state, msg) => {
                let expected = match state {
                    SessionState::New => MSG_CHALLENGE,
                    SessionState::ChallengeSent { .. } => MSG_RESPONSE,
                    SessionState::ResponseSent { .. } => MSG_FINALIZE,
                    SessionState::Authenticated | SessionState::Failed => {
                        unreachable!("terminal states rejected before dispatch")
                    }
                };
                Err(AuthError::UnexpectedMessage {
                    expected,
                    got: msg.tag(),
                })
            }
        }
    }

    fn fresh_nonce(&self) -> Result<Nonce, AuthError> {
        let mut buf = vec![0u8; self.nonce_len];
        self.crypto
            .random_bytes(&mut buf)
            .map_err(|e| AuthError::Crypto(e.to_string()))?;
        Ok(Nonce(buf))
    }

    fn fail(&mut self, err: AuthError) -> AuthError {
        self.state = SessionState::Failed;
        err
    }
}
