use crate::protocol::{MSG_CHALLENGE, MSG_FINALIZE, MSG_RESPONSE};

#[test]
fn message_tags_are_stable() {
    assert_eq!(MSG_CHALLENGE, 0x01);
    assert_eq!(MSG_RESPONSE, 0x02);
    assert_eq!(MSG_FINALIZE, 0x03);
}

#[test]
fn errors_compose_into_the_crate_error() {
    use crate::{crypto::CryptoError, mutual::AuthError, protocol::ProtocolError, MauthError};

    let e: MauthError = ProtocolError::Malformed.into();
    assert!(matches!(e, MauthError::Protocol(_)));

    let e: MauthError = CryptoError::OpenFailure.into();
    assert!(matches!(e, MauthError::Crypto(_)));

    let e: MauthError = AuthError::NonceMismatch.into();
    assert!(matches!(e, MauthError::Auth(_)));
}
