use crate::protocol::ProtocolError;

pub const MSG_CHALLENGE: u8 = 0x01;
pub const MSG_RESPONSE: u8 = 0x02;
pub const MSG_FINALIZE: u8 = 0x03;

// The three handshake messages. Each carries a sealed payload that is
// opaque to any transport moving it between peers; payload contents are
// internal to the mutual module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMessage {
    Challenge(Vec<u8>),
    Response(Vec<u8>),
    Finalize(Vec<u8>),
}

impl AuthMessage {
    pub fn tag(&self) -> u8 {
        match self {
            AuthMessage::Challenge(_) => MSG_CHALLENGE,
            AuthMessage::Response(_) => MSG_RESPONSE,
            AuthMessage::Finalize(_) => MSG_FINALIZE,
        }
    }

    pub fn ciphertext(&self) -> &[u8] {
        match self {
            AuthMessage::Challenge(ct) | AuthMessage::Response(ct) | AuthMessage::Finalize(ct) => ct,
        }
    }

    // Wire layout: [type u8][ciphertext ..]. Ciphertext bytes are preserved
    // exactly; the sealed-channel primitive treats them as opaque.
    pub fn encode(&self) -> Vec<u8> {
        let ct = self.ciphertext();
        let mut out = Vec::with_capacity(1 + ct.len());
        out.push(self.tag());
        out.extend_from_slice(ct);
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let (&tag, ct) = bytes.split_first().ok_or(ProtocolError::Malformed)?;

        match tag {
            MSG_CHALLENGE => Ok(AuthMessage::Challenge(ct.to_vec())),
            MSG_RESPONSE => Ok(AuthMessage::Response(ct.to_vec())),
            MSG_FINALIZE => Ok(AuthMessage::Finalize(ct.to_vec())),
            other => Err(ProtocolError::UnknownType(other)),
        }
    }
}
