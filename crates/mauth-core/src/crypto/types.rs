// Key material is opaque to the core: format and length are defined by the
// SealedChannel backend in use.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(pub Vec<u8>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey(pub Vec<u8>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public: PublicKey,
    pub secret: PrivateKey,
}

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl PrivateKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
