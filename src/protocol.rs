use std::borrow::Cow;
use std::fmt;

use crate::Error;

/// An ALPN protocol identifier from the IANA registry, e.g. `http/1.1` or `h2`.
///
/// Opaque bytes, compared by value. RFC 7301 limits a name to 1..=255 bytes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProtocolId(Cow<'static, [u8]>);

impl ProtocolId {
    /// HTTP/1.1 (RFC 9112).
    pub const HTTP_1_1: ProtocolId = ProtocolId(Cow::Borrowed(b"http/1.1"));

    /// HTTP/2 over TLS (RFC 9113).
    pub const HTTP_2: ProtocolId = ProtocolId(Cow::Borrowed(b"h2"));

    /// HTTP/3 (RFC 9114).
    pub const HTTP_3: ProtocolId = ProtocolId(Cow::Borrowed(b"h3"));

    /// SPDY/3.
    pub const SPDY_3: ProtocolId = ProtocolId(Cow::Borrowed(b"spdy/3"));

    pub fn new(name: impl Into<Vec<u8>>) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() || name.len() > 255 {
            return Err(Error::InvalidProtocolId(name.len()));
        }
        Ok(ProtocolId(Cow::Owned(name)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl TryFrom<&str> for ProtocolId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ProtocolId::new(value.as_bytes())
    }
}

impl TryFrom<&[u8]> for ProtocolId {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        ProtocolId::new(value)
    }
}

impl AsRef<[u8]> for ProtocolId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProtocolId({:?})", String::from_utf8_lossy(&self.0))
    }
}
