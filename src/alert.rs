//! TLS alert descriptions raised by ALPN negotiation (RFC 8446 section 6, RFC 7301).

/// TLS alert description codes.
///
/// Only the codes negotiation can produce are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlertDescription {
    DecodeError = 50,
    InternalError = 80,
    UnsupportedExtension = 110,
    NoApplicationProtocol = 120,
}

impl AlertDescription {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            50 => Some(Self::DecodeError),
            80 => Some(Self::InternalError),
            110 => Some(Self::UnsupportedExtension),
            120 => Some(Self::NoApplicationProtocol),
            _ => None,
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DecodeError => "decode_error",
            Self::InternalError => "internal_error",
            Self::UnsupportedExtension => "unsupported_extension",
            Self::NoApplicationProtocol => "no_application_protocol",
        };
        f.write_str(name)
    }
}
