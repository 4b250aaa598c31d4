use thiserror::Error;

use crate::alert::AlertDescription;

/// Errors surfaced by the registry and the negotiation sessions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Protocol names must be between 1 and 255 bytes.
    #[error("Invalid protocol id length {0} (must be 1..=255)")]
    InvalidProtocolId(usize),

    #[error("Malformed ALPN extension: {0}")]
    Malformed(String),

    #[error("ALPN extension too large ({0} bytes)")]
    ExtensionTooLarge(usize),

    /// The server answered with ALPN although the client never offered it.
    #[error("Server sent an ALPN extension that was not offered")]
    UnsolicitedExtension,

    #[error("Invalid negotiation state: {0}")]
    InvalidState(String),
}

impl Error {
    /// The alert the handshake engine should send when aborting on this error.
    pub fn alert(&self) -> Option<AlertDescription> {
        match self {
            Error::Malformed(_) => Some(AlertDescription::DecodeError),
            Error::UnsolicitedExtension => Some(AlertDescription::UnsupportedExtension),
            Error::ExtensionTooLarge(_) | Error::InvalidState(_) => {
                Some(AlertDescription::InternalError)
            }
            Error::InvalidProtocolId(_) => None,
        }
    }
}

/// A provider refused the protocol under negotiation.
///
/// Always aborts the handshake with `no_application_protocol`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ALPN negotiation rejected: {reason}")]
pub struct NegotiationError {
    reason: String,
}

impl NegotiationError {
    pub fn new(reason: impl Into<String>) -> Self {
        NegotiationError {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[inline(always)]
    pub fn alert(&self) -> AlertDescription {
        AlertDescription::NoApplicationProtocol
    }
}
