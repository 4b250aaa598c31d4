use crate::{AlertDescription, NegotiationError, ProtocolId};

/// Result of one handshake's ALPN negotiation.
///
/// Handed to the handshake engine; nothing is retained by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationOutcome {
    /// A protocol was agreed on.
    Selected(ProtocolId),

    /// The peer did not take part in ALPN.
    Unsupported,

    /// The server provider chose not to select anything. The handshake
    /// continues without ALPN.
    Declined,

    /// A provider refused; the handshake must abort.
    Rejected(NegotiationError),
}

impl NegotiationOutcome {
    /// The negotiated protocol, if any.
    pub fn protocol(&self) -> Option<&ProtocolId> {
        match self {
            NegotiationOutcome::Selected(p) => Some(p),
            _ => None,
        }
    }

    /// Alert to abort the handshake with, if negotiation failed.
    pub fn alert(&self) -> Option<AlertDescription> {
        match self {
            NegotiationOutcome::Rejected(e) => Some(e.alert()),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, NegotiationOutcome::Rejected(_))
    }
}
