//! Callbacks an application implements to take part in ALPN negotiation.
//!
//! A provider is registered per connection in the [`Registry`](crate::Registry)
//! and invoked synchronously on the thread driving that connection's
//! handshake. Callbacks must return quickly; a callback that blocks stalls
//! the handshake, there is no timeout.
//!
//! Client side:
//!
//! ```
//! use std::sync::Arc;
//! use alpn_registry::{ClientProvider, ConnectionId, NegotiationError, Provider, ProtocolId, Registry};
//!
//! struct Http;
//!
//! impl ClientProvider for Http {
//!     fn protocols(&self) -> Vec<ProtocolId> {
//!         vec![ProtocolId::HTTP_2, ProtocolId::HTTP_1_1]
//!     }
//!
//!     fn unsupported(&self) {}
//!
//!     fn selected(&self, protocol: &ProtocolId) -> Result<(), NegotiationError> {
//!         println!("Selected protocol: {}", protocol);
//!         Ok(())
//!     }
//! }
//!
//! let registry = Registry::new();
//! let conn = ConnectionId::new();
//! registry.put(&conn, Provider::client(Http));
//! // ... handshake ...
//! registry.remove(&conn);
//! ```
//!
//! Server side:
//!
//! ```
//! use alpn_registry::{NegotiationError, ProtocolId, ServerProvider};
//!
//! struct FirstOffered;
//!
//! impl ServerProvider for FirstOffered {
//!     fn unsupported(&self) {}
//!
//!     fn select(&self, protocols: &[ProtocolId]) -> Result<Option<ProtocolId>, NegotiationError> {
//!         Ok(protocols.first().cloned())
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::{NegotiationError, ProtocolId};

/// Client side of the negotiation.
pub trait ClientProvider: Send + Sync {
    /// Whether an ALPN extension should be added to the ClientHello at all.
    ///
    /// [`protocols`](Self::protocols) is only called when this returns true.
    fn supports(&self) -> bool {
        true
    }

    /// Protocols to offer, most preferred first.
    ///
    /// Sent as is, without reordering or deduplication. An empty list omits
    /// the extension from the ClientHello.
    fn protocols(&self) -> Vec<ProtocolId>;

    /// The server answered without an ALPN selection.
    fn unsupported(&self);

    /// The server selected `protocol`.
    ///
    /// Returning an error aborts the handshake with `no_application_protocol`.
    fn selected(&self, protocol: &ProtocolId) -> Result<(), NegotiationError>;
}

/// Server side of the negotiation.
pub trait ServerProvider: Send + Sync {
    /// The client offered no ALPN extension, or an empty list.
    fn unsupported(&self);

    /// Pick one of the protocols offered by the client, given in the client's
    /// preference order.
    ///
    /// `Ok(None)` declines: the ServerHello carries no ALPN extension and the
    /// client proceeds as if the server did not support ALPN. An error aborts
    /// the handshake with `no_application_protocol`.
    fn select(&self, protocols: &[ProtocolId]) -> Result<Option<ProtocolId>, NegotiationError>;
}

/// A registered provider, either client or server side.
///
/// Cloning shares the underlying provider.
#[derive(Clone)]
pub enum Provider {
    Client(Arc<dyn ClientProvider>),
    Server(Arc<dyn ServerProvider>),
}

impl Provider {
    pub fn client(provider: impl ClientProvider + 'static) -> Self {
        Provider::Client(Arc::new(provider))
    }

    pub fn server(provider: impl ServerProvider + 'static) -> Self {
        Provider::Server(Arc::new(provider))
    }

    pub fn as_client(&self) -> Option<&Arc<dyn ClientProvider>> {
        match self {
            Provider::Client(p) => Some(p),
            Provider::Server(_) => None,
        }
    }

    pub fn as_server(&self) -> Option<&Arc<dyn ServerProvider>> {
        match self {
            Provider::Server(p) => Some(p),
            Provider::Client(_) => None,
        }
    }

    /// Whether both handles refer to the same provider instance.
    pub fn ptr_eq(&self, other: &Provider) -> bool {
        match (self, other) {
            (Provider::Client(a), Provider::Client(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            (Provider::Server(a), Provider::Server(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Provider::Client(_) => "client",
            Provider::Server(_) => "server",
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Client(p) => write!(f, "Provider::Client({:p})", Arc::as_ptr(p)),
            Provider::Server(p) => write!(f, "Provider::Server({:p})", Arc::as_ptr(p)),
        }
    }
}
