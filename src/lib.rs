//! Application-Layer Protocol Negotiation (RFC 7301) for TLS handshake engines.
//!
//! Applications register a [`ClientProvider`] or [`ServerProvider`] for each
//! connection in a [`Registry`]. The handshake engine, through a
//! [`Negotiator`], looks the provider up when it builds or receives hello
//! messages and drives a [`ClientNegotiation`] or [`ServerNegotiation`],
//! which invokes the provider callbacks and produces a
//! [`NegotiationOutcome`].
//!
//! The crate does no TLS and no I/O. It consumes connection identities and
//! ALPN extension bodies and returns protocol lists, selections or the alert
//! to abort with.
//!
//! Registry entries are never cleaned up automatically. Call
//! [`Registry::remove`] when negotiation has concluded or the connection
//! closes.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod alert;
mod client;
mod config;
mod connection;
mod diag;
mod error;
mod extension;
mod negotiator;
mod outcome;
mod protocol;
mod provider;
mod registry;
mod server;

pub use alert::AlertDescription;
pub use client::ClientNegotiation;
pub use config::{Config, ConfigBuilder};
pub use connection::{Connection, ConnectionId};
pub use error::{Error, NegotiationError};
pub use extension::{AlpnExtension, EXTENSION_TYPE_ALPN};
pub use negotiator::Negotiator;
pub use outcome::NegotiationOutcome;
pub use protocol::ProtocolId;
pub use provider::{ClientProvider, Provider, ServerProvider};
pub use registry::Registry;
pub use server::ServerNegotiation;
