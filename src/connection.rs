use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one TLS connection.
///
/// Only used as a registry key. Two handles are the same connection
/// exactly when they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Allocate a fresh id, unique within this process.
    pub fn new() -> Self {
        ConnectionId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap an id the handshake engine already assigns to its connections.
    pub const fn from_raw(raw: u64) -> Self {
        ConnectionId(raw)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn#{}", self.0)
    }
}

/// Anything the handshake engine treats as a connection.
///
/// Blocking stream-style connections and non-blocking engine-style
/// connections both implement this, so the registry has a single entry
/// point for either kind.
pub trait Connection {
    fn connection_id(&self) -> ConnectionId;
}

impl Connection for ConnectionId {
    fn connection_id(&self) -> ConnectionId {
        *self
    }
}

impl<C: Connection + ?Sized> Connection for &C {
    fn connection_id(&self) -> ConnectionId {
        (**self).connection_id()
    }
}

impl<C: Connection + ?Sized> Connection for std::sync::Arc<C> {
    fn connection_id(&self) -> ConnectionId {
        (**self).connection_id()
    }
}
