//! Per-connection provider registry.
//!
//! The registry is a point-lookup table: `put`, `get` and `remove`, nothing
//! else. Entries are never expired. Whoever registers a connection must
//! remove it again, typically when negotiation has concluded or the
//! connection is closed. A forgotten entry lives as long as the registry.

use dashmap::DashMap;

use crate::diag::{diag, Diagnostics};
use crate::{Config, Connection, ConnectionId, Provider};

/// Concurrent map from connection identity to its registered [`Provider`].
///
/// Backed by a [`DashMap`]. Each operation is a single map call, so a `put`
/// that has returned is seen by every later `get` on any thread.
///
/// The registry also owns the [`Config`] its negotiation sessions run with.
#[derive(Debug)]
pub struct Registry {
    providers: DashMap<ConnectionId, Provider>,
    config: Config,
    diag: Diagnostics,
}

impl Registry {
    /// Create a registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Registry {
            providers: DashMap::new(),
            diag: Diagnostics::new(config.diagnostics()),
            config,
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register `provider` for `conn`.
    ///
    /// Replaces any provider already registered for the same connection;
    /// the previous one is dropped without notice.
    pub fn put<C: Connection + ?Sized>(&self, conn: &C, provider: Provider) {
        let id = conn.connection_id();
        let kind = provider.kind();

        if self.providers.insert(id, provider).is_some() {
            diag!(self.diag, "{}: replaced provider with {} provider", id, kind);
        } else {
            diag!(self.diag, "{}: registered {} provider", id, kind);
        }
    }

    /// The provider registered for `conn`, if any.
    pub fn get<C: Connection + ?Sized>(&self, conn: &C) -> Option<Provider> {
        let id = conn.connection_id();
        // Clone out so no shard guard outlives this call.
        let provider = self.providers.get(&id).map(|r| r.clone());

        diag!(
            self.diag,
            "{}: lookup {}",
            id,
            provider.as_ref().map(|p| p.kind()).unwrap_or("miss")
        );

        provider
    }

    /// Unregister `conn`, returning the provider that was registered.
    ///
    /// Removing an unknown connection returns `None`.
    pub fn remove<C: Connection + ?Sized>(&self, conn: &C) -> Option<Provider> {
        let id = conn.connection_id();
        let provider = self.providers.remove(&id).map(|(_, p)| p);

        if provider.is_some() {
            diag!(self.diag, "{}: unregistered", id);
        } else {
            diag!(self.diag, "{}: unregister of unknown connection", id);
        }

        provider
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
