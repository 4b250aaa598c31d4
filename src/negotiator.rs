use std::sync::Arc;

use log::warn;

use crate::{ClientNegotiation, Connection, Provider, Registry, ServerNegotiation};

/// What a handshake engine holds to run ALPN for its connections.
///
/// Looks up the provider registered for a connection and hands back a
/// negotiation session that calls it directly. A connection without a
/// provider of the right side simply has ALPN disabled.
///
/// Sessions run with the registry's [`Config`](crate::Config).
#[derive(Debug, Clone)]
pub struct Negotiator {
    registry: Arc<Registry>,
}

impl Negotiator {
    pub fn new(registry: Arc<Registry>) -> Self {
        Negotiator { registry }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Client negotiation for `conn`, if a client provider is registered.
    pub fn client<C: Connection + ?Sized>(&self, conn: &C) -> Option<ClientNegotiation> {
        let provider = self.registry.get(conn)?;
        let Some(client) = provider.as_client() else {
            warn!(
                "{}: server provider registered on client connection, ALPN disabled",
                conn.connection_id()
            );
            return None;
        };

        Some(ClientNegotiation::new(client.clone(), self.registry.config()))
    }

    /// Server negotiation for `conn`, if a server provider is registered.
    pub fn server<C: Connection + ?Sized>(&self, conn: &C) -> Option<ServerNegotiation> {
        let provider = self.registry.get(conn)?;
        let Some(server) = provider.as_server() else {
            warn!(
                "{}: client provider registered on server connection, ALPN disabled",
                conn.connection_id()
            );
            return None;
        };

        Some(ServerNegotiation::new(server.clone(), self.registry.config()))
    }

    /// Unregister `conn`. Same as [`Registry::remove`].
    pub fn finish<C: Connection + ?Sized>(&self, conn: &C) -> Option<Provider> {
        self.registry.remove(conn)
    }
}
