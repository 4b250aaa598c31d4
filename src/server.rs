// Server side ALPN flow (RFC 7301 section 3.2):
//
// 1. ClientHello without ALPN, or with an empty list: the provider is told
//    ALPN is unsupported, the ServerHello carries no ALPN.
// 2. Otherwise the provider selects from the client's list, in the
//    client's preference order.
//    - A protocol: echoed as a one-element list in the ServerHello.
//    - None: declined, no ALPN in the ServerHello. The client treats the
//      server as not supporting ALPN.
//    - Error: handshake aborts with no_application_protocol.

use std::sync::Arc;

use log::{trace, warn};

use crate::diag::{diag, Diagnostics};
use crate::{
    AlpnExtension, Config, Error, NegotiationError, NegotiationOutcome, ProtocolId, ServerProvider,
};

/// Server side negotiation for a single handshake.
pub struct ServerNegotiation {
    provider: Arc<dyn ServerProvider>,
    strict_selection: bool,
    outcome: Option<NegotiationOutcome>,
    diag: Diagnostics,
}

impl ServerNegotiation {
    pub fn new(provider: Arc<dyn ServerProvider>, config: &Config) -> Self {
        ServerNegotiation {
            provider,
            strict_selection: config.strict_selection(),
            outcome: None,
            diag: Diagnostics::new(config.diagnostics()),
        }
    }

    /// Run negotiation against the client's ALPN extension, if it sent one.
    pub fn client_hello(
        &mut self,
        ext: Option<&AlpnExtension>,
    ) -> Result<NegotiationOutcome, Error> {
        if let Some(outcome) = &self.outcome {
            return Err(Error::InvalidState(format!(
                "ClientHello handled twice, already {:?}",
                outcome
            )));
        }

        let outcome = match ext.map(|e| e.protocols()) {
            None | Some([]) => {
                diag!(self.diag, "Client does not support ALPN");
                self.provider.unsupported();
                NegotiationOutcome::Unsupported
            }
            Some(offered) => {
                diag!(self.diag, "Client offered {:?}", offered);
                self.select(offered)
            }
        };

        trace!("Negotiated {:?}", outcome);
        self.outcome = Some(outcome.clone());

        Ok(outcome)
    }

    fn select(&self, offered: &[ProtocolId]) -> NegotiationOutcome {
        match self.provider.select(offered) {
            Ok(Some(protocol)) if offered.contains(&protocol) => {
                diag!(self.diag, "Server selected {}", protocol);
                NegotiationOutcome::Selected(protocol)
            }
            Ok(Some(protocol)) if self.strict_selection => {
                warn!("Server provider selected {} which was not offered", protocol);
                NegotiationOutcome::Rejected(NegotiationError::new(format!(
                    "protocol not offered: {}",
                    protocol
                )))
            }
            Ok(Some(protocol)) => {
                diag!(self.diag, "Server selected unoffered {}, forwarding", protocol);
                NegotiationOutcome::Selected(protocol)
            }
            Ok(None) => {
                diag!(self.diag, "Server declined ALPN");
                NegotiationOutcome::Declined
            }
            Err(e) => {
                diag!(self.diag, "Server rejected ALPN: {}", e.reason());
                NegotiationOutcome::Rejected(e)
            }
        }
    }

    /// The ALPN extension for the ServerHello, `None` to leave it out.
    pub fn server_hello_extension(&self) -> Option<AlpnExtension> {
        self.outcome
            .as_ref()
            .and_then(|o| o.protocol())
            .map(|p| AlpnExtension::selected(p.clone()))
    }

    /// The outcome, once the ClientHello has been handled.
    pub fn outcome(&self) -> Option<&NegotiationOutcome> {
        self.outcome.as_ref()
    }
}
