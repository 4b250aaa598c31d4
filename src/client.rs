// Client side ALPN flow (RFC 7301 section 3):
//
// 1. Building the ClientHello, the engine asks for the ALPN extension.
//    - Provider does not support ALPN, or offers no protocols: the
//      extension is omitted and negotiation is over.
// 2. On ServerHello (or EncryptedExtensions in TLS 1.3) the engine hands
//    over the server's ALPN extension, if any.
//    - No extension: the provider is told ALPN is unsupported.
//    - One protocol: the provider is told the selection and may reject it,
//      which aborts the handshake with no_application_protocol.
//
// Exactly one of `unsupported` / `selected` fires per handshake.

use std::sync::Arc;

use log::trace;

use crate::diag::{diag, Diagnostics};
use crate::{AlpnExtension, ClientProvider, Config, Error, NegotiationOutcome};

/// Client side negotiation for a single handshake.
pub struct ClientNegotiation {
    provider: Arc<dyn ClientProvider>,
    state: State,
    offered: bool,
    diag: Diagnostics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// ClientHello not built yet.
    Start,

    /// Extension sent, waiting for the server's answer.
    AwaitServerHello,

    /// No extension was sent.
    NotOffered,

    Done,
}

impl ClientNegotiation {
    pub fn new(provider: Arc<dyn ClientProvider>, config: &Config) -> Self {
        ClientNegotiation {
            provider,
            state: State::Start,
            offered: false,
            diag: Diagnostics::new(config.diagnostics()),
        }
    }

    /// The ALPN extension for the ClientHello, `None` to leave it out.
    pub fn client_hello_extension(&mut self) -> Result<Option<AlpnExtension>, Error> {
        if self.state != State::Start {
            return Err(Error::InvalidState(format!(
                "ClientHello extension requested in state {:?}",
                self.state
            )));
        }

        if !self.provider.supports() {
            diag!(self.diag, "Client provider does not support ALPN");
            self.transition(State::NotOffered);
            return Ok(None);
        }

        let protocols = self.provider.protocols();
        if protocols.is_empty() {
            diag!(self.diag, "Client offers no protocols, omitting ALPN");
            self.transition(State::NotOffered);
            return Ok(None);
        }

        diag!(self.diag, "Client offering protocols {:?}", protocols);
        let ext = match AlpnExtension::new(protocols) {
            Ok(ext) => ext,
            Err(e) => {
                self.transition(State::Done);
                return Err(e);
            }
        };
        self.offered = true;
        self.transition(State::AwaitServerHello);

        Ok(Some(ext))
    }

    /// Resolve negotiation from the server's ALPN extension, if it sent one.
    pub fn server_hello(
        &mut self,
        ext: Option<&AlpnExtension>,
    ) -> Result<NegotiationOutcome, Error> {
        match (self.state, ext) {
            (State::AwaitServerHello, None) => {
                diag!(self.diag, "Server does not support ALPN");
                self.transition(State::Done);
                self.provider.unsupported();
                Ok(NegotiationOutcome::Unsupported)
            }
            (State::AwaitServerHello, Some(ext)) => {
                let [protocol] = ext.protocols() else {
                    self.transition(State::Done);
                    return Err(Error::Malformed(format!(
                        "Server ALPN must carry exactly one protocol, got {}",
                        ext.protocols().len()
                    )));
                };

                self.transition(State::Done);
                diag!(self.diag, "Server selected {}", protocol);

                match self.provider.selected(protocol) {
                    Ok(()) => Ok(NegotiationOutcome::Selected(protocol.clone())),
                    Err(e) => {
                        diag!(self.diag, "Client rejected {}: {}", protocol, e.reason());
                        Ok(NegotiationOutcome::Rejected(e))
                    }
                }
            }
            (State::NotOffered, None) => {
                self.transition(State::Done);
                Ok(NegotiationOutcome::Unsupported)
            }
            (State::NotOffered, Some(_)) => {
                self.transition(State::Done);
                Err(Error::UnsolicitedExtension)
            }
            (state @ (State::Start | State::Done), _) => Err(Error::InvalidState(format!(
                "ServerHello handled in state {:?}",
                state
            ))),
        }
    }

    /// Whether an ALPN extension went out in the ClientHello.
    pub fn offered(&self) -> bool {
        self.offered
    }

    fn transition(&mut self, new_state: State) {
        trace!("{:?} -> {:?}", self.state, new_state);
        self.state = new_state;
    }
}
