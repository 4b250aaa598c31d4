#![no_main]

//! Fuzz target for ALPN extension parsing.
//!
//! ProtocolNameList format (RFC 7301):
//! - List length: 2 bytes
//! - Per protocol: 1 byte length (non-zero), then the name

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use alpn_registry::{
    AlpnExtension, Config, NegotiationError, ProtocolId, ServerNegotiation, ServerProvider,
};

struct First;

impl ServerProvider for First {
    fn unsupported(&self) {}

    fn select(&self, protocols: &[ProtocolId]) -> Result<Option<ProtocolId>, NegotiationError> {
        Ok(protocols.first().cloned())
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(ext) = AlpnExtension::decode(data) else {
        return;
    };

    // Anything that parses re-encodes to the same bytes.
    assert_eq!(ext.to_vec(), data);

    let mut server = ServerNegotiation::new(Arc::new(First), &Config::default());
    let outcome = server.client_hello(Some(&ext)).expect("first client_hello");
    assert!(!outcome.is_rejected());
});
