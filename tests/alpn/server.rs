//! Server side negotiation driven through a simulated handshake.

use alpn_registry::{AlertDescription, AlpnExtension, Config, NegotiationOutcome, Provider};

use crate::common::*;

fn register(fx: &Fixture, client: &[&str], choice: Choice) -> std::sync::Arc<RecordingServer> {
    fx.registry().put(
        &fx.client_conn,
        Provider::Client(RecordingClient::offering(client)),
    );
    let server = RecordingServer::new(choice);
    fx.registry()
        .put(&fx.server_conn, Provider::Server(server.clone()));
    server
}

#[test]
fn server_selects_offered_protocol() {
    let fx = Fixture::new();
    let server = register(&fx, &["spdy/3", "http/1.1"], Choice::Fixed(id("http/1.1")));

    let hs = fx.handshake();

    assert!(hs.aborted.is_none());
    let sh = AlpnExtension::decode(hs.server_hello_alpn.as_deref().unwrap()).unwrap();
    assert_eq!(sh.protocols(), &[id("http/1.1")]);
    assert_eq!(
        hs.server_outcome,
        Some(NegotiationOutcome::Selected(id("http/1.1")))
    );
    assert_eq!(hs.negotiated(), Some(&id("http/1.1")));

    // Client order passed through untouched.
    assert_eq!(server.select_calls(), vec![ids(&["spdy/3", "http/1.1"])]);
    assert_eq!(server.unsupported_count(), 0);
}

#[test]
fn server_hello_bytes() {
    let fx = Fixture::new();
    register(&fx, &["spdy/3", "http/1.1"], Choice::Fixed(id("http/1.1")));

    let hs = fx.handshake();

    let expected = [
        0x00, 0x09, // list length
        0x08, b'h', b't', b't', b'p', b'/', b'1', b'.', b'1',
    ];
    assert_eq!(hs.server_hello_alpn.as_deref(), Some(&expected[..]));
}

#[test]
fn server_decline_omits_extension() {
    let fx = Fixture::new();
    let server = register(&fx, &["h2", "http/1.1"], Choice::Decline);

    let hs = fx.handshake();

    assert!(hs.aborted.is_none());
    assert!(hs.server_hello_alpn.is_none());
    assert_eq!(hs.server_outcome, Some(NegotiationOutcome::Declined));
    // Client behaves as if the server were ALPN-unaware.
    assert_eq!(hs.client_outcome, Some(NegotiationOutcome::Unsupported));
    assert!(hs.negotiated().is_none());
    assert_eq!(server.select_calls().len(), 1);
}

#[test]
fn server_rejection_aborts_handshake() {
    let fx = Fixture::new();
    register(&fx, &["h2", "http/1.1"], Choice::Reject);

    let hs = fx.handshake();

    assert_eq!(
        hs.aborted,
        Some((Side::Server, AlertDescription::NoApplicationProtocol))
    );
    assert!(hs.server_hello_alpn.is_none());
    assert!(hs.client_outcome.is_none());
    assert!(hs.negotiated().is_none());
}

#[test]
fn server_unsupported_without_client_extension() {
    let fx = Fixture::new();
    let server = RecordingServer::preferring(&["h2"]);
    fx.registry()
        .put(&fx.server_conn, Provider::Server(server.clone()));

    let hs = fx.handshake();

    assert!(hs.aborted.is_none());
    assert_eq!(hs.server_outcome, Some(NegotiationOutcome::Unsupported));
    assert!(hs.server_hello_alpn.is_none());
    assert_eq!(server.unsupported_count(), 1);
    assert!(server.select_calls().is_empty());
}

#[test]
fn server_unsupported_on_empty_list() {
    let fx = Fixture::new();
    let server = RecordingServer::preferring(&["h2"]);
    fx.registry()
        .put(&fx.server_conn, Provider::Server(server.clone()));

    let mut session = fx.negotiator.server(&fx.server_conn).unwrap();
    let empty = AlpnExtension::decode(&[0x00, 0x00]).unwrap();
    let outcome = session.client_hello(Some(&empty)).unwrap();

    assert_eq!(outcome, NegotiationOutcome::Unsupported);
    assert!(session.server_hello_extension().is_none());
    assert_eq!(server.unsupported_count(), 1);
}

#[test]
fn server_unoffered_selection_is_rejected() {
    let fx = Fixture::new();
    register(&fx, &["h2", "http/1.1"], Choice::Fixed(id("spdy/3")));

    let hs = fx.handshake();

    assert_eq!(
        hs.aborted,
        Some((Side::Server, AlertDescription::NoApplicationProtocol))
    );
    assert!(hs.server_hello_alpn.is_none());
}

#[test]
fn server_unoffered_selection_forwarded_when_lenient() {
    let config = Config::builder()
        .strict_selection(false)
        .diagnostics(true)
        .build();
    let fx = Fixture::with_config(config);
    register(&fx, &["h2", "http/1.1"], Choice::Fixed(id("spdy/3")));

    let hs = fx.handshake();

    // The client is handed whatever the server picked.
    assert!(hs.aborted.is_none());
    assert_eq!(hs.negotiated(), Some(&id("spdy/3")));
}

#[test]
fn server_malformed_client_hello_alpn() {
    let err = AlpnExtension::decode(&[0x00, 0x05, 0x08, b'h', b't']).unwrap_err();
    assert_eq!(err.alert(), Some(AlertDescription::DecodeError));
}
