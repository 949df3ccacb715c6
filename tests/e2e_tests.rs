//! End-to-end tests against an in-process JSON-RPC server.
//!
//! The server runs on its own tokio runtime in a background thread so the
//! blocking client can be driven from the test thread.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use casino25_client::{
    requests::{PlayerRef, SessionRef},
    Casino25Error, Client, ClientConfig,
};

type Seen = Arc<Mutex<Vec<Value>>>;

async fn handle(State(seen): State<Seen>, Json(request): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().push(request.clone());

    let id = request["id"].clone();
    let reply = match request["method"].as_str().unwrap_or_default() {
        "Game.List" => json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": { "Games": [{ "Id": "roulette" }, { "Id": "slots" }] },
        }),
        "Session.Get" => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32000, "message": "Session not found", "data": { "SessionId": "s404" } },
        }),
        _ => json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": request.get("params").cloned().unwrap_or(Value::Null),
        }),
    };

    Json(reply)
}

async fn server_error() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream unavailable")
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

/// Start a JSON-RPC echo server; returns its URL and the requests it received.
fn spawn_rpc_server() -> (String, Seen) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    listener.set_nonblocking(true).expect("set nonblocking");
    let addr = listener.local_addr().expect("local addr");

    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let state = seen.clone();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            let app = Router::new()
                .route("/jsonrpc", post(handle))
                .route("/broken", post(server_error))
                .route("/html", post(not_json))
                .with_state(state);
            axum::serve(listener, app).await.expect("serve");
        });
    });

    (format!("http://{addr}/jsonrpc"), seen)
}

fn sibling(url: &str, path: &str) -> String {
    url.replace("/jsonrpc", path)
}

fn connect(url: &str) -> Client {
    Client::new(ClientConfig::new(url).with_debug(true)).expect("client")
}

#[test]
fn test_create_player_end_to_end() {
    let (url, seen) = spawn_rpc_server();
    let client = connect(&url);

    let result = client
        .create_player(json!({ "Id": "p1", "BankGroupId": "bg1" }))
        .unwrap();
    assert_eq!(result, json!({ "Id": "p1", "BankGroupId": "bg1" }));

    let requests = seen.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["jsonrpc"], "2.0");
    assert_eq!(requests[0]["method"], "Player.Create");
    assert_eq!(requests[0]["params"], json!({ "Id": "p1", "BankGroupId": "bg1" }));
    assert!(requests[0]["id"].is_u64());
}

#[test]
fn test_list_games_full_and_unwrapped() {
    let (url, seen) = spawn_rpc_server();
    let client = connect(&url);

    let full = client.list_games().unwrap();
    assert_eq!(full["Games"][0]["Id"], "roulette");

    let games = client.list_games_unwrapped().unwrap();
    assert_eq!(games, json!([{ "Id": "roulette" }, { "Id": "slots" }]));

    let requests = seen.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].get("params").is_none());
}

#[test]
fn test_rpc_error_is_surfaced_unchanged() {
    let (url, _seen) = spawn_rpc_server();
    let client = connect(&url);

    match client.get_session(SessionRef::new("s404")) {
        Err(Casino25Error::Rpc { code, message, data }) => {
            assert_eq!(code, -32000);
            assert_eq!(message, "Session not found");
            assert_eq!(data, Some(json!({ "SessionId": "s404" })));
        }
        other => panic!("expected RPC error, got {other:?}"),
    }
}

#[test]
fn test_invalid_call_sends_nothing() {
    let (url, seen) = spawn_rpc_server();
    let client = connect(&url);

    let err = client.get_balance(json!({ "PlayerId": 7 })).unwrap_err();
    assert!(err.is_validation());

    client.get_balance(PlayerRef::new("p1")).unwrap();
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = connect(&format!("http://{addr}/jsonrpc"));
    let err = client.list_bonuses().unwrap_err();
    assert!(matches!(err, Casino25Error::Network { .. }));
    assert!(err.is_transport());
}

#[test]
fn test_missing_client_certificate_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig::new("https://api.example.com/jsonrpc")
        .with_ssl_key_path(dir.path().join("missing.pem"));

    assert!(matches!(
        Client::new(config),
        Err(Casino25Error::Io { .. })
    ));
}

#[test]
fn test_http_error_status_is_network_error() {
    let (url, _seen) = spawn_rpc_server();
    let client = connect(&sibling(&url, "/broken"));

    let err = client.list_bonuses().unwrap_err();
    match &err {
        Casino25Error::Network { source, .. } => {
            assert_eq!(source.status().map(|s| s.as_u16()), Some(500));
        }
        other => panic!("expected network error, got {other:?}"),
    }
    assert!(err.is_transport());
}

#[test]
fn test_non_json_body_is_malformed_response() {
    let (url, _seen) = spawn_rpc_server();
    let client = connect(&sibling(&url, "/html"));

    let err = client.list_bonuses().unwrap_err();
    assert!(matches!(
        err,
        Casino25Error::MalformedResponse { ref method, .. } if method == "Bonus.List"
    ));
    assert!(err.is_transport());
    assert!(!err.is_validation());
}

#[test]
fn test_unparsable_client_certificate_is_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is not a PEM file").unwrap();

    let config = ClientConfig::new("https://api.example.com/jsonrpc")
        .with_ssl_key_path(file.path().to_path_buf());

    match Client::new(config) {
        Err(Casino25Error::Configuration { message }) => {
            assert!(message.contains("Invalid client certificate"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_client_certificate_and_key_are_accepted() {
    let pem = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/client.pem");
    let config = ClientConfig::new("https://api.example.com/jsonrpc").with_ssl_key_path(pem);

    assert!(Client::new(config).is_ok());
}

#[test]
fn test_disabled_verification_still_builds() {
    let config = ClientConfig::new("https://api.example.com/jsonrpc").without_ssl_verification();
    let client = Client::new(config).unwrap();
    assert_eq!(
        client.transport().endpoint().as_str(),
        "https://api.example.com/jsonrpc"
    );
}
