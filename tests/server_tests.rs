//! End-to-end tests over a real TCP connection.
//!
//! Each test boots an in-process server on an ephemeral port, talks raw
//! HTTP/1.1 to it and asserts on the wire-level response.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Notify;

use servedir::config::{AppState, Config, LoggingConfig, ServerConfig};
use servedir::http::conditional;
use servedir::server::{create_listener, run_accept_loop};

fn fixture_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    std::fs::write(dir.path().join("style.css"), "body { margin: 0 }").unwrap();
    std::fs::create_dir(dir.path().join("docs")).unwrap();
    std::fs::write(dir.path().join("docs/index.html"), "docs home").unwrap();
    dir
}

fn state_for(root: &TempDir) -> Arc<AppState> {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            root: root.path().to_string_lossy().into_owned(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
        },
        logging: LoggingConfig { access_log: false },
    };
    Arc::new(AppState::new(config).unwrap())
}

/// Boot a server on an ephemeral port running the real accept loop.
fn start_server(root: &TempDir) -> SocketAddr {
    let state = state_for(root);
    let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Arc::new(Notify::new());

    tokio::spawn(run_accept_loop(listener, state, shutdown));

    addr
}

async fn send_request(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).into_owned()
}

async fn get(addr: SocketAddr, path: &str) -> String {
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    send_request(addr, &request).await
}

#[tokio::test]
async fn test_serves_file_with_content_type_and_length() {
    let root = fixture_root();
    let addr = start_server(&root);

    let response = get(addr, "/style.css").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("content-type: text/css; charset=utf-8"));
    assert!(response.contains("content-length: 18"));
    assert!(response.contains("last-modified: "));
    assert!(response.ends_with("body { margin: 0 }"));
}

#[tokio::test]
async fn test_root_serves_index_html() {
    let root = fixture_root();
    let addr = start_server(&root);

    let response = get(addr, "/").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.ends_with("<h1>home</h1>"));
}

#[tokio::test]
async fn test_directory_redirect() {
    let root = fixture_root();
    let addr = start_server(&root);

    let response = get(addr, "/docs").await;
    assert!(response.starts_with("HTTP/1.1 301 Moved Permanently\r\n"));
    assert!(response.contains("location: /docs/"));
}

#[tokio::test]
async fn test_directory_with_slash_serves_index() {
    let root = fixture_root();
    let addr = start_server(&root);

    let response = get(addr, "/docs/").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.ends_with("docs home"));
}

#[tokio::test]
async fn test_not_found() {
    let root = fixture_root();
    let addr = start_server(&root);

    let response = get(addr, "/missing.html").await;
    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(response.ends_with("File not found"));
}

#[tokio::test]
async fn test_conditional_get_not_modified() {
    let root = fixture_root();
    let addr = start_server(&root);

    let mtime = std::fs::metadata(root.path().join("style.css"))
        .unwrap()
        .modified()
        .unwrap();
    let request = format!(
        "GET /style.css HTTP/1.1\r\nHost: localhost\r\nIf-Modified-Since: {}\r\nConnection: close\r\n\r\n",
        conditional::http_date(mtime)
    );

    let response = send_request(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 304 Not Modified\r\n"));
    assert!(!response.contains("content-length"));
    assert!(response.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_invalid_if_modified_since_gets_full_response() {
    let root = fixture_root();
    let addr = start_server(&root);

    let request = "GET /style.css HTTP/1.1\r\nHost: localhost\r\nIf-Modified-Since: not-a-date\r\nConnection: close\r\n\r\n";
    let response = send_request(addr, request).await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
}

#[tokio::test]
async fn test_shutdown_completes_with_connection_in_flight() {
    let root = fixture_root();
    let state = state_for(&root);
    let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Arc::new(Notify::new());

    let loop_handle = tokio::spawn(run_accept_loop(listener, state, Arc::clone(&shutdown)));

    // Park the server inside a connection, then request shutdown while
    // it is busy serving.
    let stream = TcpStream::connect(addr).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.notify_one();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // The in-flight connection keeps the loop alive...
    assert!(!loop_handle.is_finished());

    // ...and once the client goes away, the stored notification stops
    // the loop instead of being lost.
    drop(stream);
    tokio::time::timeout(Duration::from_secs(2), loop_handle)
        .await
        .expect("accept loop should stop once the in-flight connection closes")
        .unwrap();
}

#[tokio::test]
async fn test_shutdown_while_idle() {
    let root = fixture_root();
    let state = state_for(&root);
    let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let shutdown = Arc::new(Notify::new());

    let loop_handle = tokio::spawn(run_accept_loop(listener, state, Arc::clone(&shutdown)));
    shutdown.notify_one();

    tokio::time::timeout(Duration::from_secs(2), loop_handle)
        .await
        .expect("accept loop should stop when idle")
        .unwrap();
}

#[tokio::test]
async fn test_sequential_requests_on_fresh_connections() {
    let root = fixture_root();
    let addr = start_server(&root);

    // The accept loop serves one connection at a time; consecutive
    // clients must each get a complete response.
    for _ in 0..3 {
        let response = get(addr, "/index.html").await;
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    }
}
