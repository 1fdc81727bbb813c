//! Logging helpers
//!
//! Plain stdout/stderr line logging for server lifecycle events and
//! per-request access lines.

use hyper::{Method, Uri};
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("======================================");
    println!("Static file server started");
    println!("Listening on: http://{addr}");
    println!("Document root: {}", root.display());
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}

pub fn log_shutdown() {
    println!("\nServer stopped");
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!("[Request] {method} {uri}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
