//! Per-connection serving
//!
//! Wraps an accepted TCP stream in hyper's HTTP/1 connection handling
//! and runs it to completion. The caller awaits the whole connection,
//! which is what makes the server strictly connection-per-request.

use crate::config::AppState;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpStream;

/// Serve one connection to completion with the static file handler.
pub async fn serve(stream: TcpStream, state: Arc<AppState>) {
    let io = TokioIo::new(stream);

    let service = service_fn(move |req| {
        let state = Arc::clone(&state);
        async move { handler::handle_request(req, state).await }
    });

    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
        logger::log_connection_error(&err);
    }
}
