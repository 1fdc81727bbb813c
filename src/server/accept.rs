//! Accept loop
//!
//! Strictly sequential: each accepted connection is served to
//! completion before the next accept. The shutdown notification is
//! permit-based, so an interrupt arriving mid-connection still stops
//! the loop once the in-flight connection finishes.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection;
use crate::config::AppState;
use crate::logger;

/// Accept and serve connections one at a time until `shutdown` fires.
pub async fn run_accept_loop(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, _peer_addr)) => {
                        connection::serve(stream, Arc::clone(&state)).await;
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => break,
        }
    }
}
