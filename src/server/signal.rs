// Signal handling module
//
// SIGTERM and SIGINT (Ctrl+C) both request an orderly shutdown: the
// accept loop stops, the in-flight connection finishes, the process
// exits cleanly.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn a background task that notifies `shutdown` on SIGINT/SIGTERM.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }

        // notify_one stores a permit: a signal arriving while the accept
        // loop is busy serving a connection is still consumed on its
        // next select, instead of being dropped on the floor.
        shutdown.notify_one();
    });
}

/// Non-unix fallback: only Ctrl+C is supported.
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.notify_one();
        }
    });
}
