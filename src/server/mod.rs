//! Server module
//!
//! Listener construction, the accept loop, per-connection serving and
//! shutdown signals.

pub mod accept;
pub mod connection;
pub mod listener;
pub mod signal;

pub use accept::run_accept_loop;
pub use listener::create_listener;
