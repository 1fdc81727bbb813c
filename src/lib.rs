//! servedir - a minimal static file server.
//!
//! Serves files from a fixed document root over HTTP/1.x with
//! index-document resolution, directory listings, MIME detection and
//! If-Modified-Since conditional GET support.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
