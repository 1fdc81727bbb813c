//! Request handler module
//!
//! Entry point for HTTP request processing: path resolution, conditional
//! cache evaluation and static file responses.

pub mod resolver;
pub mod static_files;

use crate::config::AppState;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// hyper service entry point. The body is discarded (GET/HEAD only);
/// everything the handler needs lives in the request head.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();
    Ok(static_files::respond(&state, &parts).await)
}
