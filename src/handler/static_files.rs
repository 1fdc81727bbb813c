//! Static file serving
//!
//! Orchestrates a single request: method gate, path resolution,
//! directory handling (redirect / index probe / listing), conditional
//! cache evaluation and the final file response.

use crate::config::AppState;
use crate::handler::resolver::{self, Resolved};
use crate::http::{self, conditional, listing, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{header, Method, Response};
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Produce the response for one request head.
pub async fn respond(state: &Arc<AppState>, parts: &Parts) -> Response<Full<Bytes>> {
    let method = &parts.method;
    if *method != Method::GET && *method != Method::HEAD {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return http::build_405_response();
    }
    let is_head = *method == Method::HEAD;

    if state.config.logging.access_log {
        logger::log_request(method, &parts.uri);
    }

    match resolver::resolve(&state.root, parts.uri.path()) {
        Resolved::File(path) => serve_file(parts, &path, is_head).await,
        Resolved::Directory(dir) => serve_directory(state, parts, &dir, is_head).await,
        Resolved::NotFound => http::build_404_response(),
    }
}

/// Directory disposition: redirect when the trailing slash is missing,
/// otherwise probe the configured index documents, otherwise list.
async fn serve_directory(
    state: &Arc<AppState>,
    parts: &Parts,
    dir: &Path,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let url_path = parts.uri.path();

    if !url_path.ends_with('/') {
        // Same URL with the slash appended, query string preserved.
        let location = match parts.uri.query() {
            Some(query) => format!("{url_path}/?{query}"),
            None => format!("{url_path}/"),
        };
        return http::build_redirect_response(&location);
    }

    for index in &state.config.server.index_files {
        let candidate = dir.join(index);
        if candidate.is_file() {
            return serve_file(parts, &candidate, is_head).await;
        }
    }

    match listing::directory_listing(dir, url_path).await {
        Ok(page) => http::build_html_response(page, is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list directory '{}': {e}",
                dir.display()
            ));
            http::build_404_response()
        }
    }
}

/// Open, conditionally short-circuit, then stream a regular file.
///
/// The handle is scoped to this function, so it is released on every
/// exit path, including the 304 short-circuit and error returns.
async fn serve_file(parts: &Parts, path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    // Any open failure (missing, permissions, other OS errors) is a
    // uniform 404 to the client.
    let mut file = match File::open(path).await {
        Ok(f) => f,
        Err(_) => return http::build_404_response(),
    };

    // fstat on the open handle; failing here is the unexpected class.
    let meta = match file.metadata().await {
        Ok(m) => m,
        Err(e) => {
            logger::log_error(&format!("Failed to stat '{}': {e}", path.display()));
            return http::build_500_response();
        }
    };
    let mtime = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);

    // Duplicate headers resolve last-value-wins.
    let if_modified_since = parts
        .headers
        .get_all(header::IF_MODIFIED_SINCE)
        .iter()
        .last()
        .and_then(|v| v.to_str().ok());
    let has_if_none_match = parts.headers.contains_key(header::IF_NONE_MATCH);

    // 304 decides before any body bytes are read.
    if conditional::not_modified(mtime, if_modified_since, has_if_none_match) {
        return http::build_304_response();
    }

    let content_type = mime::content_type(path);

    let body = if is_head {
        Bytes::new()
    } else {
        let mut buf = Vec::with_capacity(usize::try_from(meta.len()).unwrap_or(0));
        if let Err(e) = file.read_to_end(&mut buf).await {
            logger::log_error(&format!("Failed to read '{}': {e}", path.display()));
            return http::build_500_response();
        }
        Bytes::from(buf)
    };

    http::build_file_response(&content_type, body, meta.len(), mtime, is_head)
}
