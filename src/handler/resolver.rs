//! URL path resolution
//!
//! Maps a request path onto the filesystem under the document root and
//! classifies the target. Confinement under the root is enforced twice:
//! lexically while joining segments, then on the canonicalized result.

use crate::logger;
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// Disposition of a resolved request path.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A regular file ready to be opened.
    File(PathBuf),
    /// An existing directory; the caller decides between redirect,
    /// index document and listing.
    Directory(PathBuf),
    /// Nothing servable: missing target, undecodable path, or an
    /// attempt to escape the root.
    NotFound,
}

/// Resolve a URL path against the canonicalized document root.
///
/// `"/"` is substituted with `"/index.html"` before any other
/// processing, so a root without an index document is a plain 404.
pub fn resolve(root: &Path, url_path: &str) -> Resolved {
    let url_path = if url_path == "/" { "/index.html" } else { url_path };

    let decoded = match percent_decode_str(url_path).decode_utf8() {
        Ok(d) => d,
        Err(_) => return Resolved::NotFound,
    };

    // Lexical normalization: "." segments drop, ".." pops and clamps
    // at the root, so the joined path can never escape upward.
    let mut segments: Vec<&str> = Vec::new();
    for part in decoded.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut path = root.to_path_buf();
    for segment in &segments {
        path.push(segment);
    }

    // Canonicalization is the authoritative confinement check; it also
    // tells us whether the target exists at all.
    let Ok(canonical) = path.canonicalize() else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path escapes document root, rejected: {url_path} -> {}",
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    if canonical.is_dir() {
        Resolved::Directory(canonical)
    } else if canonical.is_file() {
        Resolved::File(canonical)
    } else {
        Resolved::NotFound
    }
}
