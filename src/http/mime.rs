//! MIME type detection module
//!
//! Maps file extensions to Content-Type strings. Text-like types get a
//! UTF-8 charset qualifier so browsers render them correctly.

use std::path::Path;

/// Compute the Content-Type for a file path.
///
/// Pure extension lookup; always returns some type string, falling back
/// to `application/octet-stream` when nothing matches.
///
/// # Examples
/// ```
/// use servedir::http::mime::content_type;
/// use std::path::Path;
/// assert_eq!(content_type(Path::new("style.css")), "text/css; charset=utf-8");
/// assert_eq!(content_type(Path::new("logo.png")), "image/png");
/// assert_eq!(content_type(Path::new("data.bin")), "application/octet-stream");
/// ```
pub fn content_type(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let base = base_type(ext.as_deref());

    if wants_charset(base) {
        format!("{base}; charset=utf-8")
    } else {
        base.to_string()
    }
}

/// Text-like types are annotated with a UTF-8 charset.
fn wants_charset(base: &str) -> bool {
    base.starts_with("text/") || base == "application/javascript" || base == "application/json"
}

/// Base MIME type from the file extension (already lowercased).
fn base_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio/Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",

        // Default
        _ => "application/octet-stream",
    }
}
