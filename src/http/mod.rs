//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the request handler:
//! MIME detection, conditional GET evaluation, response builders and
//! directory listing rendering.

pub mod conditional;
pub mod listing;
pub mod mime;
pub mod response;

// Re-export commonly used functions
pub use conditional::{http_date, not_modified};
pub use mime::content_type;
pub use response::{
    build_file_response, build_html_response, build_404_response, build_405_response,
    build_500_response, build_redirect_response, build_304_response,
};
