//! Conditional GET evaluation
//!
//! Decides whether a request can be answered with 304 Not Modified
//! based on the If-Modified-Since header and the file's mtime.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use std::time::SystemTime;

// Obsolete HTTP-date formats (RFC 7231 section 7.1.1.1). Neither
// carries a usable offset; both are interpreted as UTC.
const RFC850_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S GMT";
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Parse an HTTP-date header value.
///
/// Tries the preferred IMF-fixdate (RFC 1123 / 2822) form first, then
/// the two legacy forms. Returns `None` on any malformed input; callers
/// treat that as "header absent", never as an error.
pub fn parse_http_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, RFC850_FORMAT) {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, ASCTIME_FORMAT) {
        return Some(naive.and_utc().fixed_offset());
    }

    None
}

/// Format a filesystem timestamp as an HTTP-date for the Last-Modified
/// header, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Decide whether a 304 short-circuit applies.
///
/// Only evaluated when If-Modified-Since is present and If-None-Match
/// is absent (entity-tag validation takes precedence and is not
/// implemented, so its mere presence disables the timestamp check).
///
/// The comparison is only performed when the parsed date is in UTC;
/// a non-UTC offset skips the 304 path entirely. The file mtime is
/// truncated to whole seconds to match the header's resolution.
pub fn not_modified(
    mtime: SystemTime,
    if_modified_since: Option<&str>,
    has_if_none_match: bool,
) -> bool {
    if has_if_none_match {
        return false;
    }
    let Some(raw) = if_modified_since else {
        return false;
    };
    let Some(since) = parse_http_date(raw) else {
        return false;
    };
    if since.offset().local_minus_utc() != 0 {
        return false;
    }
    let Ok(elapsed) = mtime.duration_since(SystemTime::UNIX_EPOCH) else {
        // mtime before the epoch, nothing sensible to compare
        return false;
    };
    let mtime_secs = i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX);

    mtime_secs <= since.timestamp()
}
