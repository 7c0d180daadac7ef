//! Percent-escaping for URL path segments.
//!
//! Identifiers on the broker — vhost names in particular — may contain any
//! character, including `/`. Each identifier must therefore occupy exactly
//! one path segment after escaping, or the URL would route to the wrong
//! resource. Callers always pass raw identifiers; escaping is applied here
//! exactly once.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters gets escaped, so `/`,
/// space, `%` and friends can never introduce a segment boundary.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape one raw identifier into a valid, non-empty path segment.
///
/// The default vhost `"/"` becomes `%2F`.
pub fn escape(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Escape each raw segment and join them into a relative path.
pub fn join(segments: &[&str]) -> String {
    segments.iter().map(|s| escape(s)).collect::<Vec<_>>().join("/")
}
