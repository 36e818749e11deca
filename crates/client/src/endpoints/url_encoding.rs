//! URL encoding utilities for constructing safe API paths.
//!
//! Alert names and search ids are interpolated into REST paths. Without
//! percent-encoding, a `/` in a name would address a nested resource, a space
//! would be removed by service URL resolution, and `?` or `#` would cut the path short.
//!
//! # Example
//!
//! ```
//! use splunk_sdk::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("disk full/root");
//! assert_eq!(encoded, "disk%20full%2Froot");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a path segment: RFC 3986 delimiters and
/// unsafe characters, plus `%` so existing escapes are not decoded twice.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a single URL path segment.
///
/// ```
/// use splunk_sdk::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("simple"), "simple");
/// assert_eq!(encode_path_segment("CPU > 90%"), "CPU%20%3E%2090%25");
/// assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
