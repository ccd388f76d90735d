//! Percent-encoding for the generated query URLs.
//!
//! Only the text after the last `/` of an assembled URL is encoded; the
//! scheme, host, and path segments before it pass through verbatim. The
//! encoder is an allowlist: alphanumerics, the unreserved marks, and the
//! characters the query syntax itself relies on stay literal, everything
//! else (including non-ASCII bytes, as UTF-8) is percent-encoded.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

/// Characters that stay literal in the trailing URL segment.
///
/// On top of the unreserved marks, the query syntax needs `\` (the escape
/// inside filter bounds), `/`, `@` (field names), `:` (field separator and
/// the escaped-bound prefix), `=`, `&`, `?` (endpoint query string), and
/// the `<`/`>` range operators. Notably `+` is not safe: the clause prefix
/// `+@timestamp` always reaches the wire as `%2B@timestamp`, and the space
/// joining two clauses becomes `%20`.
pub const TRAILING_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\\')
    .remove(b'/')
    .remove(b'@')
    .remove(b':')
    .remove(b'=')
    .remove(b'&')
    .remove(b'?')
    .remove(b'<')
    .remove(b'>');

/// Percent-encode everything after the last `/` of `url`, leaving the rest
/// untouched.
pub fn encode_trailing_segment(url: &str) -> String {
    match url.rsplit_once('/') {
        Some((head, tail)) => {
            format!(
                "{head}/{}",
                percent_encode(tail.as_bytes(), TRAILING_SEGMENT_ENCODE_SET)
            )
        }
        None => percent_encode(url.as_bytes(), TRAILING_SEGMENT_ENCODE_SET).to_string(),
    }
}
