//! Reserved-character encoding applied to a template before scanning.
//!
//! The scanner treats every `{` as structural. An author writes `\{` to get a
//! literal brace, so that sequence is swapped for a token the scanner never
//! looks at, and swapped back once the segment text has been cut out. The
//! marker character `&` starts every token, so it is encoded first.

/// Character that starts every escape token.
pub const MARKER: char = '&';

/// Token standing in for a literal [`MARKER`].
pub const MARKER_TOKEN: &str = "&bsp;";

/// The author-facing escaped opening brace.
pub const ESCAPED_BRACE: &str = r"\{";

/// Token standing in for [`ESCAPED_BRACE`].
pub const BRACE_TOKEN: &str = "&000;";

/// Hide markers and escaped braces from the scanner.
///
/// ```
/// use parmatch::escape::encode;
///
/// assert_eq!(encode(r"a & \{b"), "a &bsp; &000;b");
/// ```
pub fn encode(text: &str) -> String {
    text.replace(MARKER, MARKER_TOKEN)
        .replace(ESCAPED_BRACE, BRACE_TOKEN)
}

/// Exact inverse of [`encode`].
pub fn decode(text: &str) -> String {
    text.replace(BRACE_TOKEN, ESCAPED_BRACE)
        .replace(MARKER_TOKEN, &MARKER.to_string())
}
