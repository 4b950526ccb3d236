//! Per-component percent-encoding (RFC 3986 §2.1, §3).

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, percent_encode_byte};

/// URI component a piece of text is destined for; decides which bytes stay literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Component {
    Authority,
    Path,
    Query,
    Fragment,
}

impl Component {
    fn allows(self, b: u8) -> bool {
        if is_unreserved(b) || is_sub_delim(b) || b == b':' || b == b'@' {
            return true;
        }
        match self {
            Component::Authority => b == b'[' || b == b']',
            Component::Path => b == b'/',
            Component::Query | Component::Fragment => b == b'/' || b == b'?',
        }
    }
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Percent-encodes every byte of `raw` that is not legal in `component`.
///
/// Well-formed `%XX` escapes are kept as they are; a `%` that does not start
/// one is encoded as `%25`. Non-ASCII text is encoded byte by byte (UTF-8).
pub(crate) fn quote(raw: &str, component: Component) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    if (0..bytes.len()).all(|i| is_literal(bytes, i, component)) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 8);
    for (i, &b) in bytes.iter().enumerate() {
        if is_literal(bytes, i, component) {
            out.push(b as char);
        } else {
            out.push_str(percent_encode_byte(b));
        }
    }
    Cow::Owned(out)
}

fn is_literal(bytes: &[u8], i: usize, component: Component) -> bool {
    match bytes[i] {
        b'%' => is_escape(bytes, i),
        b => component.allows(b),
    }
}

fn is_escape(bytes: &[u8], i: usize) -> bool {
    matches!(
        bytes.get(i + 1..i + 3),
        Some([h, l]) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()
    )
}

/// Prepares text for WHATWG relative resolution without losing characters.
///
/// The URL parser reads `\` as `/` and deletes tab, LF and CR wherever they
/// appear; those are escaped here. Leading and trailing C0 controls and spaces
/// are trimmed, which the parser would do anyway.
pub(crate) fn escape_for_resolution(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    if !trimmed.contains(is_swallowed_by_url_parser) {
        return Cow::Borrowed(trimmed);
    }

    let mut out = String::with_capacity(trimmed.len() + 8);
    for c in trimmed.chars() {
        if is_swallowed_by_url_parser(c) {
            out.push_str(percent_encode_byte(c as u8));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn is_swallowed_by_url_parser(c: char) -> bool {
    matches!(c, '\\' | '\t' | '\n' | '\r')
}

/// Percent-decodes a raw component; invalid UTF-8 is replaced.
pub(crate) fn decode(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}
