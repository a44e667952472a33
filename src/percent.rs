//! Percent-encoding and -decoding of URL components.

/// Returns true for characters that are emitted unescaped by the encoder.
#[must_use]
pub const fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '$' | '-' | '_' | '.' | '~')
}

/// Returns true for characters accepted anywhere in a location URL.
///
/// This is a broader alphabet than [`is_safe_char`]: it additionally admits
/// the reserved characters that may appear verbatim in a well-formed URL.
/// It governs up-front acceptance of a whole URL, not encoder output.
#[must_use]
pub const fn is_valid_url_char(c: char) -> bool {
    is_safe_char(c)
        || matches!(
            c,
            '+' | '!' | '*' | '\'' | '(' | ')' | ',' | ';' | '/' | '?' | ':' | '@' | '=' | '&' | '%'
        )
}

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Appends the percent-encoded form of `src` to `out`.
///
/// Safe characters pass through unchanged; every other byte becomes a
/// three-character uppercase-hex escape. Multi-byte UTF-8 characters are
/// escaped one byte at a time.
pub fn url_encode_into(out: &mut String, src: &str) {
    for b in src.bytes() {
        if b.is_ascii() && is_safe_char(b as char) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX_UPPER[usize::from(b >> 4)] as char);
            out.push(HEX_UPPER[usize::from(b & 0x0f)] as char);
        }
    }
}

/// Returns the percent-encoded form of `src`.
#[must_use]
pub fn url_encode(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    url_encode_into(&mut out, src);
    out
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes `src`, feeding each output byte to `apply`.
///
/// Escapes must be `%` followed by two uppercase-hex digits. The first
/// malformed or truncated escape is reported to `on_decode_error` with a
/// diagnostic that quotes the offending escape and the full source string,
/// and decoding stops at that point; the remainder of the input is dropped
/// rather than resynchronized. Callers that pass a no-op sink get the
/// silently-truncated result.
pub fn for_each_url_decoded(
    src: &str,
    mut apply: impl FnMut(u8),
    mut on_decode_error: impl FnMut(String),
) {
    let bytes = src.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b != b'%' {
            apply(b);
            i += 1;
            continue;
        }

        if i + 3 <= bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                apply((hi << 4) | lo);
                i += 3;
                continue;
            }

            let escape = String::from_utf8_lossy(&bytes[i..i + 3]);
            on_decode_error(format!("Invalid URL-encoding \"{escape}\" in URL \"{src}\""));
        } else {
            on_decode_error(format!("URL too short for last code: \"{src}\""));
        }

        break;
    }
}

/// Strictly decodes `src` into a `String`.
///
/// # Errors
///
/// Returns the diagnostic message of the first malformed escape, or a
/// diagnostic when the decoded bytes are not valid UTF-8.
pub fn url_decode(src: &str) -> Result<String, String> {
    let mut out = Vec::with_capacity(src.len());
    let mut error = None;

    for_each_url_decoded(src, |b| out.push(b), |e| error = Some(e));

    if let Some(e) = error {
        return Err(e);
    }

    String::from_utf8(out).map_err(|_| format!("Decoded URL is not valid UTF-8: \"{src}\""))
}
