use crate::character_sets::is_unreserved;
use crate::compat::String;
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode_byte, utf8_percent_encode};

// Encode sets follow the RFC 3986 grammar: each set is the complement of the
// characters a component may carry verbatim. "%" stays in every set so a
// stray percent sign is always escaped; valid triplets never reach the encoder.

/// Everything except `unreserved`
pub const UNRESERVED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Registered name: `unreserved / sub-delims`
pub const REG_NAME_SET: &AsciiSet = &UNRESERVED_SET
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Username: same as a registered name, ":" would start the password
pub const USERNAME_SET: &AsciiSet = REG_NAME_SET;

/// Password: `unreserved / sub-delims / ":"`
pub const PASSWORD_SET: &AsciiSet = &REG_NAME_SET.remove(b':');

/// Path segment: `pchar`
pub const SEGMENT_SET: &AsciiSet = &REG_NAME_SET.remove(b':').remove(b'@');

/// Query and fragment: `pchar / "/" / "?"`
pub const QUERY_SET: &AsciiSet = &SEGMENT_SET.remove(b'/').remove(b'?');

/// Fragment percent-encode set
pub const FRAGMENT_SET: &AsciiSet = QUERY_SET;

/// Query pair key: "&" and "=" are pair delimiters
pub const QUERY_KEY_SET: &AsciiSet = &QUERY_SET.add(b'&').add(b'=');

/// Query pair value: "&" is a pair delimiter
pub const QUERY_VALUE_SET: &AsciiSet = &QUERY_SET.add(b'&');

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Decode the `%XX` triplet starting at `pos`, if it is one
fn decode_triplet(bytes: &[u8], pos: usize) -> Option<u8> {
    let hi = char::from(*bytes.get(pos + 1)?).to_digit(16)?;
    let lo = char::from(*bytes.get(pos + 2)?).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

/// Bring component text into its canonical encoded form.
///
/// Bytes in `encode_set` are percent-encoded, valid triplets are kept with
/// upper-case hex digits, and triplets standing for an unreserved character
/// are decoded (RFC 3986 §6.2.2).
pub fn normalize_component(input: &str, encode_set: &'static AsciiSet) -> String {
    let bytes = input.as_bytes();
    let mut result = String::with_capacity(input.len());
    let mut start = 0;

    for pos in memchr::memchr_iter(b'%', bytes) {
        let Some(byte) = decode_triplet(bytes, pos) else {
            continue;
        };
        percent_encode_into(&mut result, &input[start..pos], encode_set);
        if is_unreserved(byte) {
            result.push(char::from(byte));
        } else {
            result.push_str(percent_encode_byte(byte));
        }
        start = pos + 3;
    }

    percent_encode_into(&mut result, &input[start..], encode_set);
    result
}

/// Decode percent-encoded string
pub fn percent_decode(input: &str) -> Result<String> {
    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .map(Into::into)
        .map_err(|_| ParseError::InvalidPercentEncoding)
}
