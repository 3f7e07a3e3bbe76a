use crate::character_sets::is_reg_name_byte;
use crate::compat::String;
use crate::error::{ParseError, Result};

/// Longest DNS label, in octets
const MAX_LABEL_LEN: usize = 63;

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Bring a single host label to its canonical ASCII form.
///
/// Plain ASCII labels are lower-cased and must only hold registered-name
/// characters. Unicode labels and Punycode labels go through IDNA `ToASCII`.
/// The label is already percent-decoded.
pub fn label_to_ascii(label: &str) -> Result<String> {
    if label.is_empty() {
        return Err(ParseError::InvalidHost);
    }

    let ascii = if label.is_ascii() && !has_punycode(label) {
        let mut result = String::with_capacity(label.len());
        for b in label.bytes() {
            if !is_reg_name_byte(b) || b == b'.' {
                return Err(ParseError::InvalidHost);
            }
            result.push(char::from(b.to_ascii_lowercase()));
        }
        result
    } else {
        idna::domain_to_ascii(label).map_err(|_| ParseError::IdnaError)?
    };

    // IDNA mapping may turn full-width dots into label separators
    if ascii.is_empty() || ascii.contains('.') || ascii.len() > MAX_LABEL_LEN {
        return Err(ParseError::InvalidHost);
    }
    Ok(ascii)
}

/// Convert an ASCII domain to its Unicode presentation form
pub fn domain_to_unicode(domain: &str) -> String {
    if !has_punycode(domain) {
        return domain.into();
    }
    let (unicode, _errors) = idna::domain_to_unicode(domain);
    unicode
}
