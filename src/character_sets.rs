/// RFC 3986 character classes
///
/// Every byte maps to a set of class bits; a byte may belong to several
/// classes. Non-ASCII bytes belong to none.
const UNRESERVED: u8 = 0x01;
const SUB_DELIM: u8 = 0x02;
const SCHEME_EXTRA: u8 = 0x04; // "+", "-" and "."

const CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = UNRESERVED;
        table[(i - 32) as usize] = UNRESERVED;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = UNRESERVED;
        i += 1;
    }
    table[b'-' as usize] = UNRESERVED | SCHEME_EXTRA;
    table[b'.' as usize] = UNRESERVED | SCHEME_EXTRA;
    table[b'_' as usize] = UNRESERVED;
    table[b'~' as usize] = UNRESERVED;

    let sub_delims = b"!$&'()*+,;=";
    let mut i = 0;
    while i < sub_delims.len() {
        table[sub_delims[i] as usize] = SUB_DELIM;
        i += 1;
    }
    table[b'+' as usize] |= SCHEME_EXTRA;

    table
};

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub fn is_unreserved(b: u8) -> bool {
    CHAR_TABLE[b as usize] & UNRESERVED != 0
}

/// Characters allowed verbatim in a registered name (besides `%XX`)
pub fn is_reg_name_byte(b: u8) -> bool {
    CHAR_TABLE[b as usize] & (UNRESERVED | SUB_DELIM) != 0
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn is_valid_scheme(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();
    let Some(first) = bytes.first() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && bytes[1..]
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || CHAR_TABLE[b as usize] & SCHEME_EXTRA != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved() {
        assert!(is_unreserved(b'a'));
        assert!(is_unreserved(b'Z'));
        assert!(is_unreserved(b'7'));
        assert!(is_unreserved(b'~'));
        assert!(!is_unreserved(b'%'));
        assert!(!is_unreserved(b'/'));
        assert!(!is_unreserved(0xC3));
    }

    #[test]
    fn test_reg_name_byte() {
        assert!(is_reg_name_byte(b'!'));
        assert!(is_reg_name_byte(b'+'));
        assert!(is_reg_name_byte(b'-'));
        assert!(!is_reg_name_byte(b'@'));
        assert!(!is_reg_name_byte(b':'));
        assert!(!is_reg_name_byte(b'/'));
    }

    #[test]
    fn test_valid_scheme() {
        assert!(is_valid_scheme("http"));
        assert!(is_valid_scheme("svn+ssh"));
        assert!(is_valid_scheme("a.b-c"));
        assert!(!is_valid_scheme(""));
        assert!(!is_valid_scheme("1http"));
        assert!(!is_valid_scheme("ht tp"));
        assert!(!is_valid_scheme("ht_tp"));
    }
}
