use crate::ipv4::parse_ipv4;

/// Check if a string is an RFC 3986 `IPv4address`.
/// Fast rejection on the last byte before running the full parser.
pub fn is_ipv4(input: &str) -> bool {
    input.as_bytes().last().is_some_and(u8::is_ascii_digit) && parse_ipv4(input).is_ok()
}

/// Check if a host string is written as an IP literal (`[...]`).
pub fn is_ip_literal(input: &str) -> bool {
    input.starts_with('[') && input.ends_with(']') && input.len() >= 2
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is outside `1..=65535`.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok().filter(|&port| port != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ipv4() {
        assert!(is_ipv4("192.168.1.1"));
        assert!(is_ipv4("127.0.0.1"));
        assert!(is_ipv4("255.255.255.255"));

        assert!(!is_ipv4(""));
        assert!(!is_ipv4("."));
        assert!(!is_ipv4("192.168.1.1."));
        assert!(!is_ipv4("example.com"));
        assert!(!is_ipv4("0xC0A80101"));
        assert!(!is_ipv4("1.2.3"));
    }

    #[test]
    fn test_is_ip_literal() {
        assert!(is_ip_literal("[::1]"));
        assert!(!is_ip_literal("::1"));
        assert!(!is_ip_literal("["));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("80"), Some(80));
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("65536"), None); // Out of range
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("abc"), None);
        assert_eq!(parse_port("+80"), None);
        assert_eq!(parse_port(""), None);
    }
}
