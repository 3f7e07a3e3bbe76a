/// Check for any C0 control (tabs and newlines included) or DEL
pub fn has_control_chars(input: &str) -> bool {
    input.bytes().any(|b| b < 0x20 || b == 0x7f)
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
/// Optimization: Uses SIMD-accelerated memchr for fast '#' search
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from a URL string without its fragment
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Trim leading and trailing C0 controls and spaces.
pub fn trim_c0_and_space(input: &str) -> &str {
    input.trim_matches(|c: char| c <= '\u{20}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_c0_and_space() {
        assert_eq!(trim_c0_and_space("\t\nhello\r\n"), "hello");
        assert_eq!(trim_c0_and_space("hello"), "hello");
        assert_eq!(trim_c0_and_space("\t\n\r"), "");
        assert_eq!(trim_c0_and_space("  hello world  "), "hello world");
    }

    #[test]
    fn test_control_chars() {
        assert!(has_control_chars("hel\tlo"));
        assert!(has_control_chars("a\r\nb"));
        assert!(has_control_chars("a\u{0}b"));
        assert!(has_control_chars("a\u{7f}"));
        assert!(!has_control_chars("a b/é"));
    }

    #[test]
    fn test_prune() {
        assert_eq!(prune_fragment("/a?b#c#d"), ("/a?b", Some("c#d")));
        assert_eq!(prune_fragment("/a"), ("/a", None));
        assert_eq!(prune_query("/a?b?c"), ("/a", Some("b?c")));
        assert_eq!(prune_query("/a?"), ("/a", Some("")));
    }
}
