/// IPv6 address parsing and serialization for RFC 3986 IP literals,
/// including RFC 6874 zone identifiers (`fe80::1%25eth0`)
use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};
use crate::ipv4::parse_ipv4;
use crate::unicode::percent_encode::{UNRESERVED_SET, normalize_component};
use core::fmt::Write;
use core::net::Ipv6Addr;

/// Parse the inside of an IP literal (without brackets).
/// Returns the address and its zone identifier, if any.
pub fn parse_ipv6(input: &str) -> Result<(Ipv6Addr, Option<String>)> {
    let (address, zone) = match split_zone(input) {
        Some((address, zone)) => (address, Some(parse_zone(zone)?)),
        None => (input, None),
    };

    // Check for embedded IPv4 (e.g., "::127.0.0.1")
    let has_embedded_ipv4 = address
        .rfind(':')
        .is_some_and(|pos| address[pos + 1..].contains('.'));

    let segments = if has_embedded_ipv4 {
        parse_ipv6_with_ipv4(address)?
    } else {
        parse_ipv6_pure(address)?
    };

    Ok((Ipv6Addr::from(segments), zone))
}

/// Split `addr%25zone` (RFC 6874) or the bare `addr%zone` form.
fn split_zone(input: &str) -> Option<(&str, &str)> {
    let pos = memchr::memchr(b'%', input.as_bytes())?;
    let zone = &input[pos + 1..];
    Some((&input[..pos], zone.strip_prefix("25").unwrap_or(zone)))
}

/// `ZoneID = 1*( unreserved / pct-encoded )`
fn parse_zone(zone: &str) -> Result<String> {
    if zone.is_empty() {
        return Err(ParseError::InvalidZoneIdentifier);
    }
    Ok(normalize_component(zone, UNRESERVED_SET))
}

/// Parse pure IPv6 address (no embedded IPv4).
fn parse_ipv6_pure(input: &str) -> Result<[u16; 8]> {
    let mut segments = [0u16; 8];

    let Some(double_colon_pos) = input.find("::") else {
        // No :: compression - must have exactly 8 segments
        let parsed = parse_segments(input)?;
        if parsed.len() != 8 {
            return Err(ParseError::InvalidIpv6);
        }
        segments.copy_from_slice(&parsed);
        return Ok(segments);
    };

    let before = parse_segments(&input[..double_colon_pos])?;
    let after = parse_segments(&input[double_colon_pos + 2..])?;
    fill_compressed(&mut segments, &before, &after, 8)?;
    Ok(segments)
}

/// Parse IPv6 with embedded IPv4 (e.g., "`::ffff:192.168.1.1`").
fn parse_ipv6_with_ipv4(input: &str) -> Result<[u16; 8]> {
    let last_colon = input.rfind(':').ok_or(ParseError::InvalidIpv6)?;
    // Keep the colon so a "::" right before the IPv4 part is still visible
    let head = &input[..=last_colon];
    let [a, b, c, d] = parse_ipv4(&input[last_colon + 1..])
        .map_err(|_| ParseError::InvalidIpv6)?
        .octets();

    let mut segments = [0u16; 8];
    segments[6] = u16::from_be_bytes([a, b]);
    segments[7] = u16::from_be_bytes([c, d]);

    if let Some(double_colon_pos) = head.find("::") {
        let before = parse_segments(&head[..double_colon_pos])?;
        let after = match head[double_colon_pos + 2..].strip_suffix(':') {
            Some("") => return Err(ParseError::InvalidIpv6),
            Some(tail) => parse_segments(tail)?,
            None => Vec::new(),
        };
        fill_compressed(&mut segments, &before, &after, 6)?;
    } else {
        // No :: compression - must have exactly 6 segments
        let parsed = parse_segments(head.strip_suffix(':').unwrap_or(head))?;
        if parsed.len() != 6 {
            return Err(ParseError::InvalidIpv6);
        }
        segments[..6].copy_from_slice(&parsed);
    }

    Ok(segments)
}

/// Place the segments around a `::` into the first `width` slots.
fn fill_compressed(segments: &mut [u16; 8], before: &[u16], after: &[u16], width: usize) -> Result<()> {
    let total = before.len() + after.len();
    if total >= width {
        return Err(ParseError::InvalidIpv6);
    }

    segments[..before.len()].copy_from_slice(before);
    let after_start = before.len() + (width - total);
    segments[after_start..width].copy_from_slice(after);
    Ok(())
}

/// Parse a single hex segment (0-ffff).
fn parse_hex_segment(s: &str) -> Result<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidIpv6);
    }
    u16::from_str_radix(s, 16).map_err(|_| ParseError::InvalidIpv6)
}

/// Parse colon-separated hex segments from a string.
fn parse_segments(s: &str) -> Result<Vec<u16>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(':').map(parse_hex_segment).collect()
}

/// Serialize an IPv6 address in the RFC 5952 text form, without brackets.
pub fn serialize_ipv6(addr: &Ipv6Addr) -> String {
    let segments = addr.segments();
    let (compress_start, compress_len) = find_longest_zero_sequence(&segments);

    let mut result = String::with_capacity(39);

    // Only compress sequences of 2+ zeros
    let compress_range = compress_start
        .filter(|_| compress_len > 1)
        .map(|start| start..start + compress_len);

    let mut i = 0;
    while i < 8 {
        if compress_range.as_ref().is_some_and(|range| range.start == i) {
            result.push_str("::");
            i += compress_len;
            continue;
        }

        if i > 0 && !result.ends_with("::") {
            result.push(':');
        }

        let _ = write!(&mut result, "{:x}", segments[i]);
        i += 1;
    }

    result
}

/// Find the longest sequence of consecutive zeros in IPv6 segments.
fn find_longest_zero_sequence(segments: &[u16; 8]) -> (Option<usize>, usize) {
    let mut best_start: Option<usize> = None;
    let mut best_len = 0;
    let mut current_start: Option<usize> = None;
    let mut current_len = 0;

    for (i, &segment) in segments.iter().enumerate() {
        if segment == 0 {
            if current_start.is_none() {
                current_start = Some(i);
                current_len = 1;
            } else {
                current_len += 1;
            }
            if current_len > best_len {
                best_start = current_start;
                best_len = current_len;
            }
        } else {
            current_start = None;
            current_len = 0;
        }
    }

    (best_start, best_len)
}
