/// IPv4 address parser for the RFC 3986 `IPv4address` rule
///
/// Only the dotted-decimal form is accepted: four `dec-octet`s without
/// leading zeros. Shorthand, octal and hexadecimal notations are registered
/// names in RFC 3986, not addresses.
use crate::compat::{String, format};
use crate::error::{ParseError, Result};
use core::net::Ipv4Addr;

/// Parse a dotted-decimal IPv4 address.
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = input.split('.');

    for octet in &mut octets {
        let part = parts.next().ok_or(ParseError::InvalidIpv4)?;
        *octet = parse_dec_octet(part)?;
    }

    if parts.next().is_some() {
        return Err(ParseError::InvalidIpv4);
    }

    Ok(Ipv4Addr::from(octets))
}

/// `dec-octet = DIGIT / %x31-39 DIGIT / "1" 2DIGIT / "2" %x30-34 DIGIT / "25" %x30-35`
fn parse_dec_octet(part: &str) -> Result<u8> {
    let bytes = part.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(ParseError::InvalidIpv4);
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return Err(ParseError::InvalidIpv4);
    }
    part.parse::<u8>().map_err(|_| ParseError::InvalidIpv4)
}

/// Serialize an IPv4 address to dotted decimal notation
pub fn serialize_ipv4(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{a}.{b}.{c}.{d}")
}
