use super::{Collection, Entry, FilterMode};
use crate::checkers::{is_ip_literal, is_ipv4};
use crate::compat::{String, ToString, Vec, format, vec};
use crate::error::{ParseError, Result};
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::unicode::idna::{domain_to_unicode, label_to_ascii};
use crate::unicode::percent_encode::percent_decode;
use core::net::{Ipv4Addr, Ipv6Addr};

/// Longest registered name accepted, in octets
const MAX_HOST_LEN: usize = 253;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum HostKind {
    RegName,
    Ipv4(Ipv4Addr),
    Ipv6 {
        addr: Ipv6Addr,
        zone: Option<String>,
    },
}

/// The host component.
///
/// A registered name is kept as its ASCII labels, left to right; a trailing
/// empty label stands for a trailing dot. An IP host exposes its literal
/// (with brackets for IPv6) as its single label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host {
    labels: Vec<String>,
    kind: HostKind,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            kind: HostKind::RegName,
        }
    }
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a host: an IP literal, an IPv4 address, or a registered name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidHost`] for malformed labels,
    /// [`ParseError::InvalidIpv6`] or [`ParseError::InvalidZoneIdentifier`]
    /// for malformed IP literals, and [`ParseError::IdnaError`] when IDNA
    /// processing rejects a label.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::new());
        }
        if is_ip_literal(input) {
            let (addr, zone) = parse_ipv6(&input[1..input.len() - 1])?;
            return Ok(Self::from_ipv6(addr, zone));
        }
        if input.starts_with('[') || input.ends_with(']') {
            return Err(ParseError::InvalidIpv6);
        }
        if is_ipv4(input) {
            return Ok(Self::from_ipv4(parse_ipv4(input)?));
        }
        Self::from_labels(input.split('.'))
    }

    /// Build a registered name from labels, left to right.
    ///
    /// A single label written as an IP address builds an IP host. A trailing
    /// empty label marks a fully qualified name.
    ///
    /// # Errors
    ///
    /// Same as [`Host::parse`].
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = labels.into_iter().collect();
        if let [single] = raw.as_slice() {
            let single = single.as_ref();
            if is_ip_literal(single) || is_ipv4(single) {
                return Self::parse(single);
            }
        }

        let last = raw.len().saturating_sub(1);
        let mut labels = Vec::with_capacity(raw.len());
        for (offset, label) in raw.iter().enumerate() {
            let label = label.as_ref();
            if label.is_empty() && offset == last && offset > 0 {
                labels.push(String::new());
                continue;
            }
            labels.push(normalize_label(label)?);
        }

        let host = Self {
            labels,
            kind: HostKind::RegName,
        };
        let name = host.to_string();
        if name.trim_end_matches('.').len() > MAX_HOST_LEN {
            return Err(ParseError::InvalidHost);
        }
        if is_ipv4(&name) {
            return Ok(Self::from_ipv4(parse_ipv4(&name)?));
        }
        Ok(host)
    }

    pub fn from_ipv4(addr: Ipv4Addr) -> Self {
        Self {
            labels: vec![serialize_ipv4(addr)],
            kind: HostKind::Ipv4(addr),
        }
    }

    pub fn from_ipv6(addr: Ipv6Addr, zone: Option<String>) -> Self {
        let literal = match &zone {
            Some(zone) => format!("[{}%25{zone}]", serialize_ipv6(&addr)),
            None => format!("[{}]", serialize_ipv6(&addr)),
        };
        Self {
            labels: vec![literal],
            kind: HostKind::Ipv6 { addr, zone },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_ip(&self) -> bool {
        !matches!(self.kind, HostKind::RegName)
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self.kind, HostKind::Ipv4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self.kind, HostKind::Ipv6 { .. })
    }

    /// Returns `true` for a registered name written with a trailing dot.
    pub fn is_absolute(&self) -> bool {
        !self.is_ip() && self.labels.len() > 1 && self.labels.last().is_some_and(String::is_empty)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.kind {
            HostKind::Ipv4(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn ipv6(&self) -> Option<Ipv6Addr> {
        match self.kind {
            HostKind::Ipv6 { addr, .. } => Some(addr),
            _ => None,
        }
    }

    pub fn zone_identifier(&self) -> Option<&str> {
        match &self.kind {
            HostKind::Ipv6 { zone, .. } => zone.as_deref(),
            _ => None,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// The host with IDNA A-labels turned back into Unicode.
    pub fn to_unicode(&self) -> String {
        match self.kind {
            HostKind::RegName => domain_to_unicode(&self.to_string()),
            _ => self.to_string(),
        }
    }

    /// Drop the zone identifier of an IPv6 host; any other host is returned as is.
    #[must_use]
    pub fn without_zone_identifier(&self) -> Self {
        match self.kind {
            HostKind::Ipv6 { addr, zone: Some(_) } => Self::from_ipv6(addr, None),
            _ => self.clone(),
        }
    }

    /// Append labels after the existing ones.
    ///
    /// # Errors
    ///
    /// Fails when `host` is not a valid host, or when the combined labels do
    /// not form a registered name (e.g. appending to an IP address).
    pub fn append(&self, host: &str) -> Result<Self> {
        let other = Self::parse(host)?;
        if self.is_empty() {
            return Ok(other);
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        let mut labels = self.labels.clone();
        if self.is_absolute() {
            labels.pop();
        }
        labels.extend(other.labels);
        Self::from_labels(labels)
    }

    /// Prepend labels before the existing ones.
    ///
    /// # Errors
    ///
    /// Same as [`Host::append`].
    pub fn prepend(&self, host: &str) -> Result<Self> {
        let other = Self::parse(host)?;
        if self.is_empty() {
            return Ok(other);
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        let mut labels = other.labels;
        if other.kind == HostKind::RegName && labels.last().is_some_and(String::is_empty) {
            labels.pop();
        }
        labels.extend_from_slice(&self.labels);
        Self::from_labels(labels)
    }

    /// Replace the label at `offset` with one or more labels.
    ///
    /// Out-of-range offsets return the host unchanged; an empty `label`
    /// removes the label at `offset`.
    ///
    /// # Errors
    ///
    /// Fails when `label` is not a valid host or when the result is not a
    /// valid host.
    pub fn replace(&self, offset: usize, label: &str) -> Result<Self> {
        if offset >= self.labels.len() {
            return Ok(self.clone());
        }
        let replacement = Self::parse(label)?;
        let mut labels = self.labels.clone();
        labels.splice(offset..=offset, replacement.labels);
        Self::from_labels(labels)
    }

    /// Keep the labels for which `predicate` holds.
    #[must_use]
    pub fn filter<F>(&self, mode: FilterMode, mut predicate: F) -> Self
    where
        F: FnMut(Entry<usize, &str>) -> bool,
    {
        self.filter_by(|offset, label| predicate(Entry::new(mode, offset, label.as_str())))
    }
}

/// Percent-decode a label and bring it to ASCII.
fn normalize_label(label: &str) -> Result<String> {
    if label.contains('%') {
        let decoded = percent_decode(label).map_err(|_| ParseError::InvalidHost)?;
        return label_to_ascii(&decoded);
    }
    label_to_ascii(label)
}

impl Collection for Host {
    type Item = String;

    fn items(&self) -> &[String] {
        &self.labels
    }

    /// Rebuild from a subset or reordering of this host's labels.
    fn with_items(&self, items: Vec<String>) -> Self {
        if items == self.labels {
            return self.clone();
        }
        // A trailing dot only survives at the end of a non-empty name
        let last = items.len().saturating_sub(1);
        let mut labels: Vec<String> = items
            .into_iter()
            .enumerate()
            .filter(|(offset, label)| !label.is_empty() || *offset == last)
            .map(|(_, label)| label)
            .collect();
        if labels.iter().all(String::is_empty) {
            labels.clear();
        }
        if let [single] = labels.as_slice() {
            if let Ok(host) = Self::parse(single) {
                return host;
            }
        }
        // Labels left spelling a dotted-decimal address make an IPv4 host
        let name = labels.join(".");
        if let Ok(addr) = parse_ipv4(&name) {
            return Self::from_ipv4(addr);
        }
        Self {
            labels,
            kind: HostKind::RegName,
        }
    }
}

impl core::fmt::Display for Host {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.labels.join("."))
    }
}

impl core::str::FromStr for Host {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
