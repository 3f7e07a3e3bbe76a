/// Errors raised while parsing a URI or building one of its components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input cannot be split into URI components
    InvalidUrl,
    /// Invalid scheme format
    InvalidScheme,
    /// Invalid user information
    InvalidUserInfo,
    /// Invalid host format or host label
    InvalidHost,
    /// Invalid port number
    InvalidPort,
    /// Invalid IPv4 address
    InvalidIpv4,
    /// Invalid IPv6 address
    InvalidIpv6,
    /// Invalid IPv6 zone identifier
    InvalidZoneIdentifier,
    /// Invalid percent encoding
    InvalidPercentEncoding,
    /// IDNA processing error
    IdnaError,
    /// Invalid path extension
    InvalidExtension,
}

impl ParseError {
    /// Returns `true` when the error comes from a single component's grammar
    /// rather than from splitting a whole URI string.
    pub fn is_component_error(&self) -> bool {
        !matches!(self, Self::InvalidUrl)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidUrl => "Invalid URL",
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidUserInfo => "Invalid user information",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv4 => "Invalid IPv4 address",
            Self::InvalidIpv6 => "Invalid IPv6 address",
            Self::InvalidZoneIdentifier => "Invalid IPv6 zone identifier",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::IdnaError => "IDNA processing error",
            Self::InvalidExtension => "Invalid path extension",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for parsing and component construction
pub type Result<T> = core::result::Result<T, ParseError>;
