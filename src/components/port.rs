use crate::checkers::parse_port;
use crate::error::{ParseError, Result};

/// The port component. `None` when the authority carries no port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Port(Option<u16>);

impl Port {
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPort`] outside `1..=65535`.
    pub fn new(port: u32) -> Result<Self> {
        u16::try_from(port)
            .ok()
            .filter(|&port| port != 0)
            .map(|port| Self(Some(port)))
            .ok_or(ParseError::InvalidPort)
    }

    /// Parse the digits after the authority's `:`; an empty string is no port.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPort`] for anything but `1..=65535`.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self(None));
        }
        parse_port(input)
            .map(|port| Self(Some(port)))
            .ok_or(ParseError::InvalidPort)
    }

    pub fn get(self) -> Option<u16> {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Self((port != 0).then_some(port))
    }
}

impl core::fmt::Display for Port {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(port) => write!(f, "{port}"),
            None => Ok(()),
        }
    }
}
