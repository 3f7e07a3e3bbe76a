use crate::character_sets::is_valid_scheme;
use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;

/// The scheme component, stored lower-cased. Empty for relative references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scheme(String);

impl Scheme {
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidScheme`] unless `scheme` is empty or
    /// matches `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    pub fn new(scheme: &str) -> Result<Self> {
        if scheme.is_empty() {
            return Ok(Self::default());
        }
        if !is_valid_scheme(scheme) {
            return Err(ParseError::InvalidScheme);
        }
        Ok(Self(scheme.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn scheme_type(&self) -> SchemeType {
        get_scheme_type(&self.0)
    }
}

impl core::fmt::Display for Scheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(Scheme::new("HTTPS").unwrap().as_str(), "https");
        assert_eq!(Scheme::new("svn+ssh").unwrap().scheme_type(), SchemeType::Other);
        assert_eq!(Scheme::new("ws").unwrap().scheme_type(), SchemeType::Ws);
        assert!(Scheme::new("").unwrap().is_empty());
        assert_eq!(Scheme::new("1ab"), Err(ParseError::InvalidScheme));
        assert_eq!(Scheme::new("http:"), Err(ParseError::InvalidScheme));
    }
}
