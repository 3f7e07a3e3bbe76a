use crate::compat::String;
use crate::unicode::percent_encode::{FRAGMENT_SET, normalize_component};

/// The fragment component, stored percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Build a fragment from the text after `#`, percent-encoding as needed.
    pub fn new(fragment: &str) -> Self {
        Self(normalize_component(fragment, FRAGMENT_SET))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for Fragment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fragment {
    fn from(fragment: &str) -> Self {
        Self::new(fragment)
    }
}
