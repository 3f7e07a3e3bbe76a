use crate::compat::String;
use crate::unicode::percent_encode::{PASSWORD_SET, USERNAME_SET, normalize_component};

/// The user information component: a username and an optional password.
///
/// A password without a username cannot be written, so it is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserInfo {
    user: String,
    pass: Option<String>,
}

impl UserInfo {
    /// Build user information from its raw parts, percent-encoding as needed.
    pub fn new(user: &str, pass: Option<&str>) -> Self {
        let user = normalize_component(user, USERNAME_SET);
        if user.is_empty() {
            return Self::default();
        }
        let pass = pass.map(|pass| normalize_component(pass, PASSWORD_SET));
        Self { user, pass }
    }

    /// Parse the `user[:pass]` text found before the `@` of an authority.
    pub fn parse(input: &str) -> Self {
        match input.split_once(':') {
            Some((user, pass)) => Self::new(user, Some(pass)),
            None => Self::new(input, None),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_empty()
    }
}

impl core::fmt::Display for UserInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.user)?;
        if let Some(pass) = &self.pass {
            f.write_str(":")?;
            f.write_str(pass)?;
        }
        Ok(())
    }
}

impl From<&str> for UserInfo {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}
