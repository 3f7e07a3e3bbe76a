use crate::components::{Component, Fragment, Host, Path, Port, Query, Scheme, UserInfo};
use crate::compat::String;
use core::fmt::Write;

/// Base trait for URI types
///
/// Read access to every component plus a single way to change one:
/// [`with_component`](UrlBase::with_component). Every edit in
/// [`Modifier`](crate::Modifier) is built on these two capabilities.
pub trait UrlBase: Sized {
    // Getters

    /// Get the scheme, empty for a relative reference
    fn scheme(&self) -> &Scheme;

    /// Get the user information
    fn user_info(&self) -> &UserInfo;

    /// Get the host
    fn host(&self) -> &Host;

    /// Get the explicit port
    fn port(&self) -> Port;

    /// Get the path
    fn path(&self) -> &Path;

    /// Get the query
    fn query(&self) -> &Query;

    /// Get the fragment
    fn fragment(&self) -> &Fragment;

    /// Return a copy with one component replaced; the receiver is untouched.
    #[must_use]
    fn with_component(&self, component: Component) -> Self;

    /// `[userinfo@]host[:port]`, or the empty string when there is no host.
    fn authority(&self) -> String {
        let host = self.host();
        if host.is_empty() {
            return String::new();
        }

        let mut authority = String::new();
        let user_info = self.user_info();
        if !user_info.is_empty() {
            let _ = write!(&mut authority, "{user_info}@");
        }
        let _ = write!(&mut authority, "{host}");
        if let Some(port) = self.port().get() {
            let _ = write!(&mut authority, ":{port}");
        }
        authority
    }

    /// Check if the URI carries a scheme
    fn is_absolute(&self) -> bool {
        !self.scheme().is_empty()
    }
}
