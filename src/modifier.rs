use crate::components::{
    Collection, Component, Entry, FilterMode, Fragment, Host, Path, Port, Query, Scheme, SortMode,
    UserInfo,
};
use crate::error::Result;
use crate::parser::Parseable;
use crate::url_base::UrlBase;

/// Copy-on-write edits for URI values.
///
/// Every method returns a new value and leaves the receiver untouched. Each
/// edit computes a new component from the current one and hands it to
/// [`UrlBase::with_component`].
///
/// Implemented for every [`UrlBase`]:
///
/// ```
/// use uri_edit::{Modifier, Url};
///
/// let url = Url::parse("http://example.com/a/b?x=1")?;
/// let edited = url.append_path("c").merge_query("y=2");
/// assert_eq!(edited.to_string(), "http://example.com/a/b/c?x=1&y=2");
/// assert_eq!(url.to_string(), "http://example.com/a/b?x=1");
/// # Ok::<_, uri_edit::ParseError>(())
/// ```
pub trait Modifier: UrlBase {
    // Path

    /// Append segments to the path
    #[must_use]
    fn append_path(&self, path: &str) -> Self {
        self.with_component(Component::Path(self.path().append(path)))
    }

    /// Prepend segments to the path
    #[must_use]
    fn prepend_path(&self, path: &str) -> Self {
        self.with_component(Component::Path(self.path().prepend(path)))
    }

    /// Replace the segment at `offset`; out-of-range offsets change nothing
    #[must_use]
    fn replace_segment(&self, offset: usize, segment: &str) -> Self {
        self.with_component(Component::Path(self.path().replace(offset, segment)))
    }

    #[must_use]
    fn without_segments(&self, offsets: &[usize]) -> Self {
        self.with_component(Component::Path(self.path().without(offsets)))
    }

    /// Remove `.` and `..` segments (RFC 3986 §5.2.4)
    #[must_use]
    fn without_dot_segments(&self) -> Self {
        self.with_component(Component::Path(self.path().without_dot_segments()))
    }

    #[must_use]
    fn without_empty_segments(&self) -> Self {
        self.with_component(Component::Path(self.path().without_empty_segments()))
    }

    #[must_use]
    fn filter_path<F>(&self, mode: FilterMode, predicate: F) -> Self
    where
        F: FnMut(Entry<usize, &str>) -> bool,
    {
        self.with_component(Component::Path(self.path().filter(mode, predicate)))
    }

    /// Change the extension of the last segment
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidExtension`](crate::ParseError::InvalidExtension)
    /// when `extension` starts with `.` or contains `/`.
    fn with_extension(&self, extension: &str) -> Result<Self> {
        let path = self.path().with_extension(extension)?;
        Ok(self.with_component(Component::Path(path)))
    }

    // Host

    /// Append labels to the host
    ///
    /// # Errors
    ///
    /// Fails when the result is not a valid host.
    fn append_host(&self, host: &str) -> Result<Self> {
        let host = self.host().append(host)?;
        Ok(self.with_component(Component::Host(host)))
    }

    /// Prepend labels to the host
    ///
    /// # Errors
    ///
    /// Fails when the result is not a valid host.
    fn prepend_host(&self, host: &str) -> Result<Self> {
        let host = self.host().prepend(host)?;
        Ok(self.with_component(Component::Host(host)))
    }

    /// Replace the label at `offset`; out-of-range offsets change nothing
    ///
    /// # Errors
    ///
    /// Fails when `label` is not a valid host label.
    fn replace_label(&self, offset: usize, label: &str) -> Result<Self> {
        let host = self.host().replace(offset, label)?;
        Ok(self.with_component(Component::Host(host)))
    }

    #[must_use]
    fn without_labels(&self, offsets: &[usize]) -> Self {
        self.with_component(Component::Host(self.host().without(offsets)))
    }

    #[must_use]
    fn filter_host<F>(&self, mode: FilterMode, predicate: F) -> Self
    where
        F: FnMut(Entry<usize, &str>) -> bool,
    {
        self.with_component(Component::Host(self.host().filter(mode, predicate)))
    }

    #[must_use]
    fn without_zone_identifier(&self) -> Self {
        self.with_component(Component::Host(self.host().without_zone_identifier()))
    }

    // Query

    /// Merge pairs into the query, replacing existing keys
    #[must_use]
    fn merge_query(&self, query: &str) -> Self {
        self.with_component(Component::Query(self.query().merge(query)))
    }

    #[must_use]
    fn append_query(&self, query: &str) -> Self {
        self.with_component(Component::Query(self.query().append(query)))
    }

    /// Replace the pair at `offset`; out-of-range offsets change nothing
    #[must_use]
    fn replace_query_offset(&self, offset: usize, pairs: &str) -> Self {
        self.with_component(Component::Query(self.query().replace(offset, pairs)))
    }

    #[must_use]
    fn without_query_offsets(&self, offsets: &[usize]) -> Self {
        self.with_component(Component::Query(self.query().without(offsets)))
    }

    #[must_use]
    fn filter_query<F>(&self, mode: FilterMode, predicate: F) -> Self
    where
        F: FnMut(Entry<&str, Option<&str>>) -> bool,
    {
        self.with_component(Component::Query(self.query().filter(mode, predicate)))
    }

    #[must_use]
    fn sort_query_offsets(&self, mode: SortMode) -> Self {
        self.with_component(Component::Query(self.query().sort_offsets(mode)))
    }

    // Whole components

    /// # Errors
    ///
    /// Returns [`ParseError::InvalidScheme`](crate::ParseError::InvalidScheme)
    /// for a malformed scheme.
    fn with_scheme(&self, scheme: &str) -> Result<Self> {
        Ok(self.with_component(Component::Scheme(Scheme::new(scheme)?)))
    }

    #[must_use]
    fn with_user_info(&self, user: &str, pass: Option<&str>) -> Self {
        self.with_component(Component::UserInfo(UserInfo::new(user, pass)))
    }

    /// # Errors
    ///
    /// Fails when `host` is not a valid host.
    fn with_host(&self, host: &str) -> Result<Self> {
        Ok(self.with_component(Component::Host(Host::parse(host)?)))
    }

    /// Set or, with `None`, remove the port
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPort`](crate::ParseError::InvalidPort)
    /// outside `1..=65535`.
    fn with_port(&self, port: Option<u32>) -> Result<Self> {
        let port = match port {
            Some(port) => Port::new(port)?,
            None => Port::default(),
        };
        Ok(self.with_component(Component::Port(port)))
    }

    #[must_use]
    fn with_path(&self, path: &str) -> Self {
        self.with_component(Component::Path(Path::parse(path)))
    }

    #[must_use]
    fn with_query(&self, query: &str) -> Self {
        self.with_component(Component::Query(Query::parse(query)))
    }

    #[must_use]
    fn with_fragment(&self, fragment: &str) -> Self {
        self.with_component(Component::Fragment(Fragment::new(fragment)))
    }

    // Resolution

    /// Resolve `reference` against this value as base (RFC 3986 §5.2)
    #[must_use]
    fn resolve(&self, reference: &Self) -> Self {
        crate::resolver::resolve(self, reference)
    }

    /// Parse `reference`, then resolve it against this value
    ///
    /// # Errors
    ///
    /// Returns the parse error of `reference`.
    fn resolve_str(&self, reference: &str) -> Result<Self>
    where
        Self: Parseable,
    {
        let reference = <Self as Parseable>::parse(reference, None)?;
        Ok(self.resolve(&reference))
    }
}

impl<T: UrlBase> Modifier for T {}
