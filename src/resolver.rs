//! Reference resolution (RFC 3986 §5.2).
//!
//! Resolution is total: any two values resolve. A base without a scheme
//! goes through the same steps as an absolute one.

use crate::components::{Collection, Component, Path};
use crate::url_base::UrlBase;
use tracing::trace;

/// Resolve `reference` against `base`.
///
/// The first matching rule wins:
///
/// 1. A reference with a scheme is taken as is.
/// 2. A reference with a host whose authority differs from the base's keeps
///    its own authority, path and query, and takes the base scheme.
/// 3. Otherwise the base is kept and the reference overrides the path (which
///    also replaces the query), else the query; the fragment always comes
///    from the reference.
///
/// Dot segments are removed from the resulting path in every case.
pub fn resolve<U: UrlBase>(base: &U, reference: &U) -> U {
    if reference.is_absolute() {
        trace!("resolving absolute reference");
        let path = reference.path().without_dot_segments();
        return reference.with_component(Component::Path(path));
    }

    if !reference.host().is_empty() && reference.authority() != base.authority() {
        trace!("resolving network-path reference");
        let path = reference.path().without_dot_segments();
        return reference
            .with_component(Component::Scheme(base.scheme().clone()))
            .with_component(Component::Path(path));
    }

    let mut target = base.with_component(Component::Fragment(reference.fragment().clone()));
    let path = if !reference.path().is_empty() {
        trace!(absolute = reference.path().is_absolute(), "resolving path reference");
        target = target.with_component(Component::Query(reference.query().clone()));
        merge_paths(base.path(), reference.path())
    } else if !reference.query().is_empty() {
        trace!("resolving query reference");
        target = target.with_component(Component::Query(reference.query().clone()));
        base.path().clone()
    } else {
        trace!("resolving same-document reference");
        base.path().clone()
    };

    target.with_component(Component::Path(path.without_dot_segments()))
}

/// Merge a relative path onto the directory of `base` (RFC 3986 §5.2.3).
///
/// An absolute `reference` replaces the base path. The merged path is
/// absolute when the base path is empty or absolute.
pub fn merge_paths(base: &Path, reference: &Path) -> Path {
    if reference.is_absolute() {
        return reference.clone();
    }

    let mut segments = base.to_vec();
    segments.pop();
    segments.extend_from_slice(reference.items());
    Path::from_parts(base.is_absolute() || base.is_empty(), segments)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Url;
    use crate::compat::ToString;

    fn resolve_str(base: &str, reference: &str) -> crate::compat::String {
        let base = Url::parse(base).unwrap();
        let reference = Url::parse(reference).unwrap();
        resolve(&base, &reference).to_string()
    }

    #[test]
    fn test_merge_paths() {
        let base = Path::parse("/b/c/d;p");
        assert_eq!(merge_paths(&base, &Path::parse("g")).to_string(), "/b/c/g");
        assert_eq!(merge_paths(&base, &Path::parse("/g")).to_string(), "/g");
        assert_eq!(merge_paths(&Path::new(), &Path::parse("g")).to_string(), "/g");
        assert_eq!(merge_paths(&Path::parse("a/b"), &Path::parse("c")).to_string(), "a/c");
        assert_eq!(merge_paths(&Path::parse("/a/"), &Path::parse("c")).to_string(), "/a/c");
    }

    #[test]
    fn test_resolve_rules() {
        let base = "http://a/b/c/d;p?q";
        assert_eq!(resolve_str(base, "g:h"), "g:h");
        assert_eq!(resolve_str(base, "//g/x/../y"), "http://g/y");
        assert_eq!(resolve_str(base, "g"), "http://a/b/c/g");
        assert_eq!(resolve_str(base, "?y"), "http://a/b/c/d;p?y");
        assert_eq!(resolve_str(base, "#s"), "http://a/b/c/d;p?q#s");
        assert_eq!(resolve_str(base, ""), "http://a/b/c/d;p?q");
    }

    #[test]
    fn test_same_authority_keeps_base_path() {
        // A reference naming the base authority falls through to the merge rules
        assert_eq!(resolve_str("http://a/b/c/d;p?q", "//a"), "http://a/b/c/d;p?q");
        assert_eq!(resolve_str("http://a/b/c/d;p?q", "//a/x"), "http://a/x");
    }

    #[test]
    fn test_relative_base() {
        assert_eq!(resolve_str("a/b", "c"), "a/c");
        assert_eq!(resolve_str("a/b", "../../c"), "c");
        assert_eq!(resolve_str("", "g"), "/g");
    }

    #[test]
    fn test_inputs_unchanged() {
        let base = Url::parse("http://a/b/c/d;p?q").unwrap();
        let reference = Url::parse("../g").unwrap();
        let resolved = resolve(&base, &reference);
        assert_eq!(base.to_string(), "http://a/b/c/d;p?q");
        assert_eq!(reference.to_string(), "../g");
        assert_eq!(resolved.to_string(), "http://a/b/g");
    }
}
