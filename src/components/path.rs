use super::{Collection, Entry, FilterMode};
use crate::compat::{String, ToString, Vec, format};
use crate::error::{ParseError, Result};
use crate::unicode::percent_encode::{SEGMENT_SET, normalize_component};

/// The path component: percent-encoded segments plus an absolute flag.
///
/// `"/"` is the absolute path with no segments. A trailing `/` is kept as a
/// trailing empty segment, so `"/a/"` holds `["a", ""]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    absolute: bool,
    segments: Vec<String>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a path string. Characters outside `pchar` are percent-encoded,
    /// so this never fails.
    pub fn parse(input: &str) -> Self {
        let (absolute, rest) = match input.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let segments = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/')
                .map(|segment| normalize_component(segment, SEGMENT_SET))
                .collect()
        };
        Self::from_parts(absolute, segments)
    }

    /// Build a path from raw segments; each one is percent-encoded as needed.
    pub fn from_segments<I, S>(absolute: bool, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = segments
            .into_iter()
            .map(|segment| normalize_component(segment.as_ref(), SEGMENT_SET))
            .collect();
        Self::from_parts(absolute, segments)
    }

    /// Keep one spelling per serialized path: `/` + `[""]` is the root, and
    /// a relative path whose first segment is empty is really absolute.
    pub(crate) fn from_parts(mut absolute: bool, mut segments: Vec<String>) -> Self {
        if segments.len() == 1 && segments[0].is_empty() {
            segments.clear();
        } else if !absolute && segments.len() > 1 && segments[0].is_empty() {
            segments.remove(0);
            absolute = true;
        }
        Self { absolute, segments }
    }

    /// Returns `true` for the empty relative path `""`.
    pub fn is_empty(&self) -> bool {
        !self.absolute && self.segments.is_empty()
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns `true` when the path ends with a separator.
    pub fn has_trailing_slash(&self) -> bool {
        self.segments.last().is_some_and(String::is_empty) || (self.absolute && self.segments.is_empty())
    }

    /// The last segment, or `""`.
    pub fn basename(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// The path without its last segment.
    pub fn dirname(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self::from_parts(self.absolute, segments)
    }

    /// The extension of the last segment, ignoring any `;param` part.
    pub fn extension(&self) -> &str {
        let name = split_params(self.basename()).0;
        match name.rfind('.') {
            Some(pos) if pos > 0 => &name[pos + 1..],
            _ => "",
        }
    }

    /// Append a path after the existing segments.
    ///
    /// The receiver keeps its absolute flag; its trailing empty segment is
    /// dropped first so `/a/` + `b` gives `/a/b`.
    #[must_use]
    pub fn append(&self, path: &str) -> Self {
        let other = Self::parse(path);
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other;
        }
        let mut segments = self.segments.clone();
        if segments.last().is_some_and(String::is_empty) {
            segments.pop();
        }
        segments.extend(other.segments);
        Self::from_parts(self.absolute, segments)
    }

    /// Prepend a path before the existing segments, keeping the receiver's flag.
    #[must_use]
    pub fn prepend(&self, path: &str) -> Self {
        let mut other = Self::parse(path);
        if self.is_empty() {
            return other;
        }
        if other.segments.last().is_some_and(String::is_empty) {
            other.segments.pop();
        }
        self.prepend_items(other.segments)
    }

    /// Replace the segment at `offset`; out-of-range offsets leave the path unchanged.
    #[must_use]
    pub fn replace(&self, offset: usize, segment: &str) -> Self {
        self.replace_item(offset, normalize_component(segment, SEGMENT_SET))
    }

    /// Keep the segments for which `predicate` holds.
    #[must_use]
    pub fn filter<F>(&self, mode: FilterMode, mut predicate: F) -> Self
    where
        F: FnMut(Entry<usize, &str>) -> bool,
    {
        self.filter_by(|offset, segment| predicate(Entry::new(mode, offset, segment.as_str())))
    }

    /// Remove `.` and `..` segments (RFC 3986 §5.2.4).
    ///
    /// `..` drops the previous output segment when there is one. A final `.`
    /// or `..` leaves a trailing separator behind.
    #[must_use]
    pub fn without_dot_segments(&self) -> Self {
        if !self.segments.iter().any(|s| is_dot_segment(s)) {
            return self.clone();
        }

        let last = self.segments.len() - 1;
        let mut output: Vec<String> = Vec::with_capacity(self.segments.len());
        for (offset, segment) in self.segments.iter().enumerate() {
            match segment.as_str() {
                "." => {}
                ".." => {
                    output.pop();
                }
                _ => {
                    output.push(segment.clone());
                    continue;
                }
            }
            if offset == last {
                output.push(String::new());
            }
        }
        Self::from_parts(self.absolute, output)
    }

    /// Collapse runs of separators: empty segments are dropped, except a
    /// trailing one that marks a trailing `/`.
    #[must_use]
    pub fn without_empty_segments(&self) -> Self {
        let last = self.segments.len().saturating_sub(1);
        self.filter_by(|offset, segment| !segment.is_empty() || offset == last)
    }

    /// Replace the extension of the last segment.
    ///
    /// An empty `extension` removes the current one. A `;param` suffix on the
    /// last segment is kept. Paths without a basename are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidExtension`] when `extension` starts with
    /// `.` or contains `/`.
    pub fn with_extension(&self, extension: &str) -> Result<Self> {
        if extension.starts_with('.') || extension.contains('/') {
            return Err(ParseError::InvalidExtension);
        }
        let (name, params) = split_params(self.basename());
        if name.is_empty() {
            return Ok(self.clone());
        }

        let stem = match name.rfind('.') {
            Some(pos) if pos > 0 => &name[..pos],
            _ => name,
        };
        let mut basename = String::from(stem);
        if !extension.is_empty() {
            basename.push('.');
            basename.push_str(&normalize_component(extension, SEGMENT_SET));
        }
        if let Some(params) = params {
            basename.push(';');
            basename.push_str(params);
        }
        Ok(self.replace_item(self.segments.len() - 1, basename))
    }
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Split `name;params` at the first `;`.
fn split_params(segment: &str) -> (&str, Option<&str>) {
    match segment.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (segment, None),
    }
}

impl Collection for Path {
    type Item = String;

    fn items(&self) -> &[String] {
        &self.segments
    }

    fn with_items(&self, items: Vec<String>) -> Self {
        Self::from_parts(self.absolute, items)
    }
}

impl core::fmt::Display for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.absolute {
            f.write_str("/")?;
        }
        f.write_str(&self.segments.join("/"))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

// Serializer guards. A path that would read back as an authority is
// written behind `/.`, one whose first segment would read as a scheme behind
// `./`. Leading `.` segments already in the path are skipped so the extra
// `.` the guard writes is the one the parser takes off again.
impl Path {
    fn after_leading_dots(&self) -> &[String] {
        let dots = self.segments.iter().take_while(|segment| *segment == ".").count();
        &self.segments[dots..]
    }

    /// Without an authority, the path would start with `//`.
    pub(crate) fn needs_authority_guard(&self) -> bool {
        let rest = self.after_leading_dots();
        self.absolute && rest.len() > 1 && rest[0].is_empty()
    }

    /// Without a scheme, the first segment would read as one.
    pub(crate) fn needs_scheme_guard(&self) -> bool {
        !self.absolute
            && self
                .after_leading_dots()
                .first()
                .is_some_and(|segment| segment.contains(':'))
    }

    /// Drop a leading `.` segment written by a serializer guard.
    pub(crate) fn without_guard_dot(&self) -> Self {
        match self.segments.first() {
            Some(first) if first == "." => {
                Self::from_parts(self.absolute, self.segments[1..].to_vec())
            }
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::vec;

    fn segments(path: &Path) -> Vec<&str> {
        path.segments().collect()
    }

    #[test]
    fn test_parse() {
        let path = Path::parse("/a/b/c");
        assert!(path.is_absolute());
        assert_eq!(segments(&path), vec!["a", "b", "c"]);

        let path = Path::parse("a/b/");
        assert!(!path.is_absolute());
        assert_eq!(segments(&path), vec!["a", "b", ""]);
        assert!(path.has_trailing_slash());

        let root = Path::parse("/");
        assert!(root.is_absolute());
        assert!(!root.is_empty());
        assert_eq!(root.len(), 0);

        assert!(Path::parse("").is_empty());
    }

    #[test]
    fn test_parse_encodes() {
        let path = Path::parse("/a b/%7e/é");
        assert_eq!(path.to_string(), "/a%20b/~/%C3%A9");
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["", "/", "a", "/a/b/", "a//b", "//", "/a;p/b", "./g"] {
            assert_eq!(Path::parse(input).to_string(), input);
        }
    }

    #[test]
    fn test_append() {
        let path = Path::parse("/a/b");
        assert_eq!(path.append("c/d").to_string(), "/a/b/c/d");
        assert_eq!(path.append("/c").to_string(), "/a/b/c");
        assert_eq!(Path::parse("/a/").append("b").to_string(), "/a/b");
        assert_eq!(path.append("").to_string(), "/a/b");
        assert_eq!(Path::new().append("x/y").to_string(), "x/y");
        // The receiver is left alone
        assert_eq!(path.to_string(), "/a/b");
    }

    #[test]
    fn test_prepend() {
        let path = Path::parse("/c/d");
        assert_eq!(path.prepend("a/b").to_string(), "/a/b/c/d");
        assert_eq!(path.prepend("a/").to_string(), "/a/c/d");
        assert_eq!(Path::parse("c").prepend("a").to_string(), "a/c");
        assert_eq!(Path::new().prepend("/a").to_string(), "/a");
    }

    #[test]
    fn test_replace() {
        let path = Path::parse("/a/b/c");
        assert_eq!(path.replace(1, "x y").to_string(), "/a/x%20y/c");
        assert_eq!(path.replace(3, "x"), path);
        assert_eq!(path.replace(usize::MAX, "x"), path);
    }

    #[test]
    fn test_without() {
        let path = Path::parse("/a/b/c/d");
        assert_eq!(path.without(&[0, 2]).to_string(), "/b/d");
        assert_eq!(path.without(&[1, 1, 9]).to_string(), "/a/c/d");
        assert_eq!(path.without(&[7]), path);
    }

    #[test]
    fn test_filter() {
        let path = Path::parse("/a/bb/c/dd");
        assert_eq!(path.filter(FilterMode::Value, |_| true), path);
        assert_eq!(path.filter(FilterMode::Value, |_| false).to_string(), "/");

        let long = path.filter(FilterMode::Value, |entry| {
            entry.value().is_some_and(|segment| segment.len() > 1)
        });
        assert_eq!(long.to_string(), "/bb/dd");

        let even = path.filter(FilterMode::Key, |entry| entry.key().is_some_and(|o| o % 2 == 0));
        assert_eq!(even.to_string(), "/a/c");

        let both = path.filter(FilterMode::Both, |entry| match entry {
            Entry::Both(offset, segment) => offset == 0 || segment == "dd",
            _ => false,
        });
        assert_eq!(both.to_string(), "/a/dd");
    }

    #[test]
    fn test_without_dot_segments() {
        let path = Path::from_segments(false, ["a", ".", "b", "..", "c"]);
        assert_eq!(segments(&path.without_dot_segments()), vec!["a", "c"]);

        let cases = [
            ("/a/b/c/./../../g", "/a/g"),
            ("mid/content=5/../6", "mid/6"),
            ("/a/b/..", "/a/"),
            ("/a/b/.", "/a/b/"),
            ("/..", "/"),
            ("/../../g", "/g"),
            ("../a", "a"),
            (".", ""),
            ("/a/%2E%2E/b", "/b"),
        ];
        for (input, expected) in cases {
            let once = Path::parse(input).without_dot_segments();
            assert_eq!(once.to_string(), expected, "input: {input}");
            assert_eq!(once.without_dot_segments(), once, "input: {input}");
        }
    }

    #[test]
    fn test_without_empty_segments() {
        assert_eq!(
            Path::parse("/a//b///c/").without_empty_segments().to_string(),
            "/a/b/c/"
        );
        assert_eq!(Path::parse("a//b").without_empty_segments().to_string(), "a/b");
        assert_eq!(Path::parse("//").without_empty_segments().to_string(), "/");
    }

    #[test]
    fn test_extension() {
        assert_eq!(Path::parse("/a/file.tar.gz").extension(), "gz");
        assert_eq!(Path::parse("/a/file.csv;v=1").extension(), "csv");
        assert_eq!(Path::parse("/a/.htaccess").extension(), "");
        assert_eq!(Path::parse("/a/").extension(), "");
        assert_eq!(Path::parse("/a/b").basename(), "b");
        assert_eq!(Path::parse("/a/b").dirname().to_string(), "/a");
    }

    #[test]
    fn test_with_extension() {
        let path = Path::parse("/path/to/file.csv");
        assert_eq!(path.with_extension("json").unwrap().to_string(), "/path/to/file.json");
        assert_eq!(path.with_extension("").unwrap().to_string(), "/path/to/file");
        assert_eq!(
            Path::parse("/file;v=1").with_extension("txt").unwrap().to_string(),
            "/file.txt;v=1"
        );
        assert_eq!(
            Path::parse("/dir/").with_extension("txt").unwrap().to_string(),
            "/dir/"
        );
        assert_eq!(path.with_extension(".json"), Err(ParseError::InvalidExtension));
        assert_eq!(path.with_extension("a/b"), Err(ParseError::InvalidExtension));
    }

    #[test]
    fn test_serializer_guards() {
        assert!(Path::parse("//x").needs_authority_guard());
        assert!(Path::parse("/.//x").needs_authority_guard());
        assert!(!Path::parse("/./x").needs_authority_guard());
        assert!(!Path::parse("/./").needs_authority_guard());
        assert!(!Path::parse("/").needs_authority_guard());

        assert!(Path::from_segments(false, ["a:b"]).needs_scheme_guard());
        assert!(Path::parse("./a:b").needs_scheme_guard());
        assert!(!Path::parse("./a/b:c").needs_scheme_guard());
        assert!(!Path::parse("/a:b").needs_scheme_guard());

        assert_eq!(Path::parse("/.//x").without_guard_dot(), Path::parse("//x"));
        assert_eq!(
            Path::parse("././a:b").without_guard_dot(),
            Path::from_segments(false, [".", "a:b"])
        );
        assert_eq!(Path::parse("a/b").without_guard_dot(), Path::parse("a/b"));
    }
}
