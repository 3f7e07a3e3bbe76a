use super::{Collection, Entry, FilterMode};
use crate::compat::{String, Vec};
use crate::unicode::percent_encode::{QUERY_KEY_SET, QUERY_VALUE_SET, normalize_component};
use core::cmp::Ordering;

/// Key ordering used by [`Query::sort_offsets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Numeric keys first, in numeric order, then the others byte-wise
    #[default]
    Regular,
    /// Byte-wise key order
    Lexical,
    /// Keys compared as numbers; non-numeric keys count as zero
    Numeric,
    /// Digit runs compared as numbers, everything else byte-wise
    Natural,
}

type Pair = (String, Option<String>);

/// The query component: an ordered list of `key[=value]` pairs.
///
/// `a` is the pair `("a", None)`, `a=` is `("a", Some(""))`. Duplicate keys
/// are kept. Keys and values are stored percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    pairs: Vec<Pair>,
}

impl Query {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        Self::parse_raw(query.strip_prefix('?').unwrap_or(query))
    }

    /// Parse the text found after the `?` of a URI, as is.
    pub(crate) fn parse_raw(query: &str) -> Self {
        if query.is_empty() {
            return Self::new();
        }

        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (encode_key(key), Some(encode_value(value))),
                None => (encode_key(pair), None),
            })
            .collect();

        Self { pairs }
    }

    /// Build a query from raw pairs; `&`, `=` and other reserved characters
    /// in keys and values are percent-encoded.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(key, value)| (encode_key(key.as_ref()), value.map(|v| encode_value(v.as_ref()))))
            .collect();
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Get the value of the first pair named `key`.
    ///
    /// Returns `None` both when the key is missing and when its first pair
    /// has no value; use [`Query::has`] to tell them apart.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = encode_key(key);
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<Option<&str>> {
        let key = encode_key(key);
        self.pairs
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_deref())
            .collect()
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        let key = encode_key(key);
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.pairs.iter().map(|(_, v)| v.as_deref())
    }

    /// Append the pairs of `query` after the existing ones.
    #[must_use]
    pub fn append(&self, query: &str) -> Self {
        self.append_items(Self::parse(query).pairs)
    }

    /// Prepend the pairs of `query` before the existing ones.
    #[must_use]
    pub fn prepend(&self, query: &str) -> Self {
        self.prepend_items(Self::parse(query).pairs)
    }

    /// Replace the pair at `offset` with the pairs of `pairs`.
    ///
    /// An empty `pairs` removes the pair; an out-of-range offset leaves the
    /// query unchanged.
    #[must_use]
    pub fn replace(&self, offset: usize, pairs: &str) -> Self {
        self.splice_item(offset, Self::parse(pairs).pairs)
    }

    /// Merge another query into this one.
    ///
    /// Keys already present take all of the merged pairs for that key, at
    /// the position of their first occurrence; other occurrences go away.
    /// New keys are appended in the order they appear in `query`.
    #[must_use]
    pub fn merge(&self, query: &str) -> Self {
        let incoming = Self::parse(query).pairs;
        if incoming.is_empty() {
            return self.clone();
        }

        let mut placed: Vec<&str> = Vec::new();
        let mut pairs = Vec::with_capacity(self.pairs.len() + incoming.len());
        for pair in &self.pairs {
            let key = pair.0.as_str();
            if !incoming.iter().any(|(k, _)| k == key) {
                pairs.push(pair.clone());
                continue;
            }
            if placed.contains(&key) {
                continue;
            }
            placed.push(key);
            pairs.extend(incoming.iter().filter(|(k, _)| k == key).cloned());
        }

        for (offset, pair) in incoming.iter().enumerate() {
            let key = pair.0.as_str();
            if placed.contains(&key) {
                continue;
            }
            // Keep pairs of a new key together, where the key first appears
            if incoming[..offset].iter().any(|(k, _)| k == key) {
                continue;
            }
            pairs.extend(incoming.iter().filter(|(k, _)| k == key).cloned());
        }

        Self { pairs }
    }

    /// Stable sort of the pairs by key. Pairs sharing a key keep their order.
    #[must_use]
    pub fn sort_offsets(&self, mode: SortMode) -> Self {
        let mut pairs = self.pairs.clone();
        pairs.sort_by(|a, b| compare_keys(&a.0, &b.0, mode));
        Self { pairs }
    }

    /// Keep the pairs for which `predicate` holds.
    ///
    /// The key handed to the predicate is the pair name.
    #[must_use]
    pub fn filter<F>(&self, mode: FilterMode, mut predicate: F) -> Self
    where
        F: FnMut(Entry<&str, Option<&str>>) -> bool,
    {
        self.filter_by(|_, (key, value)| predicate(Entry::new(mode, key.as_str(), value.as_deref())))
    }
}

fn encode_key(key: &str) -> String {
    normalize_component(key, QUERY_KEY_SET)
}

fn encode_value(value: &str) -> String {
    normalize_component(value, QUERY_VALUE_SET)
}

fn compare_keys(a: &str, b: &str, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Lexical => a.cmp(b),
        SortMode::Numeric => {
            let a = numeric_value(a).unwrap_or(0.0);
            let b = numeric_value(b).unwrap_or(0.0);
            a.total_cmp(&b)
        }
        SortMode::Regular => match (numeric_value(a), numeric_value(b)) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        },
        SortMode::Natural => natural_cmp(a, b),
    }
}

/// The value of a key written as a decimal number (`12`, `-3`, `1.5`).
fn numeric_value(key: &str) -> Option<f64> {
    let digits = key.strip_prefix(['-', '+']).unwrap_or(key);
    let mut dots = 0;
    for b in digits.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' => dots += 1,
            _ => return None,
        }
    }
    if dots > 1 || !digits.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<f64>().ok()
}

/// Compare strings treating runs of ASCII digits as numbers.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut left, mut right) = (a.as_bytes(), b.as_bytes());
    loop {
        match (left.first(), right.first()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (x_run, x_rest) = split_digits(left);
                let (y_run, y_rest) = split_digits(right);
                let ordering = compare_digit_runs(x_run, y_run);
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left = x_rest;
                right = y_rest;
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(y);
                }
                left = &left[1..];
                right = &right[1..];
            }
        }
    }
}

fn split_digits(bytes: &[u8]) -> (&[u8], &[u8]) {
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    bytes.split_at(end)
}

fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let strip = |run: &[u8]| -> usize { run.iter().take_while(|&&b| b == b'0').count() };
    let a = &a[strip(a)..];
    let b = &b[strip(b)..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Collection for Query {
    type Item = Pair;

    fn items(&self) -> &[Pair] {
        &self.pairs
    }

    fn with_items(&self, items: Vec<Pair>) -> Self {
        Self { pairs: items }
    }
}

impl core::fmt::Display for Query {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            f.write_str(key)?;
            if let Some(value) = value {
                f.write_str("=")?;
                f.write_str(value)?;
            }
        }
        Ok(())
    }
}

impl From<&str> for Query {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}
