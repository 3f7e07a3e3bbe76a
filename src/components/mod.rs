mod fragment;
mod host;
mod path;
mod port;
mod query;
mod scheme;
mod user_info;

pub use fragment::Fragment;
pub use host::Host;
pub use path::Path;
pub use port::Port;
pub use query::{Query, SortMode};
pub use scheme::Scheme;
pub use user_info::UserInfo;

use crate::compat::Vec;

/// One URI component, ready to be swapped into a URL.
///
/// This is the unit of change of [`UrlBase::with_component`](crate::UrlBase::with_component).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Scheme(Scheme),
    UserInfo(UserInfo),
    Host(Host),
    Port(Port),
    Path(Path),
    Query(Query),
    Fragment(Fragment),
}

/// Selects what a `filter` predicate receives for each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// The element value: a segment, a label, or a query pair value
    #[default]
    Value,
    /// The element key: its offset for paths and hosts, the pair name for queries
    Key,
    /// Key and value together
    Both,
}

/// The argument handed to a `filter` predicate, shaped by [`FilterMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<K, V> {
    Value(V),
    Key(K),
    Both(K, V),
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(mode: FilterMode, key: K, value: V) -> Self {
        match mode {
            FilterMode::Value => Self::Value(value),
            FilterMode::Key => Self::Key(key),
            FilterMode::Both => Self::Both(key, value),
        }
    }

    /// The value, unless the entry was built in [`FilterMode::Key`].
    pub fn value(self) -> Option<V> {
        match self {
            Self::Value(value) | Self::Both(_, value) => Some(value),
            Self::Key(_) => None,
        }
    }

    /// The key, unless the entry was built in [`FilterMode::Value`].
    pub fn key(self) -> Option<K> {
        match self {
            Self::Key(key) | Self::Both(key, _) => Some(key),
            Self::Value(_) => None,
        }
    }
}

/// Ordered component collections: path segments, host labels, query pairs.
///
/// Every operation returns a new collection; the receiver is never touched.
/// Offsets are positions in [`items`](Collection::items). Offsets outside the
/// sequence are not errors: `replace_item` leaves the collection unchanged
/// and `without` ignores them.
#[allow(clippy::len_without_is_empty)]
pub trait Collection: Sized {
    type Item: Clone;

    /// The elements, in order
    fn items(&self) -> &[Self::Item];

    /// Build a collection of the same kind from already-valid elements
    #[must_use]
    fn with_items(&self, items: Vec<Self::Item>) -> Self;

    fn len(&self) -> usize {
        self.items().len()
    }

    /// The element at `offset`
    fn item(&self, offset: usize) -> Option<&Self::Item> {
        self.items().get(offset)
    }

    fn to_vec(&self) -> Vec<Self::Item> {
        self.items().to_vec()
    }

    #[must_use]
    fn append_items<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut result = self.to_vec();
        result.extend(items);
        self.with_items(result)
    }

    #[must_use]
    fn prepend_items<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut result: Vec<Self::Item> = items.into_iter().collect();
        result.extend_from_slice(self.items());
        self.with_items(result)
    }

    /// Replace the element at `offset` with zero or more elements.
    #[must_use]
    fn splice_item<I>(&self, offset: usize, items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        if offset >= self.len() {
            return self.with_items(self.to_vec());
        }
        let mut result = self.to_vec();
        result.splice(offset..=offset, items);
        self.with_items(result)
    }

    #[must_use]
    fn replace_item(&self, offset: usize, item: Self::Item) -> Self {
        self.splice_item(offset, [item])
    }

    /// Remove the elements at `offsets`, all resolved against the receiver.
    #[must_use]
    fn without(&self, offsets: &[usize]) -> Self {
        self.filter_by(|offset, _| !offsets.contains(&offset))
    }

    /// Keep the elements for which `predicate(offset, element)` holds.
    #[must_use]
    fn filter_by<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(usize, &Self::Item) -> bool,
    {
        let items = self
            .items()
            .iter()
            .enumerate()
            .filter(|(offset, item)| predicate(*offset, item))
            .map(|(_, item)| item.clone())
            .collect();
        self.with_items(items)
    }
}
