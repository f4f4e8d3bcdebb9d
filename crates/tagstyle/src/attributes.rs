//! Ordered attribute mappings.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// An ordered mapping from attribute keys to opaque attribute values.
///
/// The crate never looks inside a value. Both keys and values are supplied by
/// the host: a terminal renderer might use `&'static str` keys and
/// `console::Style` values, a GUI toolkit its own font and color types.
///
/// # Example
///
/// ```rust
/// use tagstyle::Attributes;
///
/// let outer = Attributes::new().with("font", "body").with("color", "black");
/// let inner = Attributes::new().with("color", "green");
///
/// let merged = outer.overlay(&inner);
/// assert_eq!(merged.get(&"font"), Some(&"body"));
/// assert_eq!(merged.get(&"color"), Some(&"green"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attributes<K, V> {
    map: BTreeMap<K, V>,
}

impl<K: Ord, V> Attributes<K, V> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Sets `key` to `value`, returning the mapping for chaining.
    pub fn with(mut self, key: K, value: V) -> Self {
        self.map.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.map.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, K, V> {
        self.map.keys()
    }

    /// Merges `top` over `self`: keys present in `top` win, all other keys
    /// of either mapping are kept.
    pub fn overlay(&self, top: &Self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut merged = self.clone();
        merged.extend_from(top);
        merged
    }

    /// In-place form of [`overlay`](Self::overlay).
    pub fn extend_from(&mut self, top: &Self)
    where
        K: Clone,
        V: Clone,
    {
        for (key, value) in &top.map {
            self.map.insert(key.clone(), value.clone());
        }
    }

    /// Unwraps into the underlying map.
    pub fn into_inner(self) -> BTreeMap<K, V> {
        self.map
    }
}

impl<K: Ord, V> Default for Attributes<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for Attributes<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self { map }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for Attributes<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self {
            map: BTreeMap::from(entries),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Attributes<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, V> Extend<(K, V)> for Attributes<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl<K, V> IntoIterator for Attributes<K, V> {
    type Item = (K, V);
    type IntoIter = btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Attributes<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
