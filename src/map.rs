//! Ordered maps for Parameters and Dictionaries.
//!
//! Structured Fields are serialized in the order their members were given,
//! so both maps wrap [`IndexMap`] instead of `HashMap`:
//!
//! - [`Parameters`]: key to [`BareItem`](crate::BareItem), attached to Items and Inner Lists
//! - [`Dictionary`]: key to [`ListEntry`](crate::ListEntry), a top-level field type
//!
//! Keys are not validated on insertion; the serializer rejects keys outside
//! of the key grammar.
//!
//! ## Examples
//!
//! ```rust
//! use sfv_codec::{BareItem, Parameters};
//!
//! let mut params = Parameters::new();
//! params.insert("q".to_string(), BareItem::from(1));
//! params.insert("a".to_string(), BareItem::from(true));
//!
//! let keys: Vec<_> = params.keys().cloned().collect();
//! assert_eq!(keys, vec!["q", "a"]);
//! ```

use indexmap::IndexMap;

/// An insertion-ordered map from Structured Field keys to values.
///
/// Equality is order-sensitive: two maps are equal only if they hold the
/// same entries in the same order.
#[derive(Debug, Clone)]
pub struct SfvMap<V>(IndexMap<String, V>);

/// Parameters attached to an Item or Inner List.
pub type Parameters = SfvMap<crate::BareItem>;

/// A Dictionary field value.
pub type Dictionary = SfvMap<crate::ListEntry>;

impl<V> SfvMap<V> {
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::Dictionary;
    ///
    /// let dict = Dictionary::new();
    /// assert!(dict.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        SfvMap(IndexMap::new())
    }

    /// Creates an empty map with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SfvMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present its value is replaced in place and the
    /// old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::{BareItem, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// assert!(params.insert("a".to_string(), BareItem::from(1)).is_none());
    /// assert!(params.insert("a".to_string(), BareItem::from(2)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    /// Inserts a key-value pair at the end of the map.
    ///
    /// An existing entry for the key is removed first, so the key moves to
    /// the last position. This is how Dictionary parsing resolves duplicate
    /// keys; Parameters use [`SfvMap::insert`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::{BareItem, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// params.append("a".to_string(), BareItem::from(1));
    /// params.append("b".to_string(), BareItem::from(2));
    /// params.append("a".to_string(), BareItem::from(3));
    ///
    /// let keys: Vec<_> = params.keys().cloned().collect();
    /// assert_eq!(keys, vec!["b", "a"]);
    /// assert_eq!(params.get("a"), Some(&BareItem::from(3)));
    /// ```
    pub fn append(&mut self, key: String, value: V) -> Option<V> {
        let old = self.0.shift_remove(&key);
        self.0.insert(key, value);
        old
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.0.get_mut(key)
    }

    /// Returns the entry at `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&String, &V)> {
        self.0.get_index(index)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, V> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, V> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }
}

impl<V> Default for SfvMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for SfvMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl<V: Eq> Eq for SfvMap<V> {}

impl<V> From<IndexMap<String, V>> for SfvMap<V> {
    fn from(map: IndexMap<String, V>) -> Self {
        SfvMap(map)
    }
}

impl<V> From<SfvMap<V>> for IndexMap<String, V> {
    fn from(map: SfvMap<V>) -> Self {
        map.0
    }
}

impl<V> IntoIterator for SfvMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a SfvMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collects pairs with [`SfvMap::append`] semantics: the last occurrence of
/// a key determines both its value and its position.
impl<K: Into<String>, V> FromIterator<(K, V)> for SfvMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = SfvMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for SfvMap<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.append(key.into(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BareItem;

    #[test]
    fn test_insert_keeps_position() {
        let mut params = Parameters::new();
        params.insert("a".to_string(), BareItem::from(1));
        params.insert("b".to_string(), BareItem::from(2));
        params.insert("a".to_string(), BareItem::from(3));

        let entries: Vec<_> = params.iter().collect();
        assert_eq!(entries[0], (&"a".to_string(), &BareItem::from(3)));
        assert_eq!(entries[1], (&"b".to_string(), &BareItem::from(2)));
    }

    #[test]
    fn test_from_iter_last_wins() {
        let params: Parameters = vec![
            ("a", BareItem::from(1)),
            ("b", BareItem::from(2)),
            ("a", BareItem::from(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get_index(0).map(|(k, _)| k.as_str()), Some("b"));
        assert_eq!(params.get("a"), Some(&BareItem::from(3)));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab: Parameters = vec![("a", BareItem::from(1)), ("b", BareItem::from(2))]
            .into_iter()
            .collect();
        let ba: Parameters = vec![("b", BareItem::from(2)), ("a", BareItem::from(1))]
            .into_iter()
            .collect();

        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut params: Parameters = vec![
            ("a", BareItem::from(1)),
            ("b", BareItem::from(2)),
            ("c", BareItem::from(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.remove("a"), Some(BareItem::from(1)));
        let keys: Vec<_> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "c"]);
        assert!(!params.contains_key("a"));
    }
}
