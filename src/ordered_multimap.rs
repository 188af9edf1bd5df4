use core::borrow::Borrow;
use core::fmt;
use core::ops::RangeBounds;

use crate::raw::{Duplicates, RawTree};

pub use crate::ordered_map::{IntoIter, Iter, Keys, Range, Values};

/// An ordered map that admits any number of entries per key.
///
/// Entries iterate in ascending key order; entries with equal keys iterate in
/// the order they were inserted, and removing other entries never reorders
/// them. The tree shape and cost model are those of
/// [`OrderedMap`](crate::OrderedMap).
///
/// # Examples
///
/// ```
/// use ordtree::OrderedMultiMap;
///
/// let mut readings = OrderedMultiMap::new();
/// readings.insert("kitchen", 21.5);
/// readings.insert("attic", 17.0);
/// readings.insert("kitchen", 22.0);
///
/// assert_eq!(readings.len(), 3);
/// assert_eq!(readings.count("kitchen"), 2);
///
/// let kitchen: Vec<f64> = readings.equal_range("kitchen").map(|(_, &t)| t).collect();
/// assert_eq!(kitchen, [21.5, 22.0]);
///
/// assert_eq!(readings.erase("kitchen"), 2);
/// assert_eq!(readings.len(), 1);
/// ```
pub struct OrderedMultiMap<K, V> {
    raw: RawTree<K, V>,
}

impl<K, V> OrderedMultiMap<K, V> {
    /// Makes a new, empty `OrderedMultiMap`.
    #[must_use]
    pub const fn new() -> OrderedMultiMap<K, V> {
        OrderedMultiMap { raw: RawTree::new() }
    }

    /// Creates an empty multimap with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMultiMap {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns how many entries the multimap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of entries, counting every duplicate.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the multimap contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the value of the earliest-inserted entry with the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedMultiMap;
    ///
    /// let map = OrderedMultiMap::from([(1, 'a'), (1, 'b')]);
    /// assert_eq!(map.get(&1), Some(&'a'));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find_first(key).map(|handle| self.raw.node(handle).value())
    }

    /// Returns a mutable reference to the value of the earliest-inserted entry
    /// with the given key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.find_first(key)?;
        Some(self.raw.node_mut(handle).value_mut())
    }

    /// Returns `true` if at least one entry has the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Returns the number of entries with the given key.
    ///
    /// # Complexity
    ///
    /// O(h + m), where m is the number of matching entries.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.count(key)
    }

    /// Iterates over every entry with the given key, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedMultiMap;
    ///
    /// let map = OrderedMultiMap::from([(2, 'x'), (1, 'a'), (2, 'y'), (3, 'z')]);
    /// let twos: Vec<_> = map.equal_range(&2).collect();
    /// assert_eq!(twos, [(&2, &'x'), (&2, &'y')]);
    /// assert_eq!(map.equal_range(&4).next(), None);
    /// ```
    pub fn equal_range<Q>(&self, key: &Q) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Range::new(self.raw.equal_range(key))
    }

    /// Returns the smallest key that is greater than or equal to `key`.
    pub fn lower_bound<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.lower_bound(key).map(|handle| self.raw.node(handle).key())
    }

    /// Returns the smallest key that is strictly greater than `key`.
    pub fn upper_bound<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.upper_bound(key).map(|handle| self.raw.node(handle).key())
    }

    /// Returns the first entry in iteration order.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.first()?);
        Some((node.key(), node.value()))
    }

    /// Returns the last entry in iteration order.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.last()?);
        Some((node.key(), node.value()))
    }

    /// Removes and returns the first entry in iteration order.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the last entry in iteration order.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Removes every entry with the given key and returns how many there were.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedMultiMap;
    ///
    /// let mut map = OrderedMultiMap::from([(1, 'a'), (1, 'b'), (2, 'c')]);
    /// assert_eq!(map.erase(&1), 2);
    /// assert_eq!(map.erase(&1), 0);
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(m * h), where m is the number of matching entries.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_all(key)
    }

    /// Removes the earliest-inserted entry with the given key and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedMultiMap;
    ///
    /// let mut map = OrderedMultiMap::from([(1, 'a'), (1, 'b')]);
    /// assert_eq!(map.remove_entry(&1), Some((1, 'a')));
    /// assert_eq!(map.get(&1), Some(&'b'));
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.find_first(key)?;
        Some(self.raw.delete(handle))
    }

    /// Constructs an iterator over the entries whose keys fall in `range`.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`, or if `start == end` and both bounds are
    /// `Excluded`.
    pub fn range<T, R>(&self, range: R) -> Range<'_, K, V>
    where
        K: Borrow<T>,
        T: ?Sized + Ord,
        R: RangeBounds<T>,
    {
        Range::new(self.raw.range::<T, R>(&range))
    }

    /// Gets an iterator over all entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.raw.iter(), self.raw.len())
    }

    /// Gets an iterator over the keys, repeating each key once per entry.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Gets an iterator over the values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }
}

impl<K: Ord, V> OrderedMultiMap<K, V> {
    /// Adds an entry. Existing entries with an equal key are left alone and the
    /// new one is placed after them.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn insert(&mut self, key: K, value: V) {
        self.raw.insert(key, value, Duplicates::Allow);
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMultiMap<K, V> {
    fn clone(&self) -> Self {
        OrderedMultiMap { raw: self.raw.clone() }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMultiMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMultiMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMultiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedMultiMap<K, V> {
    fn default() -> Self {
        OrderedMultiMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMultiMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMultiMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMultiMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedMultiMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMultiMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMultiMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter::new(self.raw.drain_to_vec())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn duplicates_iterate_in_insertion_order() {
        let mut map = OrderedMultiMap::new();
        for (i, key) in [5, 3, 5, 8, 5, 3].into_iter().enumerate() {
            map.insert(key, i);
        }
        let entries: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
        assert_eq!(entries, [(3, 1), (3, 5), (5, 0), (5, 2), (5, 4), (8, 3)]);

        map.remove_entry(&3);
        map.pop_last();
        let fives: Vec<_> = map.equal_range(&5).map(|(_, &v)| v).collect();
        assert_eq!(fives, [0, 2, 4]);
    }

    #[test]
    fn get_mut_targets_earliest_entry() {
        let mut map = OrderedMultiMap::from([(1, 10), (1, 20)]);
        *map.get_mut(&1).expect("present") += 1;
        assert_eq!(map.values().copied().collect::<Vec<_>>(), [11, 20]);
    }

    #[test]
    fn debug_lists_every_entry() {
        let map = OrderedMultiMap::from([(1, 'a'), (1, 'b')]);
        assert_eq!(format!("{map:?}"), "{1: 'a', 1: 'b'}");
    }
}
