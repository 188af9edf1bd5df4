use core::borrow::Borrow;
use core::fmt;
use core::ops::RangeBounds;

use crate::ordered_multimap::OrderedMultiMap;

pub use crate::ordered_set::{IntoIter, Iter, Range};

/// An ordered collection that keeps every inserted element, equal ones included.
///
/// Elements iterate in ascending order, equal elements in the order they were
/// inserted.
///
/// # Examples
///
/// ```
/// use ordtree::OrderedMultiSet;
///
/// let mut rolls = OrderedMultiSet::new();
/// for roll in [4, 2, 6, 4, 4, 1] {
///     rolls.insert(roll);
/// }
///
/// assert_eq!(rolls.len(), 6);
/// assert_eq!(rolls.count(&4), 3);
/// assert_eq!(rolls.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 4, 4, 6]);
///
/// assert_eq!(rolls.erase(&4), 3);
/// assert_eq!(rolls.lower_bound(&3), Some(&6));
/// ```
pub struct OrderedMultiSet<T> {
    map: OrderedMultiMap<T, ()>,
}

impl<T> OrderedMultiSet<T> {
    /// Makes a new, empty `OrderedMultiSet`.
    #[must_use]
    pub const fn new() -> OrderedMultiSet<T> {
        OrderedMultiSet {
            map: OrderedMultiMap::new(),
        }
    }

    /// Creates an empty multiset with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMultiSet {
            map: OrderedMultiMap::with_capacity(capacity),
        }
    }

    /// Returns how many elements the multiset can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns the number of elements, counting every duplicate.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns `true` if at least one element equals `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns the earliest-inserted element equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.equal_range(value).next().map(|(k, ())| k)
    }

    /// Returns the number of elements equal to `value`.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.count(value)
    }

    /// Iterates over every element equal to `value`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedMultiSet;
    ///
    /// let words = OrderedMultiSet::from(["b", "a", "b"]);
    /// assert_eq!(words.equal_range("b").count(), 2);
    /// ```
    pub fn equal_range<Q>(&self, value: &Q) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Range::new(self.map.equal_range(value))
    }

    /// Returns the smallest element that is greater than or equal to `value`.
    pub fn lower_bound<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.lower_bound(value)
    }

    /// Returns the smallest element that is strictly greater than `value`.
    pub fn upper_bound<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.upper_bound(value)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.first().map(|(k, ())| k)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.last().map(|(k, ())| k)
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(k, ())| k)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(k, ())| k)
    }

    /// Removes every element equal to `value` and returns how many there were.
    pub fn erase<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.erase(value)
    }

    /// Removes and returns the earliest-inserted element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedMultiSet;
    ///
    /// let mut set = OrderedMultiSet::from([7, 7]);
    /// assert_eq!(set.take(&7), Some(7));
    /// assert_eq!(set.count(&7), 1);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).map(|(k, ())| k)
    }

    /// Constructs an iterator over the elements that fall in `range`.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`, or if `start == end` and both bounds are
    /// `Excluded`.
    pub fn range<K, R>(&self, range: R) -> Range<'_, T>
    where
        T: Borrow<K>,
        K: ?Sized + Ord,
        R: RangeBounds<K>,
    {
        Range::new(self.map.range(range))
    }

    /// Gets an iterator that visits every element in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.map.keys())
    }
}

impl<T: Ord> OrderedMultiSet<T> {
    /// Adds an element, after any equal elements already present.
    pub fn insert(&mut self, value: T) {
        self.map.insert(value, ());
    }
}

impl<T: Clone> Clone for OrderedMultiSet<T> {
    fn clone(&self) -> Self {
        OrderedMultiSet { map: self.map.clone() }
    }
}

impl<T: PartialEq> PartialEq for OrderedMultiSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map.eq(&other.map)
    }
}

impl<T: Eq> Eq for OrderedMultiSet<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedMultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for OrderedMultiSet<T> {
    fn default() -> Self {
        OrderedMultiSet::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedMultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedMultiSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for OrderedMultiSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedMultiSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a OrderedMultiSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedMultiSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.map.into_iter())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn owned_iteration_keeps_duplicates() {
        let set = OrderedMultiSet::from([3, 1, 3, 2]);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2, 3, 3]);
    }

    #[test]
    fn debug_renders_duplicates() {
        let set = OrderedMultiSet::from(['b', 'a', 'b']);
        assert_eq!(format!("{set:?}"), "{'a', 'b', 'b'}");
    }

    #[test]
    fn range_spans_duplicate_runs() {
        let set = OrderedMultiSet::from([1, 2, 2, 3, 3, 3, 4]);
        assert_eq!(set.range(2..4).count(), 5);
        assert_eq!(set.range(..=1).count(), 1);
        assert_eq!(set.equal_range(&3).copied().collect::<Vec<_>>(), [3, 3, 3]);
    }
}
