use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::RangeBounds;

use crate::ordered_map::{IntoIter as MapIntoIter, Keys, OrderedMap, Range as MapRange};

/// An ordered set based on an unbalanced binary search tree.
///
/// See [`OrderedMap`]'s documentation for a discussion of the tree's cost model.
/// Iteration always yields the elements in ascending order.
///
/// # Examples
///
/// ```
/// use ordtree::OrderedSet;
///
/// let mut books = OrderedSet::new();
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// // inserting an element that is already present changes nothing.
/// assert!(!books.insert("The Odyssey"));
/// assert_eq!(books.len(), 4);
///
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// assert_eq!(books.erase("The Odyssey"), 1);
/// assert_eq!(books.first(), Some(&"A Dance With Dragons"));
/// ```
pub struct OrderedSet<T> {
    map: OrderedMap<T, ()>,
}

/// An iterator over the items of an `OrderedSet`.
///
/// This `struct` is created by the [`iter`] method on [`OrderedSet`].
///
/// [`iter`]: OrderedSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: Keys<'a, T, ()>,
}

/// An owning iterator over the items of an `OrderedSet` in ascending order.
pub struct IntoIter<T> {
    inner: MapIntoIter<T, ()>,
}

/// An iterator over a sub-range of items in an `OrderedSet`.
///
/// This `struct` is created by the [`range`] method on [`OrderedSet`], and by
/// [`OrderedMultiSet::equal_range`](crate::OrderedMultiSet::equal_range).
///
/// [`range`]: OrderedSet::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, T: 'a> {
    inner: MapRange<'a, T, ()>,
}

impl<T> OrderedSet<T> {
    /// Makes a new, empty `OrderedSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> OrderedSet<T> {
        OrderedSet { map: OrderedMap::new() }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedSet {
            map: OrderedMap::with_capacity(capacity),
        }
    }

    /// Returns how many elements the set can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to
    /// the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(value).map(|(k, ())| k)
    }

    /// Returns the number of elements equal to the value: `0` or `1`.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.count(value)
    }

    /// Returns the smallest element that is greater than or equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let set = OrderedSet::from([10, 20, 30, 40]);
    /// assert_eq!(set.lower_bound(&25), Some(&30));
    /// assert_eq!(set.lower_bound(&10), Some(&10));
    /// assert_eq!(set.lower_bound(&41), None);
    /// ```
    pub fn lower_bound<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.lower_bound(value)
    }

    /// Returns the smallest element that is strictly greater than `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let set = OrderedSet::from([10, 20, 30, 40]);
    /// assert_eq!(set.upper_bound(&20), Some(&30));
    /// assert_eq!(set.upper_bound(&40), None);
    /// ```
    pub fn upper_bound<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.upper_bound(value)
    }

    /// Returns a reference to the smallest element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.first().map(|(k, ())| k)
    }

    /// Returns a reference to the largest element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.last().map(|(k, ())| k)
    }

    /// Removes and returns the smallest element, if any.
    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(k, ())| k)
    }

    /// Removes and returns the largest element, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(k, ())| k)
    }

    /// Removes the element equal to `value`, returning how many went: `0` or `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([2]);
    /// assert_eq!(set.erase(&2), 1);
    /// assert_eq!(set.erase(&2), 0);
    /// ```
    pub fn erase<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.erase(value)
    }

    /// Removes and returns the element equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(2);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).map(|(k, ())| k)
    }

    /// Constructs an iterator over a sub-range of elements in the set.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`, or if `start == end` and both bounds are
    /// `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 5, 8]);
    /// let picked: Vec<_> = set.range(4..=8).copied().collect();
    /// assert_eq!(picked, [5, 8]);
    /// ```
    pub fn range<K, R>(&self, range: R) -> Range<'_, T>
    where
        T: Borrow<K>,
        K: ?Sized + Ord,
        R: RangeBounds<K>,
    {
        Range {
            inner: self.map.range(range),
        }
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let set = OrderedSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. An equal element already
    /// in the set is kept and the new value is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ())
    }
}

impl<T: Clone> Clone for OrderedSet<T> {
    fn clone(&self) -> Self {
        OrderedSet { map: self.map.clone() }
    }
}

impl<T: Hash> Hash for OrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &OrderedSet<T>) -> bool {
        self.map.eq(&other.map)
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> OrderedSet<T> {
        OrderedSet::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> OrderedSet<T> {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the set's contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedSet;
    ///
    /// let set = OrderedSet::from([4, 1, 3, 2]);
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: Keys<'a, T, ()>) -> Self {
        Iter { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner).finish()
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: MapIntoIter<T, ()>) -> Self {
        IntoIter { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(k, ())| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|(k, ())| k)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<'a, T> Range<'a, T> {
    pub(crate) fn new(inner: MapRange<'a, T, ()>) -> Self {
        Range { inner }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(k, ())| k)
    }
}

impl<T> FusedIterator for Range<'_, T> {}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Range {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn debug_renders_as_set() {
        let set = OrderedSet::from([2, 1]);
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    #[test]
    fn existing_element_is_kept() {
        let mut set = OrderedSet::new();
        assert!(set.insert(alloc::string::String::from("a")));
        assert!(!set.insert(alloc::string::String::from("a")));
        assert_eq!(set.count("a"), 1);
        assert_eq!(set.take("a").as_deref(), Some("a"));
        assert!(set.is_empty());
    }

    #[test]
    fn extend_from_references() {
        let mut set: OrderedSet<i32> = OrderedSet::new();
        set.extend(&[3, 1, 3]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3]);
        assert_eq!(set.iter().len(), 2);
    }
}
