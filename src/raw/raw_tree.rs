use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::{Bound, RangeBounds};

use alloc::vec::Vec;
use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::iter::RawIter;
use super::node::{Node, Side};

/// What `insert` does when it meets a key equal to the one being inserted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Duplicates {
    /// Overwrite the payload of the existing node; the tree does not grow.
    Reject,
    /// Keep descending right, so the new node lands after every equal key.
    Allow,
}

/// Outcome of [`RawTree::insert`].
pub(crate) enum InsertResult<V> {
    /// A new node was attached.
    Inserted,
    /// An equal key was found and its payload swapped; holds the old payload.
    Replaced(V),
}

/// Validates that the start bound does not exceed the end bound.
///
/// # Panics
///
/// Panics if `start > end` or if `start == end` and both bounds are `Excluded`.
fn validate_range_bounds<Q, R>(range: &R)
where
    Q: ?Sized + Ord,
    R: RangeBounds<Q>,
{
    if let (Bound::Included(start) | Bound::Excluded(start), Bound::Included(end) | Bound::Excluded(end)) =
        (range.start_bound(), range.end_bound())
    {
        let valid =
            if matches!(range.start_bound(), Bound::Excluded(_)) && matches!(range.end_bound(), Bound::Excluded(_)) {
                start < end
            } else {
                start <= end
            };
        assert!(valid, "range start is greater than range end");
    }
}

/// The unbalanced binary search tree shared by every container in the crate.
///
/// Nodes live in an [`Arena`] and link to each other by [`Handle`]. The tree
/// maintains:
///
/// - every key in a node's left subtree is `<` the node's key, every key in
///   its right subtree is `>=` it;
/// - `len` equals the number of nodes reachable from `root`, which is also
///   the number of occupied arena slots;
/// - each non-root node is the `left` or `right` child of its `parent`, and
///   the root has no parent.
#[derive(Clone)]
pub(crate) struct RawTree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Option<Handle>,
    len: usize,
}

impl<K, V> RawTree<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node at once. No links are walked, so this is safe on a
    /// tree of any depth.
    pub(crate) fn clear(&mut self) {
        trace!(len = self.len, "tree cleared");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Ascending walk over every node.
    pub(crate) fn iter(&self) -> RawIter<'_, K, V> {
        RawIter::new(&self.nodes, self.root)
    }

    /// Leftmost node of the subtree rooted at `handle`.
    fn minimum(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left() {
            handle = left;
        }
        handle
    }

    /// Rightmost node of the subtree rooted at `handle`.
    fn maximum(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right() {
            handle = right;
        }
        handle
    }

    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.minimum(root))
    }

    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.maximum(root))
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first()?;
        Some(self.delete(first))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last()?;
        Some(self.delete(last))
    }

    /// Puts the subtree `v` in the slot `u` occupies under `u`'s parent (or at
    /// the root). `u` keeps its own links; the caller decides what happens to it.
    fn transplant(&mut self, u: Handle, v: Option<Handle>) {
        let parent = self.nodes.get(u).parent();
        match parent {
            None => self.root = v,
            Some(parent) => {
                let side = self.nodes.get(parent).side_of(u);
                self.nodes.get_mut(parent).set_child(side, v);
            }
        }
        if let Some(v) = v {
            self.nodes.get_mut(v).set_parent(parent);
        }
    }

    /// Unlinks `z`, frees its slot and returns its key and payload.
    ///
    /// A node with two children is replaced by its in-order successor `y`, the
    /// minimum of its right subtree. Only a constant number of links change,
    /// and the in-order sequence of the remaining nodes is unchanged.
    pub(crate) fn delete(&mut self, z: Handle) -> (K, V) {
        let node = self.nodes.get(z);
        match (node.left(), node.right()) {
            (None, right) => {
                trace!(handle = z.index(), "deleting node without left child");
                self.transplant(z, right);
            }
            (left @ Some(_), None) => {
                trace!(handle = z.index(), "deleting node without right child");
                self.transplant(z, left);
            }
            (Some(left), Some(right)) => {
                let y = self.minimum(right);
                trace!(handle = z.index(), successor = y.index(), "deleting node with two children");
                if y != right {
                    let y_right = self.nodes.get(y).right();
                    self.transplant(y, y_right);
                    self.nodes.get_mut(y).set_child(Side::Right, Some(right));
                    self.nodes.get_mut(right).set_parent(Some(y));
                }
                self.transplant(z, Some(y));
                self.nodes.get_mut(y).set_child(Side::Left, Some(left));
                self.nodes.get_mut(left).set_parent(Some(y));
            }
        }
        self.len -= 1;
        self.nodes.remove(z).into_key_value()
    }

    /// Removes every node, returning the entries in ascending order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let order: Vec<Handle> = {
            let mut order = Vec::with_capacity(self.len);
            let mut stack: Vec<Handle> = Vec::new();
            let mut current = self.root;
            loop {
                while let Some(handle) = current {
                    stack.push(handle);
                    current = self.nodes.get(handle).left();
                }
                let Some(handle) = stack.pop() else { break };
                order.push(handle);
                current = self.nodes.get(handle).right();
            }
            order
        };

        let entries = order.into_iter().map(|handle| self.nodes.remove(handle).into_key_value()).collect();
        self.clear();
        entries
    }

    /// Returns a node whose key equals `key`, if any.
    ///
    /// With duplicates present this is the first match met on the way down,
    /// not necessarily the first in sorted order.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// First node in sorted order whose key is `>= key` (`inclusive`) or
    /// `> key` (exclusive).
    fn bound<Q>(&self, key: &Q, inclusive: bool) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let qualifies = match node.key().borrow().cmp(key) {
                Ordering::Greater => true,
                Ordering::Equal => inclusive,
                Ordering::Less => false,
            };
            if qualifies {
                candidate = Some(handle);
                current = node.left();
            } else {
                current = node.right();
            }
        }
        candidate
    }

    /// First node with key `>= key`.
    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.bound(key, true)
    }

    /// First node with key `> key`.
    pub(crate) fn upper_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.bound(key, false)
    }

    /// First node in sorted order whose key equals `key`. Among duplicates this
    /// is the one inserted earliest.
    pub(crate) fn find_first<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.lower_bound(key).filter(|&handle| self.nodes.get(handle).key().borrow() == key)
    }

    /// Ascending walk over the nodes whose keys fall in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or both bounds
    /// exclude the same key.
    pub(crate) fn range<Q, R>(&self, range: &R) -> RawIter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        validate_range_bounds(range);
        let end = match range.end_bound() {
            Bound::Included(end) => self.upper_bound(end),
            Bound::Excluded(end) => self.lower_bound(end),
            Bound::Unbounded => None,
        };
        RawIter::seek(&self.nodes, self.root, range.start_bound(), end)
    }

    /// Ascending walk over the nodes whose keys equal `key`. Starts at the
    /// lower bound and stops at the first strictly greater key.
    pub(crate) fn equal_range<Q>(&self, key: &Q) -> RawIter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        RawIter::seek(&self.nodes, self.root, Bound::Included(key), self.upper_bound(key))
    }

    /// Number of nodes whose keys equal `key`, in O(height + matches).
    pub(crate) fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.equal_range(key).count()
    }

    /// Removes one node whose key equals `key`.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.delete(handle))
    }

    /// Removes every node whose key equals `key`, returning how many went.
    pub(crate) fn remove_all<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut removed = 0;
        while let Some(handle) = self.search(key) {
            self.delete(handle);
            removed += 1;
        }
        removed
    }
}

impl<K: Ord, V> RawTree<K, V> {
    /// Inserts `key` with payload `value`.
    ///
    /// Descends left on `<` and right otherwise; under [`Duplicates::Reject`]
    /// an equal key stops the descent and its payload is overwritten in place.
    pub(crate) fn insert(&mut self, key: K, value: V, duplicates: Duplicates) -> InsertResult<V> {
        let Some(mut current) = self.root else {
            let handle = self.nodes.insert(Node::new(key, value, None));
            self.root = Some(handle);
            self.len = 1;
            trace!(handle = handle.index(), "root attached");
            return InsertResult::Inserted;
        };

        loop {
            let node = self.nodes.get(current);
            let side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Equal if duplicates == Duplicates::Reject => {
                    trace!(handle = current.index(), "payload replaced");
                    return InsertResult::Replaced(self.nodes.get_mut(current).replace_value(value));
                }
                Ordering::Equal | Ordering::Greater => Side::Right,
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let handle = self.nodes.insert(Node::new(key, value, Some(current)));
                    self.nodes.get_mut(current).set_child(side, Some(handle));
                    self.len += 1;
                    trace!(handle = handle.index(), parent = current.index(), len = self.len, "node attached");
                    return InsertResult::Inserted;
                }
            }
        }
    }
}
