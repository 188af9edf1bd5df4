use core::borrow::Borrow;
use core::iter::FusedIterator;
use core::ops::Bound;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// Ancestors kept inline before the stack spills to the heap. A tree needs
/// more than this only once it is at least this deep.
const INLINE_DEPTH: usize = 32;

/// In-order walk over a tree's nodes driven by an explicit stack of pending
/// ancestors.
///
/// The top of `stack` is always the next node to yield; every other entry is
/// an ancestor whose left subtree is still being walked. Popping a node pushes
/// the left spine of its right child. A walk can be bounded on the right by
/// `end`, the first node it must *not* yield.
pub(crate) struct RawIter<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    stack: SmallVec<[Handle; INLINE_DEPTH]>,
    end: Option<Handle>,
}

impl<'a, K, V> RawIter<'a, K, V> {
    /// Walks the whole tree under `root`.
    pub(crate) fn new(nodes: &'a Arena<Node<K, V>>, root: Option<Handle>) -> Self {
        let mut iter = Self {
            nodes,
            stack: SmallVec::new(),
            end: None,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Walks from the first node satisfying `start` up to, but excluding, `end`.
    ///
    /// The descent records exactly the ancestors a full walk would still have
    /// pending when it reached that first node, so it costs O(height).
    pub(crate) fn seek<Q>(nodes: &'a Arena<Node<K, V>>, root: Option<Handle>, start: Bound<&Q>, end: Option<Handle>) -> Self
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut stack = SmallVec::new();
        let mut current = root;
        while let Some(handle) = current {
            let node = nodes.get(handle);
            let key = node.key().borrow();
            let in_range = match start {
                Bound::Included(start) => key >= start,
                Bound::Excluded(start) => key > start,
                Bound::Unbounded => true,
            };
            if in_range {
                stack.push(handle);
                current = node.left();
            } else {
                current = node.right();
            }
        }
        Self { nodes, stack, end }
    }

    fn push_left_spine(&mut self, mut current: Option<Handle>) {
        while let Some(handle) = current {
            self.stack.push(handle);
            current = self.nodes.get(handle).left();
        }
    }
}

impl<'a, K, V> Iterator for RawIter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        if Some(handle) == self.end {
            self.stack.clear();
            return None;
        }
        let node = self.nodes.get(handle);
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<K, V> FusedIterator for RawIter<'_, K, V> {}

impl<K, V> Clone for RawIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            end: self.end,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;
    use core::ops::Bound;

    use super::*;
    use crate::raw::node::Side;

    /// Builds the tree
    ///
    /// ```text
    ///         40
    ///       /    \
    ///     20      60
    ///    /  \       \
    ///  10    30      70
    /// ```
    fn sample() -> (Arena<Node<i32, ()>>, Handle, [Handle; 6]) {
        let mut nodes = Arena::new();
        let root = nodes.insert(Node::new(40, (), None));
        let attach = |nodes: &mut Arena<Node<i32, ()>>, parent: Handle, side: Side, key: i32| {
            let child = nodes.insert(Node::new(key, (), Some(parent)));
            nodes.get_mut(parent).set_child(side, Some(child));
            child
        };
        let n20 = attach(&mut nodes, root, Side::Left, 20);
        let n60 = attach(&mut nodes, root, Side::Right, 60);
        let n10 = attach(&mut nodes, n20, Side::Left, 10);
        let n30 = attach(&mut nodes, n20, Side::Right, 30);
        let n70 = attach(&mut nodes, n60, Side::Right, 70);
        (nodes, root, [n10, n20, n30, root, n60, n70])
    }

    fn keys(iter: RawIter<'_, i32, ()>) -> Vec<i32> {
        iter.map(|node| *node.key()).collect()
    }

    #[test]
    fn full_walk_is_ascending() {
        let (nodes, root, _) = sample();
        assert_eq!(keys(RawIter::new(&nodes, Some(root))), [10, 20, 30, 40, 60, 70]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let nodes: Arena<Node<i32, ()>> = Arena::new();
        let mut iter = RawIter::new(&nodes, None);
        assert!(iter.next().is_none());
    }

    #[test]
    fn seek_starts_at_first_match() {
        let (nodes, root, _) = sample();
        assert_eq!(keys(RawIter::seek(&nodes, Some(root), Bound::Included(&30), None)), [30, 40, 60, 70]);
        assert_eq!(keys(RawIter::seek(&nodes, Some(root), Bound::Excluded(&30), None)), [40, 60, 70]);
        assert_eq!(keys(RawIter::seek(&nodes, Some(root), Bound::Included(&35), None)), [40, 60, 70]);
        assert_eq!(keys(RawIter::seek(&nodes, Some(root), Bound::Included(&71), None)), [] as [i32; 0]);
        assert_eq!(keys(RawIter::seek(&nodes, Some(root), Bound::<&i32>::Unbounded, None)).len(), 6);
    }

    #[test]
    fn end_handle_stops_the_walk() {
        let (nodes, root, [_, n20, _, _, n60, _]) = sample();
        let iter = RawIter::seek(&nodes, Some(root), Bound::Included(&20), Some(n60));
        assert_eq!(keys(iter), [20, 30, 40]);

        let mut iter = RawIter::seek(&nodes, Some(root), Bound::Included(&20), Some(n20));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn clone_resumes_independently() {
        let (nodes, root, _) = sample();
        let mut iter = RawIter::new(&nodes, Some(root));
        iter.next();
        iter.next();
        let copy = iter.clone();
        assert_eq!(keys(iter), [30, 40, 60, 70]);
        assert_eq!(keys(copy), [30, 40, 60, 70]);
    }
}
