use super::handle::Handle;

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single binary search tree cell.
///
/// `left` and `right` are owning links into the same arena; `parent` is the
/// non-owning back link the delete algorithm needs to splice a node out.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf hanging off `parent`.
    pub(crate) fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Swaps in a new payload and returns the previous one.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_key_value(self) -> (K, V) {
        (self.key, self.value)
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    /// Returns the side `child` hangs on.
    ///
    /// # Panics
    ///
    /// Panics if `child` is not linked below this node.
    pub(crate) fn side_of(&self, child: Handle) -> Side {
        if self.left == Some(child) {
            Side::Left
        } else {
            assert_eq!(self.right, Some(child), "`Node::side_of()` - `child` is not linked to this node!");
            Side::Right
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn child_slots_round_trip() {
        let mut node = Node::new(5, 'x', None);
        let (l, r) = (Handle::new(1), Handle::new(2));
        node.set_child(Side::Left, Some(l));
        node.set_child(Side::Right, Some(r));

        assert_eq!(node.child(Side::Left), Some(l));
        assert_eq!(node.right(), Some(r));
        assert_eq!(node.side_of(l), Side::Left);
        assert_eq!(node.side_of(r), Side::Right);
    }

    #[test]
    #[should_panic(expected = "`Node::side_of()` - `child` is not linked to this node!")]
    fn side_of_stranger_panics() {
        let node = Node::new(5, (), Some(Handle::new(0)));
        let _ = node.side_of(Handle::new(3));
    }

    #[test]
    fn replace_value_keeps_key() {
        let mut node = Node::new("k", 1, None);
        assert_eq!(node.replace_value(2), 1);
        assert_eq!(node.into_key_value(), ("k", 2));
    }
}
