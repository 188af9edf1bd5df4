use alloc::vec::Vec;

use super::handle::Handle;

/// Pool of slots addressed by [`Handle`], with a free list of vacated slots.
///
/// Vacated slots are reused LIFO before the pool grows. A handle is only
/// meaningful for the arena that issued it and only until it is taken back.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    /// Stores `element` and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if every addressable slot is occupied.
    pub(crate) fn insert(&mut self, element: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            let slot = &mut self.slots[handle.index()];
            debug_assert!(slot.is_none(), "`Arena::insert()` - vacant slot is occupied!");
            *slot = Some(element);
            return handle;
        }

        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::insert()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        let handle = Handle::new(self.slots.len());
        self.slots.push(Some(element));
        handle
    }

    /// Returns `true` if `handle` addresses an occupied slot.
    #[cfg(test)]
    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.slots.get(handle.index()).is_some_and(Option::is_some)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.index()].as_ref().expect("`Arena::get()` - `handle` is vacant!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.index()].as_mut().expect("`Arena::get_mut()` - `handle` is vacant!")
    }

    /// Moves the element out and queues its slot for reuse.
    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.index()].take().expect("`Arena::remove()` - `handle` is vacant!");
        self.vacant.push(handle);
        element
    }

    /// Drops every element. Allocated capacity is kept.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}
