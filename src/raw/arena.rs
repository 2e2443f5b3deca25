use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use log::debug;

use super::handle::Handle;
use crate::error::{Error, Result};

/// Slot storage addressed by [`Handle`], with a free list for slot reuse.
///
/// The free list always has room for every slot, so releasing an element
/// never allocates.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

fn reservation_failed(error: TryReserveError) -> Error {
    debug!("node arena reservation failed: {error}");
    Error::OutOfMemory
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of elements that can be stored without allocating.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity() - self.slots.len() + self.free.len()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    /// Ensures the next `additional` allocations succeed without allocating.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let needed = additional.saturating_sub(self.free.len());
        if needed > Handle::MAX - self.slots.len() {
            debug!("node arena cannot hold {additional} more elements");
            return Err(Error::OutOfMemory);
        }
        self.slots.try_reserve(needed).map_err(reservation_failed)?;
        let target = self.slots.len() + needed;
        self.free.try_reserve(target - self.free.len()).map_err(reservation_failed)
    }

    pub(crate) fn try_alloc(&mut self, element: T) -> Result<Handle> {
        if let Some(h) = self.free.pop() {
            // Reuse a free slot/handle.
            self.slots[h.to_index()] = Some(element);
            return Ok(h);
        }

        if self.slots.len() >= Handle::MAX {
            debug!("node arena is at maximum capacity ({})", Handle::MAX);
            return Err(Error::OutOfMemory);
        }
        self.slots.try_reserve(1).map_err(reservation_failed)?;
        self.free.try_reserve(self.slots.len() + 1 - self.free.len()).map_err(reservation_failed)?;

        self.slots.push(Some(element));
        Ok(Handle::from_index(self.slots.len() - 1))
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn free(&mut self, handle: Handle) {
        drop(self.take(handle));
    }
}
