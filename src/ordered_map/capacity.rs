use super::OrderedMap;
use crate::error::Result;
use crate::raw::RawOrderedMap;

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map with room for at least `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the node
    /// storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::{NaturalOrder, OrderedMap};
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(NaturalOrder, 32)?;
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    pub fn with_capacity(comparator: C, capacity: usize) -> Result<Self> {
        Ok(OrderedMap {
            raw: RawOrderedMap::with_capacity(comparator, capacity)?,
        })
    }

    /// Returns the number of entries the map can hold without allocating.
    ///
    /// Slots released by [`remove`](OrderedMap::remove) and
    /// [`clear`](OrderedMap::clear) count towards the capacity.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves room for at least `additional` more entries, so that the next
    /// `additional` calls to [`put`](OrderedMap::put) cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the storage
    /// cannot grow; the map is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::natural()?;
    /// map.try_reserve(10)?;
    /// for i in 0..10 {
    ///     map.put(i, i)?;
    /// }
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.raw.try_reserve(additional)
    }
}
