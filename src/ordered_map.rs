use core::fmt;
use core::iter::FusedIterator;

use crate::compare::{Comparator, NaturalOrder};
use crate::error::Result;
use crate::raw::{Handle, RawOrderedMap};

mod capacity;

/// An ordered map based on a [red-black tree].
///
/// Entries are kept in the order defined by the map's [`Comparator`], fixed at
/// construction. The default comparator, [`NaturalOrder`], uses the key's [`Ord`]
/// implementation; any closure `Fn(&K, &K) -> Ordering` works as well.
///
/// [`put`], [`get`] and [`remove`] run in O(log n): the tree rebalances itself
/// on every insertion and removal so that its height never exceeds
/// 2·log<sub>2</sub>(n + 1), even when keys arrive in sorted order.
///
/// Allocation failures are reported as [`Error::OutOfMemory`](crate::Error::OutOfMemory)
/// rather than aborting, and a failed call leaves the map unchanged. A missing
/// key is an ordinary outcome and is reported as `None`.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key changes while it is in the map, or for the
/// comparator to be inconsistent. The resulting behavior is not specified, but
/// is confined to this map and never undefined behavior.
///
/// # Examples
///
/// ```
/// use redblack_map::OrderedMap;
///
/// let mut scores = OrderedMap::natural()?;
/// scores.put("Carol", 92)?;
/// scores.put("Alice", 100)?;
/// scores.put("Bob", 85)?;
///
/// // Overwriting hands back the previous value.
/// assert_eq!(scores.put("Bob", 88)?, Some(85));
/// assert_eq!(scores.get(&"Bob"), Some(&88));
/// assert_eq!(scores.len(), 3);
///
/// // Iteration is in key order.
/// let names: Vec<_> = scores.keys().copied().collect();
/// assert_eq!(names, ["Alice", "Bob", "Carol"]);
///
/// assert_eq!(scores.remove(&"Alice"), Some(100));
/// assert_eq!(scores.remove(&"Alice"), None);
/// # Ok::<(), redblack_map::Error>(())
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [`put`]: OrderedMap::put
/// [`get`]: OrderedMap::get
/// [`remove`]: OrderedMap::remove
pub struct OrderedMap<K, V, C = NaturalOrder> {
    raw: RawOrderedMap<K, V, C>,
}

/// An in-order iterator over the entries of an `OrderedMap`.
///
/// Besides [`Iterator`], it offers the cursor-style [`next_key`](Iter::next_key),
/// [`peek_key`](Iter::peek_key) and [`peek_value`](Iter::peek_value).
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`].
///
/// # Examples
///
/// ```
/// use redblack_map::OrderedMap;
///
/// let mut map = OrderedMap::natural()?;
/// map.put(2, "b")?;
/// map.put(1, "a")?;
///
/// let mut iter = map.iter();
/// assert_eq!(iter.peek_key(), Some(&1));
/// assert_eq!(iter.peek_value(), Some(&"a"));
/// assert_eq!(iter.next_key(), Some(&1));
/// assert_eq!(iter.next(), Some((&2, &"b")));
/// assert_eq!(iter.next_key(), None);
/// # Ok::<(), redblack_map::Error>(())
/// ```
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, C = NaturalOrder> {
    tree: &'a RawOrderedMap<K, V, C>,
    // The pending node; NIL once exhausted.
    next: Handle,
    remaining: usize,
}

/// An iterator over the keys of an `OrderedMap`, in order.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`].
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, C = NaturalOrder> {
    inner: Iter<'a, K, V, C>,
}

/// An iterator over the values of an `OrderedMap`, in key order.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, C = NaturalOrder> {
    inner: Iter<'a, K, V, C>,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap` ordered by `K`'s [`Ord`] implementation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the sentinel
    /// slots cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::natural()?;
    /// map.put(1, "a")?;
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    pub fn natural() -> Result<Self> {
        Self::new(NaturalOrder)
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Makes a new, empty `OrderedMap` ordered by `comparator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the sentinel
    /// slots cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::OrderedMap;
    ///
    /// // Descending order.
    /// let mut map = OrderedMap::new(|a: &i32, b: &i32| b.cmp(a))?;
    /// map.put(1, "a")?;
    /// map.put(2, "b")?;
    /// assert_eq!(map.first_key_value(), Some((&2, &"b")));
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    pub fn new(comparator: C) -> Result<Self> {
        Self::with_capacity(comparator, 0)
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the comparator ordering this map.
    #[must_use]
    pub fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Clears the map, removing all entries.
    ///
    /// The released node slots are kept for reuse by later [`put`](OrderedMap::put)s.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::OrderedMap;
    ///
    /// let mut a = OrderedMap::natural()?;
    /// a.put(1, "a")?;
    /// a.clear();
    /// assert!(a.is_empty());
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.entry(self.raw.first())
    }

    /// Returns the entry with the largest key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.entry(self.raw.last())
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// Creating the iterator descends to the smallest key, O(log n).
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: &self.raw,
            next: self.raw.first(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { inner: self.iter() }
    }
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `Ok(None)` is returned.
    ///
    /// If the map did have this key present, the value is overwritten in place and
    /// the old value is returned. The stored key is not replaced, and the number of
    /// entries does not change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if a node for a new
    /// key cannot be allocated. The map is left untouched in that case.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::natural()?;
    /// assert_eq!(map.put(37, "a")?, None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.put(37, "b")?;
    /// assert_eq!(map.put(37, "c")?, Some("b"));
    /// assert_eq!(map.get(&37), Some(&"c"));
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.raw.put(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::natural()?;
    /// map.put(1, "a")?;
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::natural()?;
    /// map.put(1, "a")?;
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.raw.get_mut(key)
    }

    /// Returns the stored key and its value for a key comparing equal to `key`.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.entry(self.raw.search(key))
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.search(key) != Handle::NIL
    }

    /// Removes a key from the map, returning its value if the key was present.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::natural()?;
    /// map.put(1, "a")?;
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// # Ok::<(), redblack_map::Error>(())
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.raw.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.raw.remove_entry(key)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

impl<'a, K, V, C> Iter<'a, K, V, C> {
    /// Returns the pending key and advances past it, or `None` once exhausted.
    pub fn next_key(&mut self) -> Option<&'a K> {
        self.next().map(|(k, _)| k)
    }

    /// Returns the pending key without advancing.
    #[must_use]
    pub fn peek_key(&self) -> Option<&'a K> {
        self.tree.entry(self.next).map(|(k, _)| k)
    }

    /// Returns the pending value without advancing.
    #[must_use]
    pub fn peek_value(&self) -> Option<&'a V> {
        self.tree.entry(self.next).map(|(_, v)| v)
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let entry = tree.entry(self.next)?;
        self.next = tree.successor(self.next);
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Iter<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_key()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<K, V, C> Clone for Keys<'_, K, V, C> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V, C> fmt::Debug for Keys<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

impl<K, V, C> Clone for Values<'_, K, V, C> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug, C> fmt::Debug for Values<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
