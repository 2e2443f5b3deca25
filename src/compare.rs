use core::cmp::Ordering;

/// A strict total order over keys of type `K`.
///
/// The order must stay consistent for as long as a key is stored in a map. Any
/// closure `Fn(&K, &K) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```
/// use redblack_map::OrderedMap;
///
/// // Longest strings first, ties broken alphabetically.
/// let mut map: OrderedMap<&str, usize, _> =
///     OrderedMap::new(|a: &&str, b: &&str| b.len().cmp(&a.len()).then(a.cmp(b)))?;
/// map.put("fig", 3)?;
/// map.put("banana", 6)?;
/// map.put("apple", 5)?;
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, ["banana", "apple", "fig"]);
/// # Ok::<(), redblack_map::Error>(())
/// ```
pub trait Comparator<K: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}
