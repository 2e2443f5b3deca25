use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Index of a slot in the node arena.
///
/// The first two slots are reserved for the sentinels, so every real node
/// handle is distinct from [`Handle::NIL`] and [`Handle::ANCHOR`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    /// The always-BLACK "absent child / absent parent" sentinel.
    pub(crate) const NIL: Self = Self::from_index(0);
    /// The root anchor; its left child is the true root of the tree.
    pub(crate) const ANCHOR: Self = Self::from_index(1);
    /// Number of arena slots taken by the sentinels.
    pub(crate) const RESERVED: usize = 2;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawHandle).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
