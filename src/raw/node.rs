use super::handle::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// Red-black tree node: links are handles into the node arena, never owning.
pub(crate) struct Node<K, V> {
    color: Color,
    parent: Handle,
    left: Handle,
    right: Handle,
    // `None` only for the two sentinels.
    entry: Option<(K, V)>,
}

impl<K, V> Node<K, V> {
    /// Creates a BLACK sentinel whose links all point at `NIL`.
    pub(crate) const fn sentinel() -> Self {
        Self {
            color: Color::Black,
            parent: Handle::NIL,
            left: Handle::NIL,
            right: Handle::NIL,
            entry: None,
        }
    }

    /// Creates a new RED leaf hanging below `parent`.
    pub(crate) const fn new(key: K, value: V, parent: Handle) -> Self {
        Self {
            color: Color::Red,
            parent,
            left: Handle::NIL,
            right: Handle::NIL,
            entry: Some((key, value)),
        }
    }

    #[inline]
    pub(crate) const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Handle {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Handle) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Handle {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Handle) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns the key/value pair, or `None` for a sentinel.
    #[inline]
    pub(crate) fn entry(&self) -> Option<(&K, &V)> {
        self.entry.as_ref().map(|(k, v)| (k, v))
    }

    /// Returns the key, panicking if this is a sentinel.
    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.entry.as_ref().expect("`Node::key()` - sentinel has no key!").0
    }

    /// Returns the value mutably, panicking if this is a sentinel.
    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.entry.as_mut().expect("`Node::value_mut()` - sentinel has no value!").1
    }

    /// Exchanges key/value pairs with `other`, leaving both nodes' links and colors in place.
    pub(crate) fn swap_entry(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.entry, &mut other.entry);
    }

    pub(crate) fn into_entry(self) -> Option<(K, V)> {
        self.entry
    }
}
