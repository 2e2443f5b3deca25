use core::cmp::Ordering;

use log::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node, Side};
use crate::compare::Comparator;
use crate::error::Result;

const NIL: Handle = Handle::NIL;
const ANCHOR: Handle = Handle::ANCHOR;

/// The red-black tree backing `OrderedMap`.
///
/// Every link is a [`Handle`] into `nodes`. Slot `NIL` is the read-only BLACK
/// sentinel standing in for absent children, and slot `ANCHOR` is the root
/// anchor whose left child is the true root. Neither is ever counted in `len`.
pub(crate) struct RawOrderedMap<K, V, C> {
    /// Arena storing the sentinels and every real node.
    nodes: Arena<Node<K, V>>,
    /// Number of real nodes.
    len: usize,
    comparator: C,
}

impl<K, V, C> RawOrderedMap<K, V, C> {
    /// Creates an empty tree with room for `capacity` real nodes.
    pub(crate) fn with_capacity(comparator: C, capacity: usize) -> Result<Self> {
        let mut nodes = Arena::new();
        nodes.try_reserve(capacity.saturating_add(Handle::RESERVED))?;
        let nil = nodes.try_alloc(Node::sentinel())?;
        let anchor = nodes.try_alloc(Node::sentinel())?;
        debug_assert_eq!((nil, anchor), (NIL, ANCHOR));

        Ok(Self {
            nodes,
            len: 0,
            comparator,
        })
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns how many more real nodes fit without allocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.nodes.try_reserve(additional)
    }

    /// Returns the true root, or `NIL` for an empty tree.
    #[inline]
    pub(crate) fn root(&self) -> Handle {
        self.left(ANCHOR)
    }

    #[inline]
    fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    fn color(&self, handle: Handle) -> Color {
        self.node(handle).color()
    }

    // NIL stays BLACK; recoloring it is a no-op.
    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        debug_assert!(handle != ANCHOR, "the root anchor is never recolored");
        if handle != NIL {
            self.node_mut(handle).set_color(color);
        }
    }

    #[inline]
    fn parent(&self, handle: Handle) -> Handle {
        self.node(handle).parent()
    }

    // NIL's links are never written, so the sentinel stays read-only.
    #[inline]
    fn set_parent(&mut self, handle: Handle, parent: Handle) {
        if handle != NIL {
            self.node_mut(handle).set_parent(parent);
        }
    }

    #[inline]
    fn child(&self, handle: Handle, side: Side) -> Handle {
        self.node(handle).child(side)
    }

    #[inline]
    fn left(&self, handle: Handle) -> Handle {
        self.child(handle, Side::Left)
    }

    #[inline]
    fn right(&self, handle: Handle) -> Handle {
        self.child(handle, Side::Right)
    }

    #[inline]
    fn set_child(&mut self, handle: Handle, side: Side, child: Handle) {
        debug_assert!(handle != NIL, "NIL never gains children");
        self.node_mut(handle).set_child(side, child);
    }

    /// Returns which side of its parent `handle` hangs on.
    ///
    /// The root always hangs on the anchor's left.
    #[inline]
    fn side_of(&self, handle: Handle) -> Side {
        if self.left(self.parent(handle)) == handle {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Returns the key/value pair stored at `handle`, or `None` for a sentinel.
    #[inline]
    pub(crate) fn entry(&self, handle: Handle) -> Option<(&K, &V)> {
        self.node(handle).entry()
    }

    /// Returns the leftmost real node of the subtree at `handle`.
    fn minimum(&self, mut handle: Handle) -> Handle {
        while self.left(handle) != NIL {
            handle = self.left(handle);
        }
        handle
    }

    fn maximum(&self, mut handle: Handle) -> Handle {
        while self.right(handle) != NIL {
            handle = self.right(handle);
        }
        handle
    }

    /// Returns the in-order minimum of the tree, or `NIL` if empty.
    pub(crate) fn first(&self) -> Handle {
        let root = self.root();
        if root == NIL { NIL } else { self.minimum(root) }
    }

    /// Returns the in-order maximum of the tree, or `NIL` if empty.
    pub(crate) fn last(&self) -> Handle {
        let root = self.root();
        if root == NIL { NIL } else { self.maximum(root) }
    }

    /// Returns the in-order successor of a real node, or `NIL` past the maximum.
    pub(crate) fn successor(&self, handle: Handle) -> Handle {
        let right = self.right(handle);
        if right != NIL {
            return self.minimum(right);
        }

        // Climb while we are a right child; the first ancestor reached from its left is next.
        let mut node = handle;
        let mut parent = self.parent(node);
        while parent != ANCHOR && node == self.right(parent) {
            node = parent;
            parent = self.parent(node);
        }
        if parent == ANCHOR { NIL } else { parent }
    }

    /// Relinks `handle` and its child on the opposite side of `dir` so that the
    /// child takes `handle`'s place and `handle` moves down towards `dir`.
    ///
    /// In-order key order is preserved; keys and values never move.
    fn rotate(&mut self, handle: Handle, dir: Side) {
        let up = dir.opposite();
        let child = self.child(handle, up);
        debug_assert!(child != NIL, "rotation requires a real child");

        let inner = self.child(child, dir);
        self.set_child(handle, up, inner);
        self.set_parent(inner, handle);

        let parent = self.parent(handle);
        let side = self.side_of(handle);
        self.set_parent(child, parent);
        self.set_child(parent, side, child);

        self.set_child(child, dir, handle);
        self.set_parent(handle, child);
    }

    fn rotate_left(&mut self, handle: Handle) {
        self.rotate(handle, Side::Left);
    }

    fn rotate_right(&mut self, handle: Handle) {
        self.rotate(handle, Side::Right);
    }

    /// Rotates `handle` down towards `dir`.
    fn rotate_towards(&mut self, handle: Handle, dir: Side) {
        match dir {
            Side::Left => self.rotate_left(handle),
            Side::Right => self.rotate_right(handle),
        }
    }

    /// Restores the color invariants after linking a new RED node.
    fn insert_fixup(&mut self, mut node: Handle) {
        // The anchor is BLACK, so a RED parent is never the root and always has a real parent.
        while self.color(self.parent(node)) == Color::Red {
            let parent = self.parent(node);
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.side_of(node) != side {
                // Inner child: turn it into the outer case.
                node = parent;
                self.rotate_towards(node, side);
            }

            let parent = self.parent(node);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate_towards(grandparent, side.opposite());
        }

        let root = self.root();
        self.set_color(root, Color::Black);
    }

    /// Repairs the black-height deficiency left at `node` after splicing out a BLACK node.
    ///
    /// `parent` is passed explicitly because `node` may be `NIL`, whose links are never written.
    fn remove_fixup(&mut self, mut node: Handle, mut parent: Handle) {
        while node != self.root() && self.color(node) == Color::Black {
            let side = if node == self.left(parent) { Side::Left } else { Side::Right };
            let far = side.opposite();
            let mut sibling = self.child(parent, far);

            if self.color(sibling) == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate_towards(parent, side);
                sibling = self.child(parent, far);
            }

            if self.color(self.left(sibling)) == Color::Black && self.color(self.right(sibling)) == Color::Black {
                self.set_color(sibling, Color::Red);
                node = parent;
                parent = self.parent(node);
                continue;
            }

            if self.color(self.child(sibling, far)) == Color::Black {
                let near = self.child(sibling, side);
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate_towards(sibling, far);
                sibling = self.child(parent, far);
            }

            let parent_color = self.color(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            let far_child = self.child(sibling, far);
            self.set_color(far_child, Color::Black);
            self.rotate_towards(parent, side);
            node = self.root();
        }

        self.set_color(node, Color::Black);
    }

    /// Releases every real node exactly once, children before parents.
    pub(crate) fn clear(&mut self) {
        let mut released = 0usize;
        let mut node = self.root();

        while node != NIL {
            if self.left(node) != NIL {
                node = self.left(node);
            } else if self.right(node) != NIL {
                node = self.right(node);
            } else {
                // Detach the leaf before releasing it.
                let parent = self.parent(node);
                let side = self.side_of(node);
                self.set_child(parent, side, NIL);
                self.nodes.free(node);
                released += 1;
                node = if parent == ANCHOR { NIL } else { parent };
            }
        }

        debug_assert_eq!(released, self.len);
        debug_assert_eq!(self.nodes.len(), Handle::RESERVED);
        self.len = 0;
        trace!("cleared ordered map, released {released} nodes");
    }
}

impl<K, V, C: Comparator<K>> RawOrderedMap<K, V, C> {
    /// Descends from the root; returns the node holding an equal key or `NIL`.
    pub(crate) fn search(&self, key: &K) -> Handle {
        let mut current = self.root();
        while current != NIL {
            current = match self.comparator.compare(key, self.node(current).key()) {
                Ordering::Equal => return current,
                Ordering::Less => self.left(current),
                Ordering::Greater => self.right(current),
            };
        }
        NIL
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.entry(self.search(key)).map(|(_, v)| v)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = self.search(key);
        if handle == NIL {
            return None;
        }
        Some(self.node_mut(handle).value_mut())
    }

    /// Inserts or overwrites; returns the previous value if the key was present.
    ///
    /// The node is allocated before any link changes, so a failed allocation
    /// leaves the tree untouched.
    pub(crate) fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        let mut parent = ANCHOR;
        let mut side = Side::Left;
        let mut current = self.root();

        while current != NIL {
            side = match self.comparator.compare(&key, self.node(current).key()) {
                Ordering::Equal => {
                    let old = core::mem::replace(self.node_mut(current).value_mut(), value);
                    return Ok(Some(old));
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = current;
            current = self.child(current, side);
        }

        let node = self.nodes.try_alloc(Node::new(key, value, parent))?;
        self.set_child(parent, side, node);
        self.len += 1;
        self.insert_fixup(node);
        Ok(None)
    }

    /// Removes the entry for `key`, returning it if present.
    pub(crate) fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let target = self.search(key);
        if target == NIL {
            return None;
        }

        // The node physically unlinked always has at most one real child.
        let spliced = if self.left(target) == NIL || self.right(target) == NIL {
            target
        } else {
            self.minimum(self.right(target))
        };
        let child = if self.left(spliced) == NIL {
            self.right(spliced)
        } else {
            self.left(spliced)
        };

        let parent = self.parent(spliced);
        let side = self.side_of(spliced);
        self.set_parent(child, parent);
        self.set_child(parent, side, child);

        if self.color(spliced) == Color::Black {
            self.remove_fixup(child, parent);
        }

        let mut removed = self.nodes.take(spliced);
        if spliced != target {
            // The successor's pair moves into the target, which keeps its links and color.
            removed.swap_entry(self.node_mut(target));
        }
        self.len -= 1;
        removed.into_entry()
    }
}
