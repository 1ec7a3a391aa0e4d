// BalancedSet: an ordered set backed by an arena-allocated AVL tree.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;
use wordcheck_core::Set;

use crate::SetError;
use crate::node::{Node, NodeId, Side, balance_factor, height, update_height};
use crate::rotate::rebalance;
use crate::traverse::{self, Iter};

/// Construction options for [`BalancedSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SetOptions {
    /// Rebalance after every insertion. When off, the tree is a plain
    /// binary search tree and degenerates on sorted input.
    pub balanced: bool,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self { balanced: true }
    }
}

/// An ordered set of distinct elements stored in a binary search tree.
///
/// With balancing on (the default) the tree is an AVL tree: after every
/// insertion, the heights of the two subtrees of any node differ by at most
/// one, so `add` and `contains` run in O(log n). The balancing flag is fixed
/// for the lifetime of the set.
///
/// Nodes live in a single arena and are only ever appended, so cloning the
/// set is a clone of the arena and reproduces the tree shape exactly.
pub struct BalancedSet<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
    /// Cached tree height; -1 when empty.
    height: i32,
    balanced: bool,
}

impl<T: Ord> BalancedSet<T> {
    /// Create an empty set with balancing enabled.
    pub fn new() -> Self {
        Self::with_balancing(true)
    }

    /// Create an empty set, choosing whether insertions rebalance the tree.
    pub fn with_balancing(balanced: bool) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            height: -1,
            balanced,
        }
    }

    pub fn from_options(options: SetOptions) -> Self {
        Self::with_balancing(options.balanced)
    }

    /// Insert `element` unless an equal element is already present.
    ///
    /// Returns `true` if the element was inserted.
    pub fn add(&mut self, element: T) -> bool {
        let Some(path) = self.descend(&element) else {
            return false;
        };
        self.attach(path, element);
        true
    }

    /// Like [`add`](Self::add), but reports allocation failure instead of
    /// aborting. On error the set is unchanged.
    pub fn try_add(&mut self, element: T) -> Result<bool, SetError> {
        let Some(path) = self.descend(&element) else {
            return Ok(false);
        };
        self.nodes.try_reserve(1)?;
        self.attach(path, element);
        Ok(true)
    }

    /// Returns `true` if an element equal to `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            cur = match element.cmp(&node.element) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Walk from the root towards `element`, recording every node passed and
    /// the side taken. Returns `None` if the element is already present.
    fn descend(&self, element: &T) -> Option<Vec<(NodeId, Side)>> {
        let mut path = Vec::with_capacity((self.height + 1).max(0) as usize);
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            let side = match element.cmp(&node.element) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return None,
            };
            path.push((id, side));
            cur = node.child(side);
        }
        Some(path)
    }

    /// Hang a new leaf below the end of `path`, then retrace the path back to
    /// the root refreshing heights and, when balancing, rotating.
    fn attach(&mut self, path: Vec<(NodeId, Side)>, element: T) {
        let leaf = self.nodes.len();
        self.nodes.push(Node::leaf(element));

        match path.last() {
            None => self.root = Some(leaf),
            Some(&(parent, side)) => self.nodes[parent].set_child(side, Some(leaf)),
        }

        for depth in (0..path.len()).rev() {
            let (id, _) = path[depth];
            let before = self.nodes[id].height;
            let subtree = if self.balanced {
                rebalance(&mut self.nodes, id)
            } else {
                update_height(&mut self.nodes, id);
                id
            };

            if subtree != id {
                match depth.checked_sub(1) {
                    None => self.root = Some(subtree),
                    Some(up) => {
                        let (parent, side) = path[up];
                        self.nodes[parent].set_child(side, Some(subtree));
                    }
                }
            }

            // Ancestors only change if this subtree grew.
            if self.nodes[subtree].height == before {
                break;
            }
        }

        self.height = height(&self.nodes, self.root);
        trace!(size = self.nodes.len(), height = self.height, "inserted element");
    }
}

impl<T> BalancedSet<T> {
    /// Number of elements.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: -1 when empty, 0 for a single element.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether insertions rebalance the tree.
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    /// Call `visit` on every element: node, then left, then right subtree.
    pub fn preorder<F: FnMut(&T)>(&self, visit: F) {
        traverse::preorder(&self.nodes, self.root, visit);
    }

    /// Call `visit` on every element in ascending order.
    pub fn inorder<F: FnMut(&T)>(&self, visit: F) {
        traverse::inorder(&self.nodes, self.root, visit);
    }

    /// Call `visit` on every element: left subtree, right subtree, then node.
    pub fn postorder<F: FnMut(&T)>(&self, visit: F) {
        traverse::postorder(&self.nodes, self.root, visit);
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.root)
    }

    /// Move the contents out, leaving `self` empty with the same balancing
    /// setting.
    pub fn take(&mut self) -> Self {
        let empty = Self {
            nodes: Vec::new(),
            root: None,
            height: -1,
            balanced: self.balanced,
        };
        std::mem::replace(self, empty)
    }

    /// Exchange the entire state of two sets.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Drop every element. The balancing setting is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.height = -1;
    }
}

impl<T: Ord> BalancedSet<T> {
    /// Check ordering, cached heights, element count and (when balancing)
    /// the AVL property. Reports the first violation found.
    pub fn validate(&self) -> Result<(), SetError> {
        let mut reached = 0usize;
        let mut prev: Option<&T> = None;
        for element in self.iter() {
            if prev.is_some_and(|p| p >= element) {
                return Err(SetError::Invariant(format!(
                    "inorder sequence not strictly ascending at position {reached}"
                )));
            }
            prev = Some(element);
            reached += 1;
        }
        if reached != self.nodes.len() {
            return Err(SetError::Invariant(format!(
                "{reached} nodes reachable from root, arena holds {}",
                self.nodes.len()
            )));
        }

        for (id, node) in self.nodes.iter().enumerate() {
            let expected = 1 + height(&self.nodes, node.left).max(height(&self.nodes, node.right));
            if node.height != expected {
                return Err(SetError::Invariant(format!(
                    "node {id} caches height {} but subtrees give {expected}",
                    node.height
                )));
            }
            if self.balanced && balance_factor(&self.nodes, id).abs() > 1 {
                return Err(SetError::Invariant(format!(
                    "node {id} has balance factor {}",
                    balance_factor(&self.nodes, id)
                )));
            }
        }

        if self.height != height(&self.nodes, self.root) {
            return Err(SetError::Invariant(format!(
                "cached tree height {} does not match root height {}",
                self.height,
                height(&self.nodes, self.root)
            )));
        }
        Ok(())
    }
}

impl<T: Clone> BalancedSet<T> {
    /// Deep copy that reports allocation failure instead of aborting.
    ///
    /// The whole arena is reserved before any element is cloned, so a
    /// failure leaves nothing half-built behind.
    pub fn try_clone(&self) -> Result<Self, SetError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(self.nodes.len())?;
        nodes.extend(self.nodes.iter().cloned());
        Ok(Self {
            nodes,
            root: self.root,
            height: self.height,
            balanced: self.balanced,
        })
    }
}

impl<T: Clone> Clone for BalancedSet<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            height: self.height,
            balanced: self.balanced,
        }
    }

    /// Replace this set's tree with a copy of `source`'s, reusing the arena
    /// allocation where possible.
    fn clone_from(&mut self, source: &Self) {
        self.nodes.clone_from(&source.nodes);
        self.root = source.root;
        self.height = source.height;
        self.balanced = source.balanced;
    }
}

impl<T: Ord> Default for BalancedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BalancedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Set<T> for BalancedSet<T> {
    fn add(&mut self, element: T) {
        BalancedSet::add(self, element);
    }

    fn contains(&self, element: &T) -> bool {
        BalancedSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }
}

impl<T: Ord> FromIterator<T> for BalancedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BalancedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a BalancedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
