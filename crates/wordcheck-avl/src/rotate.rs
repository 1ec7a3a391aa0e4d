// AVL rotations over the node arena.
//
// Each function takes the index of a subtree root and returns the index of
// the node that roots the same subtree afterwards. The caller relinks that
// index into the parent slot.

use tracing::trace;

use crate::node::{Node, NodeId, balance_factor, update_height};

/// Single right rotation: the left child of `n` becomes the subtree root.
///
/// ```text
///       n            l
///      / \          / \
///     l   c   ->   a   n
///    / \              / \
///   a   b            b   c
/// ```
pub fn rotate_right<T>(arena: &mut [Node<T>], n: NodeId) -> NodeId {
    let Some(l) = arena[n].left else {
        return n;
    };
    arena[n].left = arena[l].right;
    arena[l].right = Some(n);
    update_height(arena, n);
    update_height(arena, l);
    l
}

/// Single left rotation: the right child of `n` becomes the subtree root.
pub fn rotate_left<T>(arena: &mut [Node<T>], n: NodeId) -> NodeId {
    let Some(r) = arena[n].right else {
        return n;
    };
    arena[n].right = arena[r].left;
    arena[r].left = Some(n);
    update_height(arena, n);
    update_height(arena, r);
    r
}

/// Left-right double rotation for a left-heavy node whose left child is
/// right-heavy.
pub fn rotate_left_right<T>(arena: &mut [Node<T>], n: NodeId) -> NodeId {
    if let Some(l) = arena[n].left {
        arena[n].left = Some(rotate_left(arena, l));
    }
    rotate_right(arena, n)
}

/// Right-left double rotation for a right-heavy node whose right child is
/// left-heavy.
pub fn rotate_right_left<T>(arena: &mut [Node<T>], n: NodeId) -> NodeId {
    if let Some(r) = arena[n].right {
        arena[n].right = Some(rotate_right(arena, r));
    }
    rotate_left(arena, n)
}

/// Refresh the height of `n` and, if its children differ in height by more
/// than one, restore balance with the matching rotation.
pub fn rebalance<T>(arena: &mut [Node<T>], n: NodeId) -> NodeId {
    update_height(arena, n);
    let bf = balance_factor(arena, n);

    if bf > 1 {
        let heavy_inner = arena[n].left.is_some_and(|l| balance_factor(arena, l) < 0);
        if heavy_inner {
            trace!(node = n, "left-right rotation");
            rotate_left_right(arena, n)
        } else {
            trace!(node = n, "right rotation");
            rotate_right(arena, n)
        }
    } else if bf < -1 {
        let heavy_inner = arena[n].right.is_some_and(|r| balance_factor(arena, r) > 0);
        if heavy_inner {
            trace!(node = n, "right-left rotation");
            rotate_right_left(arena, n)
        } else {
            trace!(node = n, "left rotation");
            rotate_left(arena, n)
        }
    } else {
        n
    }
}
