// Node layout and per-node height bookkeeping

/// Index of a node in the set's arena.
pub type NodeId = usize;

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A tree node. Children are arena indices; each index is held by exactly
/// one slot in the whole tree.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub element: T,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    /// Height of the subtree rooted here (leaf = 0).
    pub height: i32,
}

impl<T> Node<T> {
    /// A fresh leaf holding `element`.
    pub fn leaf(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// Height of an optional subtree; an absent subtree has height -1.
#[inline]
pub fn height<T>(arena: &[Node<T>], id: Option<NodeId>) -> i32 {
    id.map_or(-1, |i| arena[i].height)
}

/// Recompute the cached height of `id` from its children.
#[inline]
pub fn update_height<T>(arena: &mut [Node<T>], id: NodeId) {
    let l = height(arena, arena[id].left);
    let r = height(arena, arena[id].right);
    arena[id].height = 1 + l.max(r);
}

/// Left height minus right height.
#[inline]
pub fn balance_factor<T>(arena: &[Node<T>], id: NodeId) -> i32 {
    height(arena, arena[id].left) - height(arena, arena[id].right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_height_zero() {
        let n = Node::leaf(5);
        assert!(n.is_leaf());
        assert_eq!(n.height, 0);
        assert_eq!(height(&[n], Some(0)), 0);
    }

    #[test]
    fn absent_subtree_has_height_minus_one() {
        let arena: [Node<u8>; 0] = [];
        assert_eq!(height(&arena, None), -1);
    }

    #[test]
    fn update_height_uses_taller_child() {
        // 0 -> left 1 -> left 2
        let mut arena = vec![Node::leaf(3), Node::leaf(2), Node::leaf(1)];
        arena[1].left = Some(2);
        arena[0].left = Some(1);
        update_height(&mut arena, 1);
        update_height(&mut arena, 0);
        assert_eq!(arena[0].height, 2);
        assert_eq!(balance_factor(&arena, 0), 2);
        assert_eq!(balance_factor(&arena, 2), 0);
    }

    #[test]
    fn child_accessors_follow_side() {
        let mut n = Node::leaf('m');
        n.set_child(Side::Right, Some(4));
        assert_eq!(n.child(Side::Right), Some(4));
        assert_eq!(n.child(Side::Left), None);
        assert!(!n.is_leaf());
    }
}
