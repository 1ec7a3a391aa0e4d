// Depth-first traversals over the node arena.
//
// All walks keep an explicit stack, so a degenerate (unbalanced) tree of
// any depth is traversed without growing the call stack.

use crate::node::{Node, NodeId};

/// Visit node, then left subtree, then right subtree.
pub fn preorder<T, F>(arena: &[Node<T>], root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&T),
{
    let mut stack: Vec<NodeId> = root.into_iter().collect();
    while let Some(id) = stack.pop() {
        let node = &arena[id];
        visit(&node.element);
        // Right goes first so left is popped first.
        stack.extend(node.right);
        stack.extend(node.left);
    }
}

/// Visit left subtree, then node, then right subtree (ascending order).
pub fn inorder<T, F>(arena: &[Node<T>], root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&T),
{
    for element in Iter::new(arena, root) {
        visit(element);
    }
}

/// Visit left subtree, then right subtree, then node.
pub fn postorder<T, F>(arena: &[Node<T>], root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&T),
{
    // (node, children already pushed)
    let mut stack: Vec<(NodeId, bool)> = root.map(|r| (r, false)).into_iter().collect();
    while let Some((id, expanded)) = stack.pop() {
        let node = &arena[id];
        if expanded {
            visit(&node.element);
        } else {
            stack.push((id, true));
            stack.extend(node.right.map(|r| (r, false)));
            stack.extend(node.left.map(|l| (l, false)));
        }
    }
}

/// Ascending-order iterator over the elements of a set.
pub struct Iter<'a, T> {
    arena: &'a [Node<T>],
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a [Node<T>], root: Option<NodeId>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
            remaining: if root.is_some() { arena.len() } else { 0 },
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut id: Option<NodeId>) {
        while let Some(i) = id {
            self.stack.push(i);
            id = self.arena[i].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.stack.pop()?;
        let node = &self.arena[id];
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}
