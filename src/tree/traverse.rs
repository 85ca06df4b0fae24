//! Non-recursive walks backing [`Tree::traverse`][super::Tree::traverse]. The in-order walk lives
//! in [`Iter`][super::Iter].

use std::collections::VecDeque;

use super::Node;

/// Visits the root, then every node one level down (left to right), and so on outwards.
pub(super) fn breadth_first<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut result = Vec::new();
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        result.push(&node.value);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
    result
}

/// Visits the left subtree, then the right subtree, then the node itself.
pub(super) fn postorder<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut result = Vec::new();

    // The flag records whether the node's children have already been pushed. Once they have,
    // popping the node again means both subtrees are done.
    let mut stack: Vec<(&Node<T>, bool)> = root.into_iter().map(|n| (n, false)).collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            result.push(&node.value);
            continue;
        }
        stack.push((node, true));
        // Right first so the left subtree is popped (and finished) first.
        stack.extend(node.right.as_deref().map(|n| (n, false)));
        stack.extend(node.left.as_deref().map(|n| (n, false)));
    }
    result
}
