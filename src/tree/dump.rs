use std::fmt;

use super::Node;

/// Prefix added to a parent's padding for each of its children.
const PADDING: &str = "│  ";
const RIGHT_CHILD_EDGE: &str = "└──Right Child: ";
const LEFT_CHILD_SIBLING_EDGE: &str = "├──Left Child: ";
const LEFT_CHILD_EDGE: &str = "└──Left Child: ";

/// A printable outline of a [`Tree`][super::Tree], created by [`Tree::dump`][super::Tree::dump].
///
/// Nodes are written depth first, each on its own line, parent before children and left child
/// before right child. An empty tree renders as an empty string.
///
/// # Examples
///
/// ```
/// use bst_sort::tree::Tree;
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
///
/// assert_eq!(
///     tree.dump().to_string(),
///     "2\n│  ├──Left Child: 1\n│  └──Right Child: 3\n"
/// );
/// ```
pub struct Dump<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> Dump<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }
}

impl<T> fmt::Display for Dump<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (node, padding, edge)
        let mut stack: Vec<(&Node<T>, String, &str)> = self
            .root
            .into_iter()
            .map(|root| (root, String::new(), ""))
            .collect();

        while let Some((node, padding, edge)) = stack.pop() {
            writeln!(f, "{padding}{edge}{}", node.value)?;

            let child_padding = padding + PADDING;
            if let Some(right) = node.right.as_deref() {
                stack.push((right, child_padding.clone(), RIGHT_CHILD_EDGE));
            }
            if let Some(left) = node.left.as_deref() {
                let edge = if node.right.is_some() {
                    LEFT_CHILD_SIBLING_EDGE
                } else {
                    LEFT_CHILD_EDGE
                };
                stack.push((left, child_padding, edge));
            }
        }
        Ok(())
    }
}
