//! The orders in which [`Tree::traverse`][crate::tree::Tree::traverse] can visit a tree.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which order to visit a tree's values in.
///
/// Every traversal is iterative and visits each node exactly once, so they all take `O(N)` time
/// and at most `O(N)` extra space for their stack or queue.
///
/// # Examples
///
/// ```
/// use bst_sort::traversal::Traversal;
///
/// assert_eq!("inorder".parse(), Ok(Traversal::Inorder));
/// assert_eq!("POST".parse(), Ok(Traversal::Postorder));
/// assert!("sideways".parse::<Traversal>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Visits the root and then works outwards one level at a time, left to right. Note that this
    /// is a breadth-first (level-order) walk and *not* the depth-first root-left-right order the
    /// name usually refers to.
    Preorder,
    /// Left subtree, then the node, then the right subtree. This yields values in ascending order.
    Inorder,
    /// Left subtree, then the right subtree, then the node.
    Postorder,
}

impl Traversal {
    /// Every supported traversal.
    pub const ALL: [Self; 3] = [Self::Preorder, Self::Inorder, Self::Postorder];

    fn name(self) -> &'static str {
        match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Traversal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preorder" | "pre" => Ok(Self::Preorder),
            "inorder" | "in" => Ok(Self::Inorder),
            "postorder" | "post" => Ok(Self::Postorder),
            _ => Err(Error::InvalidTraversal(s.to_string())),
        }
    }
}
