use bst_sort::{Traversal, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                bst.add(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &xs {
        tree.remove(x);
    }

    tree.is_empty() && tree.height() == 0 && tree.iter().next().is_none()
}

#[quickcheck]
fn inorder_is_sorted_and_distinct(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    let inorder: Vec<i32> = tree.traverse(Traversal::Inorder).into_iter().copied().collect();
    inorder == expected
}

#[quickcheck]
fn every_traversal_visits_every_value_once(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    Traversal::ALL.into_iter().all(|order| {
        let mut visited = tree.traverse(order);
        visited.sort_unstable();
        visited.into_iter().eq(tree.iter())
    })
}

#[quickcheck]
fn height_is_bounded_by_len(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    // A tree of N nodes is at least as tall as a perfectly balanced one and at most N tall.
    let min_height = (usize::BITS - tree.len().leading_zeros()) as usize;
    (min_height..=tree.len()).contains(&tree.height())
}
