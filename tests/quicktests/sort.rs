use bst_sort::sort::Sorter;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn sorts_like_std(xs: Vec<i32>) -> bool {
    let mut expected = xs.clone();
    expected.sort();

    Sorter::ALL.into_iter().all(|sorter| {
        let mut actual = xs.clone();
        sorter.sort(&mut actual);
        actual == expected
    })
}

#[quickcheck]
fn sorting_is_idempotent(xs: Vec<String>) -> bool {
    Sorter::ALL.into_iter().all(|sorter| {
        let mut once = xs.clone();
        sorter.sort(&mut once);
        let mut twice = once.clone();
        sorter.sort(&mut twice);
        once == twice
    })
}
