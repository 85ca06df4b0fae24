//! Two classroom `O(N^2)` sorting algorithms. Neither has any practical advantage over
//! [`slice::sort`]; they exist to be read, stepped through and (optionally) watched.
//!
//! Both sort in place in ascending order. Sorting a slice of length 0 or 1 does nothing.
//!
//! # Examples
//!
//! ```
//! use bst_sort::sort::{bubble_sort, insertion_sort, Sorter};
//!
//! let mut xs = [5, 2, 9, 1];
//! bubble_sort(&mut xs);
//! assert_eq!(xs, [1, 2, 5, 9]);
//!
//! let mut ys = vec!["pear", "fig", "apple"];
//! insertion_sort(&mut ys);
//! assert_eq!(ys, ["apple", "fig", "pear"]);
//!
//! let sorter: Sorter = "bubble".parse().unwrap();
//! let mut zs = [3, 1, 2];
//! sorter.sort(&mut zs);
//! assert_eq!(zs, [1, 2, 3]);
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::Error;

/// Hooks for watching a sort make progress. Every method has a no-op default so implementors
/// only need to override what they care about. `()` is the observer that ignores everything.
pub trait SortObserver<T> {
    /// Called at the start of each outer pass over the unsorted part of `data`.
    fn pass_started(&mut self, data: &[T]) {
        let _ = data;
    }

    /// Called right after two neighbouring elements were swapped. `data[moved_left]` is the
    /// element that just moved one slot to the left and `data[moved_right]` the one that moved
    /// one slot to the right.
    fn swapped(&mut self, data: &[T], moved_left: usize, moved_right: usize) {
        let _ = (data, moved_left, moved_right);
    }
}

impl<T> SortObserver<T> for () {}

/// Sorts `data` in place by repeatedly bubbling the largest unsorted element to the back.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    bubble_sort_observed(data, &mut ());
}

/// [`bubble_sort`], reporting every pass and swap to `observer`.
pub fn bubble_sort_observed<T, O>(data: &mut [T], observer: &mut O)
where
    T: Ord,
    O: SortObserver<T> + ?Sized,
{
    if data.len() < 2 {
        return;
    }

    let mut swaps = 0usize;
    // After each pass everything from `end - 1` onwards is in its final position.
    for end in (2..=data.len()).rev() {
        observer.pass_started(data);
        for i in 0..end - 1 {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                swaps += 1;
                observer.swapped(data, i, i + 1);
            }
        }
    }
    debug!("bubble sort of {} elements made {swaps} swaps", data.len());
}

/// Sorts `data` in place by growing a sorted prefix one element at a time, sinking each new
/// element left until it's no smaller than its neighbour. Runs best on nearly sorted input.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    insertion_sort_observed(data, &mut ());
}

/// [`insertion_sort`], reporting every swap to `observer`.
pub fn insertion_sort_observed<T, O>(data: &mut [T], observer: &mut O)
where
    T: Ord,
    O: SortObserver<T> + ?Sized,
{
    let mut swaps = 0usize;
    for outer in 1..data.len() {
        let mut inner = outer;
        while inner > 0 && data[inner] < data[inner - 1] {
            data.swap(inner, inner - 1);
            swaps += 1;
            observer.swapped(data, inner - 1, inner);
            inner -= 1;
        }
    }
    debug!("insertion sort of {} elements made {swaps} swaps", data.len());
}

/// A sorting algorithm picked at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sorter {
    /// See [`bubble_sort`].
    Bubble,
    /// See [`insertion_sort`].
    Insertion,
}

impl Sorter {
    /// Every supported sorter.
    pub const ALL: [Self; 2] = [Self::Bubble, Self::Insertion];

    /// Sorts `data` in place.
    pub fn sort<T: Ord>(self, data: &mut [T]) {
        self.sort_observed(data, &mut ());
    }

    /// Sorts `data` in place, reporting progress to `observer`.
    pub fn sort_observed<T, O>(self, data: &mut [T], observer: &mut O)
    where
        T: Ord,
        O: SortObserver<T> + ?Sized,
    {
        match self {
            Self::Bubble => bubble_sort_observed(data, observer),
            Self::Insertion => insertion_sort_observed(data, observer),
        }
    }
}

impl fmt::Display for Sorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
        })
    }
}

impl FromStr for Sorter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "insertion" => Ok(Self::Insertion),
            _ => Err(Error::InvalidSorter(s.to_string())),
        }
    }
}
