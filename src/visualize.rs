//! A [`SortObserver`] that prints each step of a sort to a terminal, highlighting the elements
//! that just traded places.

use std::fmt;
use std::io::{self, Write};

use colored::Colorize;

use crate::sort::SortObserver;

/// Width of the rule printed above and below each rendering of the data.
const RULE_WIDTH: usize = 50;

/// Prints the data at the start of every pass and after every swap. The element that moved right
/// is shown in green and the one that moved left in red.
///
/// Observer hooks can't fail, so the first write error is kept and later output is skipped. Call
/// [`Visualizer::finish`] to find out whether everything was written.
///
/// # Examples
///
/// ```
/// use bst_sort::sort::Sorter;
/// use bst_sort::visualize::Visualizer;
///
/// let mut data = [2, 1];
/// let mut visualizer = Visualizer::new(Vec::new());
/// Sorter::Bubble.sort_observed(&mut data, &mut visualizer);
///
/// let output = String::from_utf8(visualizer.finish().unwrap()).unwrap();
/// assert!(output.contains("Swapping: 2 <-> 1"));
/// ```
pub struct Visualizer<W> {
    out: W,
    error: Option<io::Error>,
}

impl Visualizer<io::Stdout> {
    /// A `Visualizer` printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> Visualizer<W>
where
    W: Write,
{
    /// A `Visualizer` printing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes the output and hands it back, or returns the first error hit while writing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn print_data<T: fmt::Display>(
        &mut self,
        data: &[T],
        green: Option<usize>,
        red: Option<usize>,
    ) {
        let result = self.write_data(data, green, red);
        self.record(result);
    }

    fn write_data<T: fmt::Display>(
        &mut self,
        data: &[T],
        green: Option<usize>,
        red: Option<usize>,
    ) -> io::Result<()> {
        let rule = "_".repeat(RULE_WIDTH);
        writeln!(self.out, "{rule}")?;
        for (i, value) in data.iter().enumerate() {
            let value = value.to_string();
            if Some(i) == green {
                write!(self.out, "{} ", value.green())?;
            } else if Some(i) == red {
                write!(self.out, "{} ", value.red())?;
            } else {
                write!(self.out, "{value} ")?;
            }
        }
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl<T, W> SortObserver<T> for Visualizer<W>
where
    T: fmt::Display,
    W: Write,
{
    fn pass_started(&mut self, data: &[T]) {
        if self.error.is_none() {
            self.print_data(data, None, None);
        }
    }

    fn swapped(&mut self, data: &[T], moved_left: usize, moved_right: usize) {
        if self.error.is_some() {
            return;
        }
        // Report the pair in the order it was in before the swap.
        let result = writeln!(
            self.out,
            "Swapping: {} <-> {}",
            data[moved_right], data[moved_left]
        );
        self.record(result);
        if self.error.is_none() {
            self.print_data(data, Some(moved_right), Some(moved_left));
        }
    }
}
