//! LSD radix sort over non-negative integers.
//!
//! Values are bucketed by one decimal digit at a time, starting from the
//! least-significant one. Each pass is stable, so the order established by
//! lower digits survives the passes over higher ones.
//!
//! ```
//! let sorted = lsd_radix::radix_sort(&[170, 45, 75, 90, 2, 802, 2, 66]).unwrap();
//! assert_eq!(sorted, vec![2, 2, 45, 66, 75, 90, 170, 802]);
//! ```
mod error;
mod radixsort;
mod values;

use std::convert::Infallible;
use std::io::{self, Write};

use anyhow::Result;

pub use error::SortError;
pub use radixsort::{digit_at, group, num_digits, Buckets, RADIX};
pub use values::{format_values, parse_values, read_values};

/// Sorts `vals` in ascending order.
///
/// Fails with [`SortError::EmptyInput`] if `vals` is empty.
pub fn radix_sort(vals: &[u64]) -> Result<Vec<u64>> {
    Ok(RadixSorter::new(vals)?.sort())
}

/// Returns the number of decimal digits of the largest value.
pub fn find_longest(vals: &[u64]) -> Result<u32> {
    let max = vals.iter().max().ok_or(SortError::EmptyInput)?;
    Ok(num_digits(*max))
}

/// Sorter over a borrowed slice, with optional per-pass tracing.
pub struct RadixSorter<'a> {
    vals: &'a [u64],
    max_places: u32,
    verbose: bool,
}

impl<'a> RadixSorter<'a> {
    pub fn new(vals: &'a [u64]) -> Result<Self> {
        let max_places = find_longest(vals)?;
        Ok(Self {
            vals,
            max_places,
            verbose: false,
        })
    }

    /// Prints the working sequence and buckets of every pass to stderr.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Number of passes the sort will make.
    pub fn max_places(&self) -> u32 {
        self.max_places
    }

    pub fn sort(&self) -> Vec<u64> {
        let result = self.run(|r, vals, buckets| {
            if self.verbose {
                // A lost trace line must not abort the sort.
                let _ = write_pass(std::io::stderr().lock(), r, vals, buckets);
            }
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(vals) => vals,
            Err(never) => match never {},
        }
    }

    /// Sorts and writes the per-pass trace to `wrt`, regardless of `verbose`.
    pub fn sort_with_trace<W: Write>(&self, mut wrt: W) -> Result<Vec<u64>> {
        let vals = self.run(|r, vals, buckets| write_pass(&mut wrt, r, vals, buckets))?;
        Ok(vals)
    }

    /// Runs every pass, handing the input and buckets of each one to `trace`.
    fn run<E>(
        &self,
        mut trace: impl FnMut(u32, &[u64], &Buckets) -> std::result::Result<(), E>,
    ) -> std::result::Result<Vec<u64>, E> {
        let mut vals = self.vals.to_vec();
        for r in 0..self.max_places {
            let buckets = group(r, &vals);
            trace(r, &vals, &buckets)?;
            vals = buckets.concat();
        }
        Ok(vals)
    }
}

fn write_pass<W: Write>(mut wrt: W, r: u32, vals: &[u64], buckets: &Buckets) -> io::Result<()> {
    writeln!(wrt, ">>> r {} {:?}", r, vals)?;
    writeln!(wrt, "{:?}", buckets)
}
