use alloc::string::String;
use alloc::vec::Vec;

/// Supplies the row count and per-row text to a [`crate::Recycler`].
///
/// Implementations must be deterministic for a given row while attached. The engine only asks
/// for text of rows in `0..total_row_count()`.
pub trait DataSource {
    fn total_row_count(&self) -> usize;

    fn text_for_row(&self, row: usize) -> String;
}

impl<T: AsRef<str>> DataSource for [T] {
    fn total_row_count(&self) -> usize {
        self.len()
    }

    fn text_for_row(&self, row: usize) -> String {
        self.get(row).map(|s| String::from(s.as_ref())).unwrap_or_default()
    }
}

impl<T: AsRef<str>> DataSource for Vec<T> {
    fn total_row_count(&self) -> usize {
        self.len()
    }

    fn text_for_row(&self, row: usize) -> String {
        self.as_slice().text_for_row(row)
    }
}

/// A [`DataSource`] built from a row count and a text closure.
pub struct FnDataSource<F> {
    count: usize,
    text: F,
}

impl<F: Fn(usize) -> String> FnDataSource<F> {
    pub fn new(count: usize, text: F) -> Self {
        Self { count, text }
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }
}

impl<F: Fn(usize) -> String> DataSource for FnDataSource<F> {
    fn total_row_count(&self) -> usize {
        self.count
    }

    fn text_for_row(&self, row: usize) -> String {
        (self.text)(row)
    }
}

impl<F> core::fmt::Debug for FnDataSource<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnDataSource")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
