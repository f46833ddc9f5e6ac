//! # Fixed Collections
//!
//! Read-only, bounds-checked views over sequences already owned by a
//! [`Block`](crate::Block) or [`Receipt`](crate::Receipt). Indices are signed
//! so that host callers passing a negative index get an error rather than a
//! wrapped-around lookup.

use crate::errors::TypesError;
use crate::header::Header;
use crate::receipt::Log;
use crate::transaction::Transaction;

/// A fixed-length, zero-indexed view over a borrowed slice.
#[derive(Debug)]
pub struct FixedView<'a, T> {
    items: &'a [T],
}

// Manual impls: a view is copyable regardless of whether `T` is.
impl<T> Clone for FixedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FixedView<'_, T> {}

impl<'a, T> FixedView<'a, T> {
    /// Wrap the owner's slice.
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Wrap a slice owned by a record type defined outside this crate.
    ///
    /// Only owning containers (such as a message batch) call this; host code
    /// receives views from its records.
    #[doc(hidden)]
    pub fn from_owner(items: &'a [T]) -> Self {
        Self::new(items)
    }

    /// Number of elements in the view.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Element at `index`, or [`TypesError::IndexOutOfBounds`] outside `[0, size)`.
    pub fn get(&self, index: isize) -> Result<&'a T, TypesError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get(i))
            .ok_or(TypesError::IndexOutOfBounds {
                index,
                size: self.items.len(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<'a, T> IntoIterator for FixedView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Uncle headers of a block.
pub type Headers<'a> = FixedView<'a, Header>;

/// Transactions of a block.
pub type Transactions<'a> = FixedView<'a, Transaction>;

/// Log entries of a receipt.
pub type Logs<'a> = FixedView<'a, Log>;
