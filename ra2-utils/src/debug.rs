//! `Debug` helpers for structures that carry whole pixel planes or voxel columns.
//!
//! Decoded assets routinely hold thousands of bytes. Printing them with the
//! derived `Debug` makes log output unreadable, so fields are annotated with
//! `#[debug(with = debug::trimmed_collection_fmt)]` and only the first few
//! elements are shown. Enable the `debug-print-all` feature to get everything.

use std::fmt;

const FIRST_N_ELEMENTS: usize = 4;

pub trait HasLength {
    type Item: fmt::Debug;

    fn element_count(&self) -> usize;
    fn first_n(&self, elements: usize) -> &[Self::Item];
}

impl<T: fmt::Debug> HasLength for [T] {
    type Item = T;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn first_n(&self, elements: usize) -> &[Self::Item] {
        &self[..elements.min(self.len())]
    }
}

impl<T: fmt::Debug> HasLength for Vec<T> {
    type Item = T;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn first_n(&self, elements: usize) -> &[Self::Item] {
        self.as_slice().first_n(elements)
    }
}

impl<T: fmt::Debug, const N: usize> HasLength for [T; N] {
    type Item = T;

    fn element_count(&self) -> usize {
        N
    }

    fn first_n(&self, elements: usize) -> &[Self::Item] {
        self.as_slice().first_n(elements)
    }
}

impl<T: ?Sized + HasLength> HasLength for Box<T> {
    type Item = T::Item;

    fn element_count(&self) -> usize {
        self.as_ref().element_count()
    }

    fn first_n(&self, elements: usize) -> &[Self::Item] {
        self.as_ref().first_n(elements)
    }
}

#[cfg(not(feature = "debug-print-all"))]
pub fn trimmed_collection_fmt<T: ?Sized + HasLength>(n: &T, f: &mut fmt::Formatter) -> fmt::Result {
    let head = n.first_n(FIRST_N_ELEMENTS);
    let rest = n.element_count() - head.len();

    if rest == 0 {
        write!(f, "{:?}", head)
    } else {
        write!(f, "{:?} + {} elements", head, rest)
    }
}

#[cfg(feature = "debug-print-all")]
pub fn trimmed_collection_fmt<T: ?Sized + HasLength>(n: &T, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?}", n.first_n(n.element_count()))
}

pub fn option_trimmed_collection_fmt<T: HasLength>(
    n: &Option<T>,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    match n {
        Some(inner) => {
            write!(f, "Some(")?;
            trimmed_collection_fmt(inner, f)?;
            write!(f, ")")
        }
        None => write!(f, "None"),
    }
}
