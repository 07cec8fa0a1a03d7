//! Iteration over vector elements.
//!
//! Borrowed iteration reuses the slice iterators via
//! [`ZVec::iter`]/[`ZVec::iter_mut`]; this module adds the consuming
//! [`IntoIter`] and the three `IntoIterator` impls. Because every borrowed
//! iterator holds a borrow of the vector, structural mutation during
//! iteration (push, remove) is a compile-time borrow error rather than a
//! runtime hazard.

use std::fmt;
use std::mem;

use crate::raw::RawBuf;
use crate::vec::ZVec;

/// A consuming iterator that moves elements out of a [`ZVec`].
///
/// Yields elements in index order. Dropping the iterator early drops the
/// remaining elements and frees the buffer.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let value = self.buf.take(self.start);
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        Some(self.buf.take(self.end))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Drop unconsumed elements; RawBuf's Drop frees the allocation.
        while self.start < self.end {
            drop(self.buf.take(self.start));
            self.start += 1;
        }
    }
}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &(self.end - self.start))
            .finish()
    }
}

impl<T> IntoIterator for ZVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let end = self.len;
        // Detach the buffer so the vector's Drop sees an empty shell.
        self.len = 0;
        let buf = mem::replace(&mut self.buf, RawBuf::new());
        IntoIter { buf, start: 0, end }
    }
}

impl<'a, T> IntoIterator for &'a ZVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ZVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
