//! The growable vector type and its operation surface.

use std::cmp::Ordering;
use std::fmt;

use crate::error::VecError;
use crate::raw::RawBuf;

/// Capacity of the first growth from an empty vector. Subsequent growths
/// double, which amortizes reallocation cost to O(1) per push.
const INITIAL_CAPACITY: usize = 8;

/// A contiguous, growable vector with explicit, fallible allocation.
///
/// `ZVec` differs from `std::vec::Vec` in three deliberate ways:
///
/// - Every allocating operation returns `Result`; allocation failure is a
///   recoverable [`VecError::AllocationFailed`], never an abort, and leaves
///   the vector unchanged.
/// - [`reserve`](ZVec::reserve) and [`with_capacity`](ZVec::with_capacity)
///   allocate *exactly* the requested slot count, so capacity is fully
///   caller-predictable (only [`push`](ZVec::push) applies the doubling
///   policy).
/// - Index access ([`at`](ZVec::at), [`last`](ZVec::last)) returns
///   `Result` with [`VecError::OutOfRange`] instead of panicking.
///
/// The vector exclusively owns its buffer. It is not `Clone`: duplicating
/// the contents requires allocation, which this crate never performs
/// implicitly or infallibly. Move semantics rule out aliased owners.
///
/// For zero-sized element types no allocation is ever made and
/// [`capacity`](ZVec::capacity) reports `usize::MAX`.
pub struct ZVec<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> ZVec<T> {
    /// Create an empty vector without allocating.
    pub fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Create an empty vector with exactly `cap` slots pre-allocated.
    ///
    /// `cap == 0` allocates nothing. On failure nothing is allocated and
    /// the error is returned.
    pub fn with_capacity(cap: usize) -> Result<Self, VecError> {
        Ok(Self {
            buf: RawBuf::with_capacity(cap)?,
            len: 0,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated element slots. Never less than [`len`](ZVec::len).
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Grow the allocation to exactly `new_cap` slots.
    ///
    /// A successful no-op when `new_cap <= capacity()`; the vector never
    /// shrinks implicitly. Existing elements and their order are preserved.
    /// On failure the vector is unchanged. After a successful reserve,
    /// pushes up to `new_cap` elements cannot fail.
    pub fn reserve(&mut self, new_cap: usize) -> Result<(), VecError> {
        self.buf.grow_exact(new_cap)
    }

    /// Append `value`, growing the buffer if it is full.
    ///
    /// Growth goes to `max(8, capacity * 2)`. The growth happens before
    /// `value` is stored, so on [`VecError::AllocationFailed`] the vector
    /// is unchanged; `value` itself is dropped. Callers that cannot afford
    /// to lose the value should [`reserve`](ZVec::reserve) first — with
    /// spare capacity, `push` cannot fail.
    pub fn push(&mut self, value: T) -> Result<(), VecError> {
        if self.len == self.buf.cap() {
            let new_cap = INITIAL_CAPACITY.max(self.buf.cap().saturating_mul(2));
            self.buf.grow_exact(new_cap)?;
        }
        self.buf.write(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` if the vector is
    /// empty. Popping from an empty vector is a benign no-op, not an error.
    ///
    /// The element is moved out, so its storage slot holds no stale value
    /// afterwards. Capacity is never reduced by `pop`.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buf.take(self.len))
    }

    /// Borrow the element at `index`, or [`VecError::OutOfRange`] if
    /// `index >= len()`. Never an unchecked access.
    pub fn at(&self, index: usize) -> Result<&T, VecError> {
        self.as_slice().get(index).ok_or(VecError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Mutably borrow the element at `index`, or [`VecError::OutOfRange`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VecError::OutOfRange { index, len })
    }

    /// Borrow the last element, or [`VecError::OutOfRange`] if empty.
    pub fn last(&self) -> Result<&T, VecError> {
        if self.len == 0 {
            return Err(VecError::OutOfRange { index: 0, len: 0 });
        }
        self.at(self.len - 1)
    }

    /// Mutably borrow the last element, or [`VecError::OutOfRange`] if empty.
    pub fn last_mut(&mut self) -> Result<&mut T, VecError> {
        if self.len == 0 {
            return Err(VecError::OutOfRange { index: 0, len: 0 });
        }
        self.at_mut(self.len - 1)
    }

    /// Remove and return the element at `index`, shifting every later
    /// element left by one. Preserves relative order; O(len − index).
    ///
    /// Returns `None` without touching the vector when `index >= len()` —
    /// a benign no-op, not an error.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let value = self.buf.take(index);
        self.buf.shift_tail_left(index, self.len);
        self.len -= 1;
        Some(value)
    }

    /// Remove and return the element at `index` by moving the last element
    /// into its place. O(1); does not preserve order.
    ///
    /// Returns `None` without touching the vector when `index >= len()`.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let value = self.buf.take(index);
        self.len -= 1;
        if index != self.len {
            let last = self.buf.take(self.len);
            self.buf.write(index, last);
        }
        Some(value)
    }

    /// Drop all live elements. Capacity is retained — not equivalent to
    /// [`release`](ZVec::release).
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        self.buf.drop_prefix(len);
    }

    /// Drop all live elements and free the allocation, returning the
    /// vector to the [`new`](ZVec::new) state. Idempotent: releasing an
    /// already-empty vector is a safe no-op.
    ///
    /// Dropping the vector performs the same release automatically;
    /// `release` exists for callers that want to return memory while
    /// keeping the handle alive for reuse.
    pub fn release(&mut self) {
        self.clear();
        self.buf.release();
    }

    /// Shrink the allocation to exactly `len()` slots, best-effort.
    ///
    /// An empty vector frees its allocation entirely (capacity 0). If the
    /// shrinking reallocation fails, the vector silently keeps its prior,
    /// larger capacity — shrinking is an optimization, never an error.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            self.buf.release();
            return;
        }
        self.buf.shrink_exact(self.len);
    }

    /// Sort the live elements in place with a caller-supplied three-way
    /// comparator. Not stable: equal elements may be reordered.
    ///
    /// The comparator binds at call time, not at instantiation time, so
    /// the same vector can be sorted under different keys by successive
    /// calls. With fewer than two elements this is a no-op and the
    /// comparator is never invoked.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
    }

    /// Sort the live elements in place by `T`'s natural order. Not stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b));
    }

    /// Borrow the live elements `[0, len)` as a slice, in index order.
    pub fn as_slice(&self) -> &[T] {
        self.buf.slice(self.len)
    }

    /// Mutably borrow the live elements `[0, len)` as a slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.slice_mut(self.len)
    }

    /// Iterate over borrowed elements in index order.
    ///
    /// The iterator borrows the vector, so structural mutation (push,
    /// remove) during iteration is rejected at compile time. In-place
    /// mutation of element *contents* is available via
    /// [`iter_mut`](ZVec::iter_mut).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate over mutably borrowed elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Default for ZVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ZVec<T> {
    fn drop(&mut self) {
        // Element destructors first; RawBuf's own Drop frees the allocation.
        self.buf.drop_prefix(self.len);
    }
}

impl<T: fmt::Debug> fmt::Debug for ZVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
