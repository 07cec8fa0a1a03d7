//! Low-level buffer primitives for vector storage.
//!
//! This is the only module in the crate permitted to contain `unsafe`
//! code. [`RawBuf`] owns the allocation — a pointer plus a slot count —
//! and exposes a small set of checked primitives; `vec.rs` and `iter.rs`
//! build the public API on top of them without further `unsafe`. Each
//! unsafe block carries a `// SAFETY:` comment.
//!
//! `RawBuf` tracks capacity only. Which slots hold live values is the
//! caller's bookkeeping: [`RawBuf::write`] expects a vacant slot and
//! [`RawBuf::take`] expects an occupied one. Slot indices are asserted
//! against capacity, so misuse within the crate surfaces as a panic or a
//! leak, never as an out-of-bounds access.
//!
//! Zero-sized element types never allocate: the buffer reports capacity
//! `usize::MAX` and every allocation operation is a no-op.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::VecError;

/// An owned, uninitialized allocation of `cap` slots of `T`.
///
/// Dropping a `RawBuf` frees the allocation without running element
/// destructors — the owner must drop live elements first (see
/// [`RawBuf::drop_prefix`]).
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf owns its allocation exclusively; moving it across threads
// transfers that ownership wholesale. Element access follows `T`'s bounds.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access to RawBuf only hands out `&T` via `slice()`.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Create an empty buffer with no allocation.
    pub(crate) fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: if mem::size_of::<T>() == 0 { usize::MAX } else { 0 },
            _marker: PhantomData,
        }
    }

    /// Create a buffer with exactly `cap` slots pre-allocated.
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, VecError> {
        let mut buf = Self::new();
        buf.grow_exact(cap)?;
        Ok(buf)
    }

    /// Number of allocated slots.
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Grow the allocation to exactly `new_cap` slots, preserving the
    /// contents of existing slots.
    ///
    /// A no-op when `new_cap <= cap`. On failure the buffer is unchanged:
    /// a failed `realloc` leaves the original block valid.
    pub(crate) fn grow_exact(&mut self, new_cap: usize) -> Result<(), VecError> {
        if new_cap <= self.cap {
            return Ok(());
        }
        // `Layout::array` rejects slot counts whose byte size would
        // overflow isize::MAX, so no separate overflow check is needed.
        let new_layout = Layout::array::<T>(new_cap)
            .map_err(|_| VecError::AllocationFailed { requested: new_cap })?;

        let new_ptr = if self.cap == 0 {
            // SAFETY: new_layout has non-zero size — new_cap > cap == 0 and
            // T is not zero-sized (ZST buffers start at cap usize::MAX).
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap)
                .expect("existing capacity was validated when it was allocated");
            // SAFETY: ptr was allocated by this allocator with old_layout,
            // and new_layout.size() is non-zero and does not overflow.
            unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };

        match NonNull::new(new_ptr.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => Err(VecError::AllocationFailed { requested: new_cap }),
        }
    }

    /// Shrink the allocation to exactly `new_cap` slots, best-effort.
    ///
    /// The first `new_cap` slots keep their contents. If the reallocation
    /// fails the buffer silently keeps its prior, larger capacity. Slots
    /// at `[new_cap, cap)` must not hold live values.
    pub(crate) fn shrink_exact(&mut self, new_cap: usize) {
        if mem::size_of::<T>() == 0 || new_cap >= self.cap {
            return;
        }
        if new_cap == 0 {
            self.release();
            return;
        }
        let old_layout = Layout::array::<T>(self.cap)
            .expect("existing capacity was validated when it was allocated");
        let new_size = new_cap * mem::size_of::<T>();
        // SAFETY: ptr was allocated with old_layout; new_size is non-zero
        // and smaller than the current (already valid) size.
        let new_ptr = unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_size) };
        if let Some(ptr) = NonNull::new(new_ptr.cast::<T>()) {
            self.ptr = ptr;
            self.cap = new_cap;
        }
    }

    /// Free the allocation and reset to the empty state.
    ///
    /// Idempotent. Does not run element destructors; the owner must call
    /// [`RawBuf::drop_prefix`] first if live values remain.
    pub(crate) fn release(&mut self) {
        if mem::size_of::<T>() != 0 && self.cap > 0 {
            let layout = Layout::array::<T>(self.cap)
                .expect("existing capacity was validated when it was allocated");
            // SAFETY: ptr was allocated by this buffer with this layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        }
        // Reset the fields in place: a whole-struct assignment would drop
        // the old value and re-enter release on the freed pointer.
        self.ptr = NonNull::dangling();
        self.cap = if mem::size_of::<T>() == 0 { usize::MAX } else { 0 };
    }

    /// Move `value` into the vacant slot at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= cap`. If the slot already holds a live value,
    /// that value is leaked, not dropped.
    pub(crate) fn write(&mut self, slot: usize, value: T) {
        assert!(slot < self.cap, "slot {slot} out of capacity {}", self.cap);
        // SAFETY: slot < cap, so the pointer is within the allocation
        // (or a valid ZST write to a well-aligned dangling pointer).
        unsafe { ptr::write(self.ptr.as_ptr().add(slot), value) };
    }

    /// Move the value out of the occupied slot at `slot`, leaving it vacant.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= cap`. The slot must hold a live value that no
    /// other slot aliases; taking a vacant slot is undefined behavior.
    pub(crate) fn take(&mut self, slot: usize) -> T {
        assert!(slot < self.cap, "slot {slot} out of capacity {}", self.cap);
        // SAFETY: slot < cap and the caller guarantees the slot is occupied.
        unsafe { ptr::read(self.ptr.as_ptr().add(slot)) }
    }

    /// Shift the occupied slots `(hole, live_end)` left by one, filling the
    /// vacant slot at `hole` and vacating `live_end - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `hole >= live_end` or `live_end > cap`.
    pub(crate) fn shift_tail_left(&mut self, hole: usize, live_end: usize) {
        assert!(hole < live_end, "hole {hole} not before live end {live_end}");
        assert!(
            live_end <= self.cap,
            "live end {live_end} out of capacity {}",
            self.cap
        );
        // SAFETY: both ranges lie within [0, cap); ptr::copy permits overlap.
        unsafe {
            ptr::copy(
                self.ptr.as_ptr().add(hole + 1),
                self.ptr.as_ptr().add(hole),
                live_end - hole - 1,
            );
        }
    }

    /// Borrow the first `len` slots as a slice. All of them must be occupied.
    ///
    /// # Panics
    ///
    /// Panics if `len > cap`.
    pub(crate) fn slice(&self, len: usize) -> &[T] {
        assert!(len <= self.cap, "length {len} out of capacity {}", self.cap);
        // SAFETY: len <= cap and the caller guarantees slots [0, len) are
        // occupied; a dangling pointer is valid for len == 0.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Mutably borrow the first `len` slots. All of them must be occupied.
    ///
    /// # Panics
    ///
    /// Panics if `len > cap`.
    pub(crate) fn slice_mut(&mut self, len: usize) -> &mut [T] {
        assert!(len <= self.cap, "length {len} out of capacity {}", self.cap);
        // SAFETY: as for `slice`, plus &mut self guarantees exclusivity.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }

    /// Drop the live values in slots `[0, len)`, leaving them vacant.
    ///
    /// # Panics
    ///
    /// Panics if `len > cap`.
    pub(crate) fn drop_prefix(&mut self, len: usize) {
        assert!(len <= self.cap, "length {len} out of capacity {}", self.cap);
        // SAFETY: slots [0, len) are occupied (caller contract) and within
        // the allocation; after this call they are vacant.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len)) };
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}
