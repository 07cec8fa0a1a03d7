//! A contiguous, growable vector with explicit, fallible allocation.
//!
//! [`ZVec<T>`] is a single-owner dynamic array in the spirit of
//! `std::vec::Vec`, rebuilt around three contracts the standard type does
//! not offer:
//!
//! - **Fallible allocation.** Every allocating operation returns
//!   `Result`; an out-of-memory condition surfaces as
//!   [`VecError::AllocationFailed`] with the vector left byte-for-byte
//!   unchanged, so callers can shed load and retry.
//! - **Exact reservation.** [`ZVec::reserve`] and
//!   [`ZVec::with_capacity`] allocate exactly the requested slot count.
//!   Only [`ZVec::push`] applies the growth policy: double the capacity,
//!   starting at 8, which amortizes reallocation to O(1) per push.
//! - **Checked access.** [`ZVec::at`] and [`ZVec::last`] return
//!   [`VecError::OutOfRange`] instead of panicking, treating a bad index
//!   as the anticipatable caller mistake it is.
//!
//! One generic definition serves every element type; the compiler
//! specializes a monomorphic copy per instantiation and resolves each call
//! site statically. There is no runtime type tag, registry, or dispatch
//! table, and an unsupported operation on an element type is a compile
//! error, not a runtime fallback.
//!
//! # Quick start
//!
//! ```rust
//! use zvec::ZVec;
//!
//! let mut primes = ZVec::new();
//! for p in [5u32, 2, 3] {
//!     primes.push(p)?;
//! }
//! primes.sort_by(|a, b| a.cmp(b));
//! assert_eq!(primes.as_slice(), [2, 3, 5]);
//! assert_eq!(*primes.last()?, 5);
//! # Ok::<(), zvec::VecError>(())
//! ```
//!
//! # Safety
//!
//! `unsafe` is confined to the private `raw` module, which owns the
//! allocation and exposes capacity-checked primitives. Everything else in
//! the crate, iterators included, is safe code on top of them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod iter;
mod raw;
pub mod vec;

pub use error::VecError;
pub use iter::IntoIter;
pub use vec::ZVec;
