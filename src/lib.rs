#![no_std]

//! `GrowVec`: a growable contiguous vector with amortized doubling and
//! fail-fast change-tracking cursors.
//!
//! `GrowVec<T>` keeps its elements in a single heap allocation, doubling
//! capacity on demand so that N appends cost O(N) element copies in total.
//! On top of the flat store it provides indexed access, arbitrary
//! insertion and removal with element shifting, bulk range operations
//! (including duplicating a vector into itself), searching, sorting,
//! reversal, and explicit capacity control.
//!
//! This crate is `no_std` compatible (it requires `alloc`). Enable the
//! `std` feature to forward it to the error types:
//! ```toml
//! [dependencies]
//! growvec = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Capacity and growth
//!
//! Length and capacity are tracked separately: the first allocation holds
//! 4 elements and every overflow doubles the capacity, while an empty
//! vector holds no allocation at all. Capacity can also be steered
//! explicitly:
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut numbers = GrowVec::new();
//! assert_eq!(numbers.capacity(), 0); // nothing allocated yet
//!
//! for i in 0..5 {
//!     numbers.push(i);
//! }
//! assert_eq!(numbers.len(), 5);
//! assert_eq!(numbers.capacity(), 8); // 4 doubled once
//!
//! numbers.trim_excess();
//! assert_eq!(numbers.capacity(), 5);
//! ```
//!
//! # Structural versioning and cursors
//!
//! Every structural mutation (anything changing the element count or
//! order) bumps an internal version stamp. A [`Cursor`] snapshots the
//! stamp at creation and holds no borrow of the vector, so the vector
//! stays mutable while the cursor exists; in exchange, every cursor step
//! re-checks the stamp and fails with
//! [`GrowVecError::ConcurrentModification`] instead of ever reading
//! shifted or stale elements:
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut names: GrowVec<&str> = ["ada", "grace"].into_iter().collect();
//! let mut cursor = names.cursor();
//!
//! assert_eq!(cursor.advance(&names).unwrap(), Some(&"ada"));
//!
//! names.push("edsger"); // structural change
//! assert!(cursor.advance(&names).is_err());
//!
//! // a fresh cursor sees the new content
//! let mut cursor = names.cursor();
//! assert_eq!(cursor.advance(&names).unwrap(), Some(&"ada"));
//! ```
//!
//! Value-only writes do not count as structural: replacing an element via
//! [`GrowVec::set`] or through `as_mut_slice` leaves cursors valid.
//!
//! # Range operations
//!
//! Ranges insert in bulk with a single tail shift when the source length
//! is known, and a vector can duplicate itself into any position:
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut letters: GrowVec<char> = ['a', 'b', 'c'].into_iter().collect();
//! letters.insert_range(1, ['x', 'y']).unwrap();
//! assert_eq!(letters.to_vec(), ['a', 'x', 'y', 'b', 'c']);
//!
//! let mut short: GrowVec<char> = ['a', 'b', 'c'].into_iter().collect();
//! short.insert_self(1).unwrap();
//! assert_eq!(short.to_vec(), ['a', 'a', 'b', 'c', 'b', 'c']);
//! ```
//!
//! # Iterator support
//!
//! Besides cursors, `GrowVec` implements the standard Rust iteration
//! traits; borrow-bound iterators cannot be invalidated at all, the
//! borrow checker sees to that:
//!
//! ```
//! use growvec::GrowVec;
//!
//! let numbers: GrowVec<i32> = (1..=3).collect();
//!
//! let doubled: Vec<i32> = numbers.iter().map(|n| n * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let mut total = 0;
//! for n in &numbers {
//!     total += n;
//! }
//! assert_eq!(total, 6);
//!
//! let owned: Vec<i32> = numbers.into_iter().collect();
//! assert_eq!(owned, vec![1, 2, 3]);
//! ```

extern crate alloc;

mod core;
mod erased;
mod error;
mod iter;
mod raw;

// Re-export public types and traits
pub use crate::core::GrowVec;
pub use crate::erased::ErasedVec;
pub use crate::error::GrowVecError;
pub use crate::iter::{Cursor, GrowVecIntoIter, GrowVecIter};
