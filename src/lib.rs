//! `slaballoc` — a small-object allocator that carves fixed-size blocks
//! out of pages obtained from a caller-supplied [`page::PageProvider`].
//!
//! Single-threaded: an [`Allocator`] performs no locking and assumes all
//! entry points are called from one thread with respect to one instance.
//! Distinct instances with independent providers may be used concurrently
//! from different threads.
//!
//! ## Example
//!
//! ```rust
//! use slaballoc::{Allocator, page::StdPageProvider};
//!
//! let mut alloc = Allocator::init(StdPageProvider).expect("init");
//! let p = alloc.alloc(64).expect("alloc");
//! alloc.free(Some(p));
//! alloc.release();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub mod allocator;
pub mod bug;
pub mod error;
pub mod node;
pub mod page;
pub mod size_class;
pub mod slab;

pub use allocator::Allocator;
pub use error::{Error, Result};
pub use page::PageProvider;

/// The page size this allocator's pages are assumed to be: 4096 bytes.
/// Out of scope: allocations larger than one page.
pub const PAGE_SIZE: usize = 4096;

/// The minimum block size and natural alignment of size-class 0.
pub const MIN_ALIGNMENT: usize = 32;

/// Number of size classes: `MIN_ALIGNMENT * 2^0 .. MIN_ALIGNMENT * 2^(N-1)`.
pub const SLAB_CLASS_COUNT: usize = 8;

static_assertions::const_assert!(PAGE_SIZE.is_power_of_two());
static_assertions::const_assert!(MIN_ALIGNMENT.is_power_of_two());
static_assertions::const_assert!(MIN_ALIGNMENT < PAGE_SIZE);
static_assertions::const_assert!(SLAB_CLASS_COUNT > 0);
static_assertions::const_assert!(
    MIN_ALIGNMENT << (SLAB_CLASS_COUNT - 1) == PAGE_SIZE
);
static_assertions::const_assert!(size_class::HEADER_SIZE <= MIN_ALIGNMENT);
