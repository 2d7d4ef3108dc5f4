//! The page provider interface: an external collaborator that
//! supplies and reclaims fixed-size, page-aligned regions. The allocator
//! never assumes anything about how pages are backed — mmap, a pre-reserved
//! arena, a memory-mapped file — it only relies on the contract below.

use core::ptr::NonNull;

/// Supplies and reclaims [`crate::PAGE_SIZE`]-byte, page-aligned regions.
///
/// Implementations must return mutually non-overlapping pages. They are not
/// required to reuse freed pages, but may.
pub trait PageProvider {
    /// Returns a page-aligned, `PAGE_SIZE`-byte writable region, or `None`
    /// on failure.
    fn alloc_page(&self) -> Option<NonNull<u8>>;

    /// Releases a page previously returned by `alloc_page`.
    ///
    /// The default implementation is a no-op, modeling a provider whose
    /// `free_page` is absent; `release` becomes a no-op for such a provider.
    /// Providers that actually reclaim memory must override this.
    fn free_page(&self, _page: NonNull<u8>) {}
}

/// A convenience [`PageProvider`] backed by the global system allocator.
///
/// Not part of the allocator's core: the concrete page provider is an
/// external collaborator, not something this crate prescribes. This
/// type exists so the crate's own tests and doctests have something to
/// hand `Allocator::init`, the way `original_source/src/example.c`'s
/// `posix_memalign`/`free` provider backs the reference implementation's
/// own test driver.
#[cfg(feature = "std")]
#[derive(Default, Clone, Copy, Debug)]
pub struct StdPageProvider;

#[cfg(feature = "std")]
impl PageProvider for StdPageProvider {
    fn alloc_page(&self) -> Option<NonNull<u8>> {
        let layout = core::alloc::Layout::from_size_align(crate::PAGE_SIZE, crate::PAGE_SIZE)
            .expect("PAGE_SIZE is a valid layout");
        let ptr = unsafe { std::alloc::alloc(layout) };
        NonNull::new(ptr)
    }

    fn free_page(&self, page: NonNull<u8>) {
        let layout = core::alloc::Layout::from_size_align(crate::PAGE_SIZE, crate::PAGE_SIZE)
            .expect("PAGE_SIZE is a valid layout");
        unsafe { std::alloc::dealloc(page.as_ptr(), layout) };
    }
}
