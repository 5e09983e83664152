//! Owned backing block for an arena.
//!
//! This is the only module allowed to contain `unsafe` code. It reserves the
//! block from the global allocator, forms in-bounds pointers into it, and
//! returns the block on drop. Every `unsafe` block carries a `// SAFETY:`
//! comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::config::ArenaConfig;
use crate::direction::Bounds;

/// A fixed-size, exclusively owned byte block.
///
/// Bounds are exposed as absolute addresses (`low()`, `high()`) so placement
/// arithmetic can round on real addresses. Pointers are only ever formed via
/// [`RawBuffer::ptr_at`], after the caller has bounds-checked the offset.
pub(crate) struct RawBuffer {
    base: NonNull<u8>,
    layout: Layout,
    /// Logical size. May be smaller than `layout.size()` (empty arenas).
    capacity: usize,
}

impl RawBuffer {
    /// Reserve a block described by `config`.
    ///
    /// Aborts through [`alloc::handle_alloc_error`] if the global allocator
    /// cannot satisfy the request.
    pub(crate) fn new(config: &ArenaConfig) -> Self {
        let layout = config.layout();
        // SAFETY: `layout` has a non-zero size (`ArenaConfig::layout` reserves
        // at least one byte).
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(base) = NonNull::new(ptr) else {
            alloc::handle_alloc_error(layout);
        };
        Self {
            base,
            layout,
            capacity: config.capacity,
        }
    }

    /// Absolute address of the first byte (`low_bound`).
    #[inline]
    pub(crate) fn low(&self) -> usize {
        self.base.as_ptr().addr()
    }

    /// Absolute address one past the last usable byte (`high_bound`).
    #[inline]
    pub(crate) fn high(&self) -> usize {
        self.low() + self.capacity
    }

    /// Both bounds at once.
    #[inline]
    pub(crate) fn bounds(&self) -> Bounds {
        Bounds {
            low: self.low(),
            high: self.high(),
        }
    }

    /// Logical capacity in bytes.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer to the byte at absolute address `addr`.
    ///
    /// # Panics
    ///
    /// Panics if `addr` lies outside `[low(), high()]`.
    #[inline]
    pub(crate) fn ptr_at(&self, addr: usize) -> NonNull<u8> {
        assert!(
            addr >= self.low() && addr <= self.high(),
            "address {addr:#x} outside arena bounds [{:#x}, {:#x}]",
            self.low(),
            self.high(),
        );
        let offset = addr - self.low();
        // SAFETY: `offset <= capacity <= layout.size()`, so the result stays
        // within the reserved block or one past its end, and it is derived
        // from `base`, keeping the block's provenance.
        unsafe { self.base.add(offset) }
    }
}

impl Drop for RawBuffer {
    fn drop(&mut self) {
        // SAFETY: `base` was returned by `alloc::alloc(self.layout)` in `new`
        // and is released exactly once, here.
        unsafe { alloc::dealloc(self.base.as_ptr(), self.layout) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_respects_configured_alignment() {
        let buf = RawBuffer::new(&ArenaConfig::new(100).with_base_align(64));
        assert_eq!(buf.low() % 64, 0);
        assert_eq!(buf.high() - buf.low(), 100);
        assert_eq!(buf.capacity(), 100);
    }

    #[test]
    fn ptr_at_bounds_are_inclusive() {
        let buf = RawBuffer::new(&ArenaConfig::new(8));
        assert_eq!(buf.ptr_at(buf.low()).as_ptr().addr(), buf.low());
        assert_eq!(buf.ptr_at(buf.high()).as_ptr().addr(), buf.high());
    }

    #[test]
    #[should_panic(expected = "outside arena bounds")]
    fn ptr_at_past_high_panics() {
        let buf = RawBuffer::new(&ArenaConfig::new(8));
        let _ = buf.ptr_at(buf.high() + 1);
    }

    #[test]
    fn empty_buffer_has_equal_bounds() {
        let buf = RawBuffer::new(&ArenaConfig::default());
        assert_eq!(buf.low(), buf.high());
    }
}
