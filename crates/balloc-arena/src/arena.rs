//! The bump arena: one owned block, one cursor, one live count.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::config::ArenaConfig;
use crate::direction::Direction;
use crate::error::ArenaError;
use crate::forward::Forward;
use crate::handle::ArenaPtr;
use crate::lifecycle::{ArenaState, LiveCount, Release};
use crate::raw::RawBuffer;
use crate::request::AllocRequest;
use crate::reverse::Reverse;

/// Arena whose cursor grows upward from the low bound.
pub type ForwardArena = BumpArena<Forward>;

/// Arena whose cursor grows downward from the high bound.
pub type ReverseArena = BumpArena<Reverse>;

/// A fixed-capacity bump allocator.
///
/// Allocation moves a single cursor through a block reserved at
/// construction; nothing is ever freed individually. Every successful
/// allocation increments a live count. [`dealloc`](Self::dealloc) decrements
/// it and rewinds the cursor once it drains to zero;
/// [`force_reset`](Self::force_reset) rewinds unconditionally.
///
/// Returned [`ArenaPtr`]s do not borrow the arena. They dangle after a
/// rewind or after the arena is dropped, whatever the live count says.
///
/// # Thread safety
///
/// Not `Send` or `Sync`. Use one arena per thread.
pub struct BumpArena<D: Direction> {
    buffer: RawBuffer,
    config: ArenaConfig,
    /// Absolute address of the bump pointer. Always within
    /// `[buffer.low(), buffer.high()]`.
    cursor: usize,
    live: LiveCount,
    _direction: PhantomData<D>,
}

impl<D: Direction> BumpArena<D> {
    /// Create an arena over a fresh block of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self::with_config(ArenaConfig::new(capacity))
    }

    /// Create an arena from an explicit config.
    ///
    /// # Panics
    ///
    /// Panics if `config.base_align` is not a power of two.
    pub fn with_config(config: ArenaConfig) -> Self {
        let buffer = RawBuffer::new(&config);
        let cursor = D::origin(buffer.bounds());
        tracing::debug!(
            direction = D::NAME,
            capacity = config.capacity,
            base_align = config.base_align,
            "arena created"
        );
        Self {
            buffer,
            config,
            cursor,
            live: LiveCount::new(),
            _direction: PhantomData,
        }
    }

    /// Reserve storage for `count` values of `T`.
    ///
    /// Returns `None` when the arena cannot fit the request; the arena is
    /// left exactly as it was.
    #[inline]
    pub fn alloc<T>(&mut self, count: usize) -> Option<ArenaPtr<T>> {
        self.try_alloc(count).ok()
    }

    /// Like [`alloc`](Self::alloc), but reports why the request failed.
    pub fn try_alloc<T>(&mut self, count: usize) -> Result<ArenaPtr<T>, ArenaError> {
        let start = self.try_alloc_request(AllocRequest::of::<T>(count))?;
        Ok(ArenaPtr::new(start.cast(), count))
    }

    /// Reserve `count` elements of `elem_size` bytes aligned to `align`.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    #[inline]
    pub fn alloc_raw(
        &mut self,
        elem_size: usize,
        align: usize,
        count: usize,
    ) -> Option<NonNull<u8>> {
        self.try_alloc_request(AllocRequest::new(elem_size, align, count)).ok()
    }

    /// Place `request` and return its aligned start.
    ///
    /// On failure no state changes: the cursor and live count are those
    /// before the call.
    pub fn try_alloc_request(
        &mut self,
        request: AllocRequest,
    ) -> Result<NonNull<u8>, ArenaError> {
        let bounds = self.buffer.bounds();
        let placement = request
            .byte_len()
            .and_then(|size| D::place(bounds, self.cursor, size, request.align()));

        let Some(placement) = placement else {
            let remaining = self.remaining();
            tracing::trace!(
                direction = D::NAME,
                %request,
                remaining,
                "arena out of capacity"
            );
            return Err(ArenaError::OutOfCapacity {
                requested: request.byte_len().unwrap_or(usize::MAX),
                remaining,
            });
        };

        let start = self.buffer.ptr_at(placement.start);
        self.live.retain();
        self.cursor = placement.cursor;
        Ok(start)
    }

    /// Retire one allocation.
    ///
    /// Decrements the live count and rewinds the arena when it reaches
    /// zero. No particular allocation is freed. With nothing live, returns
    /// [`ArenaError::Underflow`] and leaves the arena untouched.
    pub fn dealloc(&mut self) -> Result<(), ArenaError> {
        match self.live.release() {
            Ok(Release::Retired { .. }) => Ok(()),
            Ok(Release::Drained) => {
                self.rewind();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(direction = D::NAME, "dealloc called on an empty arena");
                Err(err)
            }
        }
    }

    /// Rewind the cursor to its origin and zero the live count.
    ///
    /// Every address handed out so far is invalidated. Safe to call in any
    /// state, any number of times.
    pub fn force_reset(&mut self) {
        self.live.clear();
        self.rewind();
    }

    fn rewind(&mut self) {
        tracing::trace!(direction = D::NAME, used = self.used(), "arena rewound");
        self.cursor = D::origin(self.buffer.bounds());
    }

    /// Number of allocations not yet matched by `dealloc`.
    #[inline]
    pub fn allocation_count(&self) -> usize {
        self.live.get()
    }

    /// Lifecycle state.
    pub fn state(&self) -> ArenaState {
        self.live.state()
    }

    /// Whether no allocations are live.
    pub fn is_empty(&self) -> bool {
        self.state() == ArenaState::Empty
    }

    /// Capacity of the block in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Bytes between the origin and the cursor, padding included.
    pub fn used(&self) -> usize {
        D::used(self.buffer.bounds(), self.cursor)
    }

    /// Bytes between the cursor and the far bound.
    pub fn remaining(&self) -> usize {
        D::remaining(self.buffer.bounds(), self.cursor)
    }

    /// Absolute address of the first byte of the block.
    pub fn base_addr(&self) -> usize {
        self.buffer.low()
    }

    /// Absolute address of the cursor.
    pub fn cursor_addr(&self) -> usize {
        self.cursor
    }

    /// The config this arena was built from.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}

impl<D: Direction> fmt::Debug for BumpArena<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BumpArena")
            .field("direction", &D::NAME)
            .field("capacity", &self.capacity())
            .field("used", &self.used())
            .field("live", &self.live.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    fn fill_then_drain<D: Direction>() {
        let mut arena = BumpArena::<D>::new(20);
        assert!(arena.alloc::<u8>(20).is_some());
        assert_eq!(arena.allocation_count(), 1);
        assert!(arena.alloc::<u8>(1).is_none());
        assert_eq!(arena.allocation_count(), 1);
        arena.dealloc().unwrap();
        assert_eq!(arena.allocation_count(), 0);
        assert!(arena.alloc::<u8>(20).is_some());
        assert_eq!(arena.allocation_count(), 1);
    }

    #[test]
    fn single_dealloc_drains_full_arena() {
        fill_then_drain::<Forward>();
        fill_then_drain::<Reverse>();
    }

    fn oversized_request_does_not_poison<D: Direction>() {
        let mut arena = BumpArena::<D>::new(20 * 4);
        assert!(arena.alloc::<i32>(10).is_some());
        assert!(arena.alloc::<i32>(11).is_none());
        assert!(arena.alloc::<i32>(10).is_some());
    }

    #[test]
    fn oversized_request_then_fitting_request() {
        oversized_request_does_not_poison::<Forward>();
        oversized_request_does_not_poison::<Reverse>();
    }

    fn counted_bulk_free<D: Direction>() {
        let mut arena = BumpArena::<D>::new(256);
        let fresh = arena.alloc::<u64>(1).unwrap().addr();
        arena.force_reset();

        for _ in 0..7 {
            arena.alloc::<u64>(1).unwrap();
        }
        for expected in (0..7).rev() {
            arena.dealloc().unwrap();
            assert_eq!(arena.allocation_count(), expected);
        }
        assert!(arena.is_empty());
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.alloc::<u64>(1).unwrap().addr(), fresh);
    }

    #[test]
    fn dealloc_count_reaches_zero_then_rewinds() {
        counted_bulk_free::<Forward>();
        counted_bulk_free::<Reverse>();
    }

    fn partial_dealloc_keeps_cursor<D: Direction>() {
        let mut arena = BumpArena::<D>::new(64);
        arena.alloc::<u32>(1).unwrap();
        arena.alloc::<u32>(1).unwrap();
        let cursor = arena.cursor_addr();
        arena.dealloc().unwrap();
        assert_eq!(arena.cursor_addr(), cursor);
        assert_eq!(arena.used(), 8);
    }

    #[test]
    fn dealloc_above_zero_does_not_free_space() {
        partial_dealloc_keeps_cursor::<Forward>();
        partial_dealloc_keeps_cursor::<Reverse>();
    }

    fn underflow_is_clamped<D: Direction>() {
        let mut arena = BumpArena::<D>::new(32);
        let first = arena.alloc::<u16>(1).unwrap().addr();
        arena.dealloc().unwrap();

        assert_eq!(arena.dealloc(), Err(ArenaError::Underflow));
        assert_eq!(arena.allocation_count(), 0);
        assert_eq!(arena.alloc::<u16>(1).unwrap().addr(), first);
        assert_eq!(arena.allocation_count(), 1);
    }

    #[test]
    fn dealloc_on_empty_arena_reports_underflow() {
        underflow_is_clamped::<Forward>();
        underflow_is_clamped::<Reverse>();
    }

    fn reset_is_idempotent<D: Direction>() {
        let mut once = BumpArena::<D>::new(64);
        let mut twice = BumpArena::<D>::new(64);
        for arena in [&mut once, &mut twice] {
            arena.alloc::<u8>(3).unwrap();
            arena.alloc::<u32>(2).unwrap();
        }
        once.force_reset();
        twice.force_reset();
        twice.force_reset();

        assert_eq!(once.allocation_count(), 0);
        assert_eq!(twice.allocation_count(), 0);
        let a = once.alloc::<u32>(1).unwrap().addr() - once.base_addr();
        let b = twice.alloc::<u32>(1).unwrap().addr() - twice.base_addr();
        assert_eq!(a, b);
    }

    #[test]
    fn force_reset_twice_equals_once() {
        reset_is_idempotent::<Forward>();
        reset_is_idempotent::<Reverse>();
    }

    #[test]
    fn force_reset_with_live_allocations() {
        let mut arena = ForwardArena::new(64);
        arena.alloc::<u8>(10).unwrap();
        arena.alloc::<u8>(10).unwrap();
        assert_eq!(arena.state(), ArenaState::Active(NonZeroUsize::new(2).unwrap()));
        arena.force_reset();
        assert_eq!(arena.state(), ArenaState::Empty);
        assert_eq!(arena.remaining(), 64);
        assert_eq!(arena.cursor_addr(), arena.base_addr());
    }

    #[test]
    fn zero_capacity_arena_rejects_sized_requests() {
        let mut up = ForwardArena::new(0);
        let mut down = ReverseArena::new(0);
        assert!(up.alloc::<u8>(1).is_none());
        assert!(down.alloc::<u8>(1).is_none());
        assert!(up.alloc::<u8>(0).is_some());
        assert!(down.alloc::<u8>(0).is_some());
    }

    #[test]
    fn size_overflow_is_out_of_capacity() {
        let mut arena = ForwardArena::new(64);
        let err = arena.try_alloc::<u64>(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            ArenaError::OutOfCapacity {
                requested: usize::MAX,
                remaining: 64,
            }
        );
        assert_eq!(arena.allocation_count(), 0);
    }

    #[test]
    fn zero_sized_types_count_but_use_no_space() {
        let mut arena = ReverseArena::new(8);
        let unit = arena.alloc::<()>(100).unwrap();
        assert_eq!(unit.len(), 100);
        assert_eq!(unit.byte_len(), 0);
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.allocation_count(), 1);
    }

    #[test]
    #[allow(unsafe_code)]
    fn written_values_do_not_overlap() {
        let mut arena = ForwardArena::new(64);
        let a = arena.alloc::<u32>(2).unwrap();
        let b = arena.alloc::<u16>(3).unwrap();
        // SAFETY: both spans were just reserved in a live arena and are
        // disjoint; each is written before it is read.
        unsafe {
            a.as_ptr().write(0xAAAA_AAAA);
            a.as_ptr().add(1).write(0xBBBB_BBBB);
            for i in 0..3 {
                b.as_ptr().add(i).write(i as u16);
            }
            assert_eq!(*a.as_ptr(), 0xAAAA_AAAA);
            assert_eq!(*a.as_ptr().add(1), 0xBBBB_BBBB);
            assert_eq!(*b.as_ptr().add(2), 2);
        }
    }

    #[test]
    fn debug_lists_direction_and_usage() {
        let mut arena = ReverseArena::new(32);
        arena.alloc::<u8>(4).unwrap();
        assert_eq!(
            format!("{arena:?}"),
            "BumpArena { direction: \"reverse\", capacity: 32, used: 4, live: 1 }"
        );
    }
}
