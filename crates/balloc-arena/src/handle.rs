//! Typed handles to arena allocations.
//!
//! An [`ArenaPtr`] is what a successful `alloc` hands back: the aligned
//! start address plus the element count. It does not borrow the arena and
//! the arena does not remember it. After `force_reset`, a draining
//! `dealloc`, or drop of the arena, every handle previously returned is
//! dangling and must not be dereferenced.

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Start of `len` uninitialised `T` slots inside an arena.
pub struct ArenaPtr<T> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<*mut T>,
}

impl<T> ArenaPtr<T> {
    pub(crate) fn new(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Raw pointer to the first element.
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Non-null pointer to the first element.
    pub fn as_non_null(&self) -> NonNull<T> {
        self.ptr
    }

    /// Pointer to the first byte of the allocation.
    pub fn as_bytes(&self) -> NonNull<u8> {
        self.ptr.cast()
    }

    /// Absolute start address.
    pub fn addr(&self) -> usize {
        self.ptr.as_ptr().addr()
    }

    /// Number of `T` slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this allocation holds zero slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Span of the allocation in bytes.
    pub fn byte_len(&self) -> usize {
        self.len * mem::size_of::<T>()
    }

    /// Whether the start address is a multiple of `align`.
    ///
    /// Alignments that are not a power of two (including zero) are never
    /// satisfied.
    pub fn is_aligned_to(&self, align: usize) -> bool {
        align.is_power_of_two() && self.addr() & (align - 1) == 0
    }
}

impl<T> Clone for ArenaPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaPtr<T> {}

impl<T> PartialEq for ArenaPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.len == other.len
    }
}

impl<T> Eq for ArenaPtr<T> {}

impl<T> fmt::Debug for ArenaPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaPtr")
            .field("addr", &format_args!("{:#x}", self.addr()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T> fmt::Display for ArenaPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]@{:#x}",
            std::any::type_name::<T>(),
            self.len,
            self.addr()
        )
    }
}
