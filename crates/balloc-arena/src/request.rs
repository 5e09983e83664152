//! Allocation requests.

use std::fmt;
use std::mem;

/// A logical allocation request: `count` elements of `elem_size` bytes,
/// starting at an address that is a multiple of `align`.
///
/// The alignment is always a power of two; [`AllocRequest::new`] enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocRequest {
    elem_size: usize,
    align: usize,
    count: usize,
}

impl AllocRequest {
    /// Build a request from raw parts.
    ///
    /// # Panics
    ///
    /// Panics if `align` is zero or not a power of two.
    pub fn new(elem_size: usize, align: usize, count: usize) -> Self {
        assert!(
            align.is_power_of_two(),
            "alignment must be a power of two, got {align}"
        );
        Self {
            elem_size,
            align,
            count,
        }
    }

    /// Request storage for `count` values of `T`.
    pub fn of<T>(count: usize) -> Self {
        Self {
            elem_size: mem::size_of::<T>(),
            align: mem::align_of::<T>(),
            count,
        }
    }

    /// Size of one element in bytes.
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Required alignment of the starting address.
    pub fn align(&self) -> usize {
        self.align
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total bytes requested, or `None` if `elem_size * count` overflows.
    pub fn byte_len(&self) -> Option<usize> {
        self.elem_size.checked_mul(self.count)
    }
}

impl fmt::Display for AllocRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}B (align {})",
            self.count, self.elem_size, self.align
        )
    }
}
