//! Growth direction and the alignment arithmetic it shares.
//!
//! A [`Direction`] decides where an empty arena's cursor sits and how a
//! request is placed relative to the cursor. [`Forward`](crate::Forward)
//! grows up from the low bound, [`Reverse`](crate::Reverse) grows down from
//! the high bound. The trait is sealed: those two are the only placements.
//!
//! All values here are absolute addresses held as plain integers. No
//! pointer is formed until a placement has passed its bound check.

/// Fixed extremes of an arena's block: `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// First byte of the block.
    pub low: usize,
    /// One past the last byte of the block.
    pub high: usize,
}

/// Where a request lands and where the cursor moves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Aligned start address of the allocation.
    pub start: usize,
    /// Cursor after the allocation.
    pub cursor: usize,
}

/// Round `addr` up to a multiple of `align`, or `None` on overflow.
///
/// `align` must be a power of two.
#[inline]
pub fn round_up(addr: usize, align: usize) -> Option<usize> {
    debug_assert!(align.is_power_of_two());
    Some(addr.checked_add(align - 1)? & !(align - 1))
}

/// Round `addr` down to a multiple of `align`.
///
/// `align` must be a power of two.
#[inline]
pub fn round_down(addr: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    addr & !(align - 1)
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Growth direction of a [`BumpArena`](crate::BumpArena).
pub trait Direction: sealed::Sealed {
    /// Short name used in log events.
    const NAME: &'static str;

    /// Cursor position of an empty arena.
    fn origin(bounds: Bounds) -> usize;

    /// Place `size` bytes aligned to `align` relative to `cursor`.
    ///
    /// Returns `None` if the allocation would cross the far bound. Pure:
    /// callers commit the returned cursor themselves.
    fn place(bounds: Bounds, cursor: usize, size: usize, align: usize) -> Option<Placement>;

    /// Bytes consumed between the origin and `cursor`.
    fn used(bounds: Bounds, cursor: usize) -> usize;

    /// Bytes left between `cursor` and the far bound, before padding.
    fn remaining(bounds: Bounds, cursor: usize) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_up_to_power_of_two() {
        assert_eq!(round_up(0, 8), Some(0));
        assert_eq!(round_up(1, 8), Some(8));
        assert_eq!(round_up(8, 8), Some(8));
        assert_eq!(round_up(9, 4), Some(12));
        assert_eq!(round_up(13, 1), Some(13));
    }

    #[test]
    fn round_up_overflow_is_none() {
        assert_eq!(round_up(usize::MAX, 2), None);
        assert_eq!(round_up(usize::MAX, 1), Some(usize::MAX));
    }

    #[test]
    fn round_down_to_power_of_two() {
        assert_eq!(round_down(0, 8), 0);
        assert_eq!(round_down(7, 8), 0);
        assert_eq!(round_down(15, 4), 12);
        assert_eq!(round_down(16, 16), 16);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rounding_brackets_the_input(addr in 0usize..1 << 40, shift in 0u32..12) {
                let align = 1usize << shift;
                let up = round_up(addr, align).unwrap();
                let down = round_down(addr, align);
                prop_assert_eq!(up % align, 0);
                prop_assert_eq!(down % align, 0);
                prop_assert!(down <= addr && addr <= up);
                prop_assert!(up - addr < align);
                prop_assert!(addr - down < align);
            }
        }
    }
}
