//! Downward-growing placement.
//!
//! The cursor starts at the high bound. A request first reserves `size`
//! bytes below the cursor and then rounds the start address down to its
//! alignment:
//!
//! ```text
//!  low                 start          shifted      cursor            high
//!   │                    │■■■■ size ■■■■│░░pad░░░░░│▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓│
//!        new cursor ◀──┘
//! ```
//!
//! Rounding after the subtraction can cost up to `align - 1` bytes more than
//! the request itself. That changes where exhaustion happens compared with
//! padding first and subtracting second, and the two must not be mixed.

use crate::direction::{round_down, sealed, Bounds, Direction, Placement};

/// Bump pointer that grows toward lower addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse;

impl sealed::Sealed for Reverse {}

impl Direction for Reverse {
    const NAME: &'static str = "reverse";

    #[inline]
    fn origin(bounds: Bounds) -> usize {
        bounds.high
    }

    #[inline]
    fn place(bounds: Bounds, cursor: usize, size: usize, align: usize) -> Option<Placement> {
        let shifted = cursor.checked_sub(size)?;
        let start = round_down(shifted, align);
        if start < bounds.low {
            return None;
        }
        Some(Placement {
            start,
            cursor: start,
        })
    }

    #[inline]
    fn used(bounds: Bounds, cursor: usize) -> usize {
        bounds.high - cursor
    }

    #[inline]
    fn remaining(bounds: Bounds, cursor: usize) -> usize {
        cursor - bounds.low
    }
}
