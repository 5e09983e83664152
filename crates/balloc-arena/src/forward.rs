//! Upward-growing placement.
//!
//! The cursor starts at the low bound. A request is placed at the first
//! address at or after the cursor that satisfies its alignment, and the
//! cursor moves to the end of the allocation:
//!
//! ```text
//!  low                cursor  start         end                 high
//!   │▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓│░pad░│■■■■ size ■■■■│                     │
//!                              new cursor ──▶┘
//! ```

use crate::direction::{round_up, sealed, Bounds, Direction, Placement};

/// Bump pointer that grows toward higher addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Forward;

impl sealed::Sealed for Forward {}

impl Direction for Forward {
    const NAME: &'static str = "forward";

    #[inline]
    fn origin(bounds: Bounds) -> usize {
        bounds.low
    }

    #[inline]
    fn place(bounds: Bounds, cursor: usize, size: usize, align: usize) -> Option<Placement> {
        let start = round_up(cursor, align)?;
        let end = start.checked_add(size)?;
        if end > bounds.high {
            return None;
        }
        Some(Placement { start, cursor: end })
    }

    #[inline]
    fn used(bounds: Bounds, cursor: usize) -> usize {
        cursor - bounds.low
    }

    #[inline]
    fn remaining(bounds: Bounds, cursor: usize) -> usize {
        bounds.high - cursor
    }
}
