//! Benchmark workloads for balloc arenas.
//!
//! Provides allocation loops shared by the criterion benches and tests:
//!
//! - [`churn_mixed`]: fill with int, char, short, char until an int no
//!   longer fits, then force a reset
//! - [`churn_counted`]: allocate a batch, then retire it one `dealloc` at a
//!   time so the last one rewinds the arena

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use balloc_arena::{ArenaError, BumpArena, Direction};

/// Arena capacity used by the reference workload, in bytes.
pub const DEFAULT_CAPACITY: usize = 9876;

/// Fill rounds per [`churn_mixed`] call in the reference workload.
pub const DEFAULT_ROUNDS: usize = 5;

/// Fill `arena` with the int/char/short/char pattern `rounds` times.
///
/// Each round allocates until an `i32` request fails and then calls
/// `force_reset`. Returns the total number of successful allocations.
pub fn churn_mixed<D: Direction>(arena: &mut BumpArena<D>, rounds: usize) -> usize {
    let mut total = 0;
    for _ in 0..rounds {
        while arena.alloc::<i32>(1).is_some() {
            total += 1;
            total += usize::from(arena.alloc::<u8>(1).is_some());
            total += usize::from(arena.alloc::<i16>(1).is_some());
            total += usize::from(arena.alloc::<u8>(1).is_some());
        }
        arena.force_reset();
    }
    total
}

/// Allocate `batch` `u64`s, then retire them one `dealloc` at a time.
///
/// Stops early if the arena fills. Returns how many allocations were made
/// and retired; the arena is empty afterwards.
pub fn churn_counted<D: Direction>(
    arena: &mut BumpArena<D>,
    batch: usize,
) -> Result<usize, ArenaError> {
    let mut made = 0;
    while made < batch && arena.alloc::<u64>(1).is_some() {
        made += 1;
    }
    for _ in 0..made {
        arena.dealloc()?;
    }
    Ok(made)
}
