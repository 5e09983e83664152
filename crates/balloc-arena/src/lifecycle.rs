//! Live-allocation counting with collective reset.
//!
//! Both growth directions share this state machine:
//!
//! ```text
//!            retain              retain / release (n > 1)
//!   Empty ───────────▶ Active(n) ◀──────┐
//!     ▲                  │   └───────────┘
//!     │  release (n==1)  │
//!     └──────────────────┘
//!     ▲
//!     └── clear (from any state)
//! ```
//!
//! The count is not a per-object refcount. It counts `alloc` calls not yet
//! matched by `dealloc`, and the arena reclaims everything at once when it
//! drains to zero.

use std::num::NonZeroUsize;

use crate::error::ArenaError;

/// Observable arena state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaState {
    /// No outstanding allocations; the cursor sits at its origin.
    Empty,
    /// `n` allocations outstanding.
    Active(NonZeroUsize),
}

/// Outcome of a successful [`LiveCount::release`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// One allocation retired; others are still live.
    Retired {
        /// Allocations still outstanding.
        remaining: NonZeroUsize,
    },
    /// The last live allocation was retired. The owner must rewind.
    Drained,
}

/// Count of outstanding allocations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiveCount {
    count: usize,
}

impl LiveCount {
    /// A counter in the `Empty` state.
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Current count.
    #[inline]
    pub fn get(&self) -> usize {
        self.count
    }

    /// Current state.
    pub fn state(&self) -> ArenaState {
        match NonZeroUsize::new(self.count) {
            None => ArenaState::Empty,
            Some(n) => ArenaState::Active(n),
        }
    }

    /// Record one more successful allocation.
    ///
    /// # Panics
    ///
    /// Panics if the count would overflow `usize`. Only reachable with
    /// zero-sized allocations, since every sized one consumes a byte.
    #[inline]
    pub fn retain(&mut self) {
        self.count = self
            .count
            .checked_add(1)
            .unwrap_or_else(|| panic!("live allocation count overflowed"));
    }

    /// Retire one allocation.
    ///
    /// Returns [`Release::Drained`] when this was the last live allocation.
    /// In the `Empty` state the count is left at zero and
    /// [`ArenaError::Underflow`] is returned.
    pub fn release(&mut self) -> Result<Release, ArenaError> {
        match self.state() {
            ArenaState::Empty => Err(ArenaError::Underflow),
            ArenaState::Active(n) => {
                self.count = n.get() - 1;
                Ok(match NonZeroUsize::new(self.count) {
                    Some(remaining) => Release::Retired { remaining },
                    None => Release::Drained,
                })
            }
        }
    }

    /// Drop to `Empty` regardless of the current state.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }
}
