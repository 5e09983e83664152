//! Arena configuration parameters.

use std::alloc::Layout;

/// Configuration for a bump arena.
///
/// Controls the size of the backing block and the alignment of its base
/// address. Validated at construction; all values are immutable after the
/// arena is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Capacity of the backing block in bytes.
    ///
    /// Fixed for the lifetime of the arena. A zero-capacity arena is valid
    /// and rejects every non-empty allocation.
    pub capacity: usize,

    /// Alignment of the block's base address in bytes.
    ///
    /// Default: 16. Must be a power of two. Placement rounding works on
    /// absolute addresses, so requests aligned more strictly than this are
    /// still honoured; they just may waste a few leading bytes.
    pub base_align: usize,
}

impl ArenaConfig {
    /// Default base alignment, enough for every primitive scalar type.
    pub const DEFAULT_BASE_ALIGN: usize = 16;

    /// Create a config for a block of `capacity` bytes.
    ///
    /// Uses the default base alignment.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            base_align: Self::DEFAULT_BASE_ALIGN,
        }
    }

    /// Override the base alignment.
    pub fn with_base_align(mut self, base_align: usize) -> Self {
        self.base_align = base_align;
        self
    }

    /// Layout of the reserved block.
    ///
    /// The global allocator does not accept zero-sized layouts, so an empty
    /// arena still reserves one byte. [`capacity`](Self::capacity) remains the
    /// logical size.
    ///
    /// # Panics
    ///
    /// Panics if `base_align` is not a power of two or the rounded size
    /// overflows `isize`.
    pub fn layout(&self) -> Layout {
        assert!(
            self.base_align.is_power_of_two(),
            "base_align must be a power of two, got {}",
            self.base_align,
        );
        Layout::from_size_align(self.capacity.max(1), self.base_align)
            .unwrap_or_else(|_| panic!("arena capacity {} is too large", self.capacity))
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
