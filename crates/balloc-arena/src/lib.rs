//! Fixed-capacity bump arenas.
//!
//! A [`BumpArena`] reserves one block up front and hands out aligned,
//! typed storage from it by moving a single cursor. Nothing is freed
//! individually: the arena counts live allocations and rewinds the cursor
//! when the count drains to zero, or immediately on
//! [`force_reset`](BumpArena::force_reset).
//!
//! # Architecture
//!
//! ```text
//! BumpArena<D: Direction>
//! ├── RawBuffer    (owned block, [low, high] bounds, freed on drop)
//! ├── cursor       (absolute address, moves away from D::origin)
//! ├── LiveCount    (Empty | Active(n) state machine)
//! └── D            (Forward: round up from low | Reverse: round down from high)
//! ```
//!
//! Exhaustion is routine: [`BumpArena::alloc`] returns `None` and leaves the
//! arena untouched. [`BumpArena::try_alloc`] returns the same outcome as an
//! [`ArenaError`].
//!
//! ```
//! use balloc_arena::ForwardArena;
//!
//! let mut arena = ForwardArena::new(20 * std::mem::size_of::<i32>());
//! assert!(arena.alloc::<i32>(10).is_some());
//! assert!(arena.alloc::<i32>(10).is_some());
//! assert!(arena.alloc::<i32>(10).is_none());
//! assert_eq!(arena.allocation_count(), 2);
//!
//! arena.force_reset();
//! assert_eq!(arena.allocation_count(), 0);
//! ```
//!
//! # Safety
//!
//! `unsafe` is confined to the private `raw` module. Handles returned by
//! the arena are plain pointers: reading or writing through them is up to
//! the caller, and they dangle once the arena rewinds or is dropped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod direction;
pub mod error;
pub mod forward;
pub mod handle;
pub mod lifecycle;
mod raw;
pub mod request;
pub mod reverse;

// Public re-exports for the primary API surface.
pub use arena::{BumpArena, ForwardArena, ReverseArena};
pub use config::ArenaConfig;
pub use direction::Direction;
pub use error::ArenaError;
pub use forward::Forward;
pub use handle::ArenaPtr;
pub use lifecycle::ArenaState;
pub use request::AllocRequest;
pub use reverse::Reverse;
