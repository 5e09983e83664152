//! Test utilities for balloc development.
//!
//! Provides probe types with fixed alignments, the mixed-type allocation
//! sequences used by the alignment tests, and helpers that drive any
//! [`BumpArena`] through them.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::ptr::NonNull;

use balloc_arena::{BumpArena, Direction};

pub use fixtures::{Align16, Probe, MIXED_SCALARS, MIXED_WIDE};

/// Whether `addr` is a multiple of `align`.
///
/// Returns `false` for zero and other non-power-of-two alignments.
pub fn is_aligned(addr: usize, align: usize) -> bool {
    align.is_power_of_two() && addr & (align - 1) == 0
}

/// Allocate `count` elements described by `probe`.
pub fn alloc_probe<D: Direction>(
    arena: &mut BumpArena<D>,
    probe: &Probe,
    count: usize,
) -> Option<NonNull<u8>> {
    arena.alloc_raw(probe.size, probe.align, count)
}

/// Run `sequence` once against `arena`, one element per probe.
///
/// Returns `(probe name, address)` for every allocation that succeeded, in
/// order, and stops at the first failure.
pub fn run_sequence<D: Direction>(
    arena: &mut BumpArena<D>,
    sequence: &[Probe],
) -> Vec<(&'static str, usize)> {
    let mut placed = Vec::with_capacity(sequence.len());
    for probe in sequence {
        match alloc_probe(arena, probe, 1) {
            Some(ptr) => placed.push((probe.name, ptr.as_ptr().addr())),
            None => break,
        }
    }
    placed
}

/// Panic with a readable message unless every address in `placed` matches
/// the alignment of its probe in `sequence`.
pub fn assert_sequence_aligned(sequence: &[Probe], placed: &[(&'static str, usize)]) {
    for (probe, &(name, addr)) in sequence.iter().zip(placed) {
        assert_eq!(probe.name, name);
        assert!(
            is_aligned(addr, probe.align),
            "{name} at {addr:#x} is not aligned to {}",
            probe.align,
        );
    }
}
