//! Probe types and allocation sequences.
//!
//! - [`Probe`] — size and alignment of one element, named after the scalar type
//!   it stands in for.
//! - [`MIXED_SCALARS`] — char, short, char, int, char, char.
//! - [`MIXED_WIDE`] — interleaves 1, 2, 4, 8 and 16-byte alignments.

use std::mem;

/// A 16-byte aligned, 16-byte wide element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct Align16(pub [u8; 16]);

/// Layout of one element in a test sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
}

impl Probe {
    pub const fn new(name: &'static str, size: usize, align: usize) -> Self {
        Self { name, size, align }
    }

    pub fn of<T>(name: &'static str) -> Self {
        Self::new(name, mem::size_of::<T>(), mem::align_of::<T>())
    }
}

pub const CHAR: Probe = Probe::new("char", 1, 1);
pub const SHORT: Probe = Probe::new("short", 2, 2);
pub const INT: Probe = Probe::new("int", 4, 4);
pub const LONG: Probe = Probe::new("long", 8, 8);
pub const VEC16: Probe = Probe::new("vec16", 16, 16);

/// The char/short/char/int/char/char pattern.
pub const MIXED_SCALARS: [Probe; 6] = [CHAR, SHORT, CHAR, INT, CHAR, CHAR];

/// Every alignment from 1 to 16, each preceded by an odd-sized byte run.
pub const MIXED_WIDE: [Probe; 9] = [CHAR, SHORT, CHAR, INT, CHAR, LONG, CHAR, VEC16, SHORT];
