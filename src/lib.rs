#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

//! This library provides an iterator over the set bits of an unsigned integer, returning the
//! index of each set bit in ascending order, i.e. `{0, 1, 4}` for the mask `0x13`.
//!
//! ```
//! use bitmask_iter::BitMask;
//!
//! let positions: Vec<u32> = BitMask::new(0x13u8).iter().collect();
//! assert_eq!(positions, [0, 1, 4]);
//! ```

mod scan;
mod word;

/// Set bit iteration over a single unsigned word.
pub mod bitmask;

pub use crate::bitmask::{BitMask, BitPositions, BitPositionsExt, Cursor};
pub use crate::word::Word;
