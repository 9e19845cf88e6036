use crate::scan::{count_set_bits_from, next_set_bit};
use crate::word::Word;
use std::iter::FusedIterator;

/// Position of a [`BitPositions`] handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Positioned on a set bit of the mask.
    At(u32),
    /// No set bit is left.
    Exhausted,
}

impl Cursor {
    /// Returns the bit index, or `None` if exhausted.
    #[inline]
    pub fn bit(self) -> Option<u32> {
        match self {
            Cursor::At(bit) => Some(bit),
            Cursor::Exhausted => None,
        }
    }

    /// Returns the bit index, or `width` if exhausted.
    #[inline]
    pub fn index(self, width: u32) -> u32 {
        self.bit().unwrap_or(width)
    }

    #[inline]
    fn seek<T: Word>(mask: T, from: u32) -> Self {
        next_set_bit(mask, from).map_or(Cursor::Exhausted, Cursor::At)
    }
}

/// Forward iterator over the indices of the set bits in `T`, in ascending order.
///
/// Besides [`Iterator`] the handle supports explicit stepping with [`advance`] and
/// [`advance_post`], and [`current`] returns `T::BITS` once exhausted.
///
/// Two handles compare equal if their cursors are equal, *regardless of the mask*. This only
/// makes sense for comparing against [`BitPositions::end`]; prefer [`is_exhausted`].
///
/// [`advance`]: BitPositions::advance
/// [`advance_post`]: BitPositions::advance_post
/// [`current`]: BitPositions::current
/// [`is_exhausted`]: BitPositions::is_exhausted
///
/// # Examples
///
/// ```
/// use bitmask_iter::BitPositions;
///
/// let mut iter = BitPositions::new(0x13u8, 0);
/// assert_eq!(iter.current(), 0);
/// assert_eq!(iter.advance().current(), 1);
/// assert_eq!(iter.advance().current(), 4);
/// assert!(iter.advance().is_exhausted());
/// assert_eq!(iter, BitPositions::end(0x13u8));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BitPositions<T> {
    mask: T,
    cursor: Cursor,
}

impl<T: Word> BitPositions<T> {
    /// Creates a handle positioned on the first set bit at or after `start_bit`.
    ///
    /// A `start_bit` at or past `T::BITS` gives an exhausted handle.
    #[inline]
    pub fn new(mask: T, start_bit: u32) -> Self {
        Self {
            mask,
            cursor: Cursor::seek(mask, start_bit),
        }
    }

    /// Creates an exhausted handle.
    #[inline]
    pub fn end(mask: T) -> Self {
        Self {
            mask,
            cursor: Cursor::Exhausted,
        }
    }

    /// The mask being iterated. Never modified.
    #[inline]
    pub fn mask(&self) -> T {
        self.mask
    }

    /// Position of the handle.
    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the current bit index, or `T::BITS` if exhausted.
    #[inline]
    pub fn current(&self) -> u32 {
        self.cursor.index(T::BITS)
    }

    /// Returns the current bit index without advancing, or `None` if exhausted.
    #[inline]
    pub fn peek(&self) -> Option<u32> {
        self.cursor.bit()
    }

    /// Returns `true` once no set bit is left.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }

    /// Moves to the next set bit and returns the advanced handle.
    ///
    /// Does nothing on an exhausted handle.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        if let Cursor::At(bit) = self.cursor {
            debug_assert!(self.mask.is_bit_set(bit), "cursor on unset bit {}", bit);
            self.cursor = Cursor::seek(self.mask, bit + 1);
        }
        self
    }

    /// Moves to the next set bit and returns the handle as it was before.
    #[inline]
    pub fn advance_post(&mut self) -> Self {
        let snapshot = *self;
        self.advance();
        snapshot
    }
}

impl<T> PartialEq for BitPositions<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
    }
}

impl<T> Eq for BitPositions<T> {}

impl<T: Word> Iterator for BitPositions<T> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let bit = self.peek()?;
        self.advance();
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T: Word> ExactSizeIterator for BitPositions<T> {
    #[inline]
    fn len(&self) -> usize {
        match self.cursor {
            Cursor::At(bit) => count_set_bits_from(self.mask, bit) as usize,
            Cursor::Exhausted => 0,
        }
    }
}

impl<T: Word> FusedIterator for BitPositions<T> {}

/// A mask together with the bit index the iteration starts from.
///
/// [`begin`](BitMask::begin) never changes the `BitMask`, so it can be iterated any number
/// of times.
///
/// # Examples
///
/// ```
/// use bitmask_iter::BitMask;
///
/// let mask = BitMask::with_start(0x13u8, 2);
/// assert_eq!(mask.iter().collect::<Vec<_>>(), [4]);
/// assert_eq!(mask.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitMask<T> {
    mask: T,
    start_bit: u32,
}

impl<T: Word> BitMask<T> {
    /// Iterates all set bits of `mask`.
    #[inline]
    pub fn new(mask: T) -> Self {
        Self::with_start(mask, 0)
    }

    /// Iterates the set bits of `mask` at or after `start_bit`.
    #[inline]
    pub fn with_start(mask: T, start_bit: u32) -> Self {
        Self { mask, start_bit }
    }

    /// The mask being iterated.
    #[inline]
    pub fn mask(&self) -> T {
        self.mask
    }

    /// First bit index considered.
    #[inline]
    pub fn start_bit(&self) -> u32 {
        self.start_bit
    }

    /// Handle on the first set bit at or after the start bit.
    #[inline]
    pub fn begin(&self) -> BitPositions<T> {
        BitPositions::new(self.mask, self.start_bit)
    }

    /// Exhausted handle, for comparing against.
    #[inline]
    pub fn end(&self) -> BitPositions<T> {
        BitPositions::end(self.mask)
    }

    /// Same as [`begin`](BitMask::begin).
    #[inline]
    pub fn iter(&self) -> BitPositions<T> {
        self.begin()
    }

    /// Number of set bits at or after the start bit.
    #[inline]
    pub fn len(&self) -> usize {
        count_set_bits_from(self.mask, self.start_bit) as usize
    }

    /// Returns `true` if no set bit is at or after the start bit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Word> IntoIterator for BitMask<T> {
    type Item = u32;
    type IntoIter = BitPositions<T>;

    #[inline]
    fn into_iter(self) -> BitPositions<T> {
        self.begin()
    }
}

impl<T: Word> IntoIterator for &BitMask<T> {
    type Item = u32;
    type IntoIter = BitPositions<T>;

    #[inline]
    fn into_iter(self) -> BitPositions<T> {
        self.begin()
    }
}

/// Iterate the set bits of an unsigned integer directly.
///
/// ```
/// use bitmask_iter::BitPositionsExt;
///
/// assert_eq!(0x13u32.bit_positions().collect::<Vec<_>>(), [0, 1, 4]);
/// assert_eq!(0x13u32.bit_positions_from(1).collect::<Vec<_>>(), [1, 4]);
/// ```
pub trait BitPositionsExt: Word {
    /// Iterator over all set bits.
    #[inline]
    fn bit_positions(self) -> BitPositions<Self> {
        BitPositions::new(self, 0)
    }

    /// Iterator over the set bits at or after `start_bit`.
    #[inline]
    fn bit_positions_from(self, start_bit: u32) -> BitPositions<Self> {
        BitPositions::new(self, start_bit)
    }
}

impl<T: Word> BitPositionsExt for T {}
