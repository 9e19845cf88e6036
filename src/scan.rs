use crate::word::Word;

#[cfg(not(feature = "linear-scan"))]
pub(crate) use self::shift_scan as next_set_bit;
#[cfg(feature = "linear-scan")]
pub(crate) use self::linear_scan as next_set_bit;

/// Returns the index of the lowest set bit at or above `from`.
///
/// Shifts the already visited bits out and counts the trailing zeros of what is left.
#[cfg(any(test, not(feature = "linear-scan")))]
#[inline]
pub(crate) fn shift_scan<T: Word>(mask: T, from: u32) -> Option<u32> {
    let rest = mask.checked_shr(from)?;
    if rest.is_zero() {
        None
    } else {
        Some(from + rest.trailing_zeros())
    }
}

/// Returns the index of the lowest set bit at or above `from`.
///
/// Tests one bit at a time, at most `T::BITS` steps.
#[cfg(any(test, feature = "linear-scan"))]
#[inline]
pub(crate) fn linear_scan<T: Word>(mask: T, from: u32) -> Option<u32> {
    (from..T::BITS).find(|&bit| mask.is_bit_set(bit))
}

/// Number of set bits at or above `from`.
#[inline]
pub(crate) fn count_set_bits_from<T: Word>(mask: T, from: u32) -> u32 {
    mask.checked_shr(from).map_or(0, Word::count_ones)
}
