mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer that can be used as a bit mask.
///
/// This trait is sealed and only implemented for the unsigned primitive integers, so a
/// `BitMask<i32>` is rejected at compile time.
pub trait Word: sealed::Sealed + Copy + Eq + std::fmt::Debug {
    /// Number of addressable bits in the word. Also used as the terminal cursor index.
    const BITS: u32;

    /// Returns `true` if no bit is set.
    fn is_zero(self) -> bool;

    /// Shifts right by `shift` bits, returning `None` if `shift >= Self::BITS`.
    fn checked_shr(self, shift: u32) -> Option<Self>;

    /// Number of trailing zero bits.
    fn trailing_zeros(self) -> u32;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Tests a single bit. Bits at or above `Self::BITS` are reported as unset.
    #[inline]
    fn is_bit_set(self, bit: u32) -> bool {
        match self.checked_shr(bit) {
            Some(shifted) => shifted.trailing_zeros() == 0,
            None => false,
        }
    }
}

macro_rules! impl_word {
    ($($t:ty)*) => {$(
        impl sealed::Sealed for $t {}

        impl Word for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn checked_shr(self, shift: u32) -> Option<Self> {
                <$t>::checked_shr(self, shift)
            }

            #[inline]
            fn trailing_zeros(self) -> u32 {
                <$t>::trailing_zeros(self)
            }

            #[inline]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }
        }
    )*}
}

impl_word! { u8 u16 u32 u64 u128 usize }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_type() {
        assert_eq!(<u8 as Word>::BITS, 8);
        assert_eq!(<u16 as Word>::BITS, 16);
        assert_eq!(<u32 as Word>::BITS, 32);
        assert_eq!(<u64 as Word>::BITS, 64);
        assert_eq!(<u128 as Word>::BITS, 128);
        assert_eq!(<usize as Word>::BITS, usize::BITS);
    }
    #[test]
    fn is_bit_set_in_range() {
        assert!(Word::is_bit_set(0x13u8, 0));
        assert!(Word::is_bit_set(0x13u8, 1));
        assert!(!Word::is_bit_set(0x13u8, 2));
        assert!(Word::is_bit_set(0x13u8, 4));
        assert!(Word::is_bit_set(0x80u8, 7));
        assert!(Word::is_bit_set(1u128 << 127, 127));
    }
    #[test]
    fn is_bit_set_past_width() {
        assert!(!Word::is_bit_set(u8::MAX, 8));
        assert!(!Word::is_bit_set(u64::MAX, 64));
        assert!(!Word::is_bit_set(u64::MAX, u32::MAX));
    }
    #[test]
    fn checked_shr_past_width() {
        assert_eq!(Word::checked_shr(0xF0u8, 4), Some(0x0F));
        assert_eq!(Word::checked_shr(0xF0u8, 8), None);
    }
}
